//! Validated header travel metrics
//!
//! The controller clamps header motion against these. The clamp interval
//! `[-delta_limit, status_inset]` is only meaningful when the header is
//! taller than the status area it tucks under, so construction validates
//! `header_height > status_inset >= 0`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MetricsError {
    #[error("status inset must be non-negative, got {0}")]
    NegativeStatusInset(f32),
    #[error("header height ({height}) must exceed the status inset ({inset})")]
    HeaderTooShort { height: f32, inset: f32 },
}

/// Header geometry constants for one travel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderMetrics {
    header_height: f32,
    status_inset: f32,
}

impl HeaderMetrics {
    pub fn new(header_height: f32, status_inset: f32) -> Result<Self, MetricsError> {
        if status_inset < 0.0 {
            return Err(MetricsError::NegativeStatusInset(status_inset));
        }
        if header_height <= status_inset {
            return Err(MetricsError::HeaderTooShort {
                height: header_height,
                inset: status_inset,
            });
        }
        Ok(Self {
            header_height,
            status_inset,
        })
    }

    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    pub fn status_inset(&self) -> f32 {
        self.status_inset
    }

    /// Maximum distance the header may travel (height minus status inset).
    /// The header origin is clamped to `[-delta_limit, status_inset]`.
    pub fn delta_limit(&self) -> f32 {
        self.header_height - self.status_inset
    }

    /// Full travel for a programmatic show from fully collapsed.
    pub fn full_height(&self) -> f32 {
        self.header_height + self.status_inset
    }
}
