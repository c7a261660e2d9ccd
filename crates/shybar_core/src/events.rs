//! Gesture and environment event types
//!
//! The controller consumes these instead of any toolkit's recognizer or
//! notification objects; the host glue translates native events into them.

use std::sync::atomic::{AtomicU64, Ordering};

/// Phase of a pan gesture as reported by the host's recognizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

impl PanPhase {
    /// Whether this phase terminates the gesture.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PanPhase::Ended | PanPhase::Cancelled | PanPhase::Failed
        )
    }
}

/// A pan gesture update along the scroll axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanEvent {
    pub phase: PanPhase,
    /// Cumulative translation since the gesture began, positive downward.
    pub translation_y: f32,
}

impl PanEvent {
    pub const fn new(phase: PanPhase, translation_y: f32) -> Self {
        Self {
            phase,
            translation_y,
        }
    }

    pub const fn began() -> Self {
        Self::new(PanPhase::Began, 0.0)
    }

    pub const fn changed(translation_y: f32) -> Self {
        Self::new(PanPhase::Changed, translation_y)
    }

    pub const fn ended(translation_y: f32) -> Self {
        Self::new(PanPhase::Ended, translation_y)
    }
}

/// Environment transitions after which a partially hidden header is unsafe;
/// each forces the header fully visible without animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleSignal {
    Foregrounded,
    Backgrounded,
    OrientationChanged,
}

/// Token identifying the pan recognizer a controller installs on a surface.
///
/// Surfaces record installed handles, which makes recognizer add/remove
/// observable: after a detach the surface must report the handle gone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GestureHandle(u64);

impl GestureHandle {
    /// Allocate a process-unique handle.
    pub fn next() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}
