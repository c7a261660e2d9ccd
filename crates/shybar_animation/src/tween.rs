//! Timed value interpolation

use crate::easing::Easing;

/// A time-driven interpolation between two values.
///
/// Stepped with elapsed seconds; a zero (or negative) duration tween is
/// finished immediately and reports its end value, so callers can use one
/// code path for animated and instant transitions.
#[derive(Clone, Debug)]
pub struct Tween {
    start: f32,
    end: f32,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl Tween {
    pub fn new(start: f32, end: f32, duration: f32) -> Self {
        Self {
            start,
            end,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn end(&self) -> f32 {
        self.end
    }

    /// Advance by `dt` seconds and return the current value.
    pub fn step(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        if self.is_finished() {
            tracing::trace!(end = self.end, "tween finished");
        }
        self.value()
    }

    /// Current value at the elapsed time.
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.end;
        }
        let progress = self.easing.apply(self.elapsed / self.duration);
        self.start + (self.end - self.start) * progress
    }

    pub fn is_finished(&self) -> bool {
        self.duration <= 0.0 || self.elapsed >= self.duration
    }
}
