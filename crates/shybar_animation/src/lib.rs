//! shybar animation primitives
//!
//! Easing curves and a timed [`Tween`] for distributing a snap transition's
//! remaining travel across event-loop ticks. Deliberately small: the
//! controller reacts to externally reported motion and only ever animates
//! the short snap to a terminal header state.

pub mod easing;
pub mod tween;

pub use easing::Easing;
pub use tween::Tween;
