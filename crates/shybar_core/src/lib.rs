//! shybar core primitives
//!
//! This crate provides the foundational types for the shybar header
//! controller:
//!
//! - **Geometry**: plain value types for frames, offsets, and insets
//! - **Capability traits**: the seams the host environment implements so
//!   the controller stays free of any concrete UI toolkit
//! - **Events**: pan gesture phases and environment lifecycle signals
//! - **State**: the header's visual phase and validated travel metrics

pub mod chrome;
pub mod events;
pub mod geometry;
pub mod metrics;
pub mod state;

pub use chrome::{
    Fadeable, Follower, Framed, HeaderChrome, HeaderScrollObserver, HostContainer, ScrollSurface,
    SharedChrome, SharedContainer, SharedFollower, SharedFramed, SharedObserver, SharedSurface,
    WeakChrome, WeakContainer, WeakSurface,
};
pub use events::{GestureHandle, LifecycleSignal, PanEvent, PanPhase};
pub use geometry::{EdgeInsets, Point, Rect, Size};
pub use metrics::{HeaderMetrics, MetricsError};
pub use state::HeaderState;
