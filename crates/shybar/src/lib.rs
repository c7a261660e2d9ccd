//! shybar: scroll-coupled header controller
//!
//! Couples the visibility of a persistent header region to the drag
//! motion of a scrollable content area: dragging content up collapses the
//! header out of view, dragging down (or reaching the top) restores it.
//! A gesture released mid-transition snaps to the nearer terminal state,
//! and header contents fade linearly across the travel range.
//!
//! The controller is toolkit-agnostic. Hosts implement the capability
//! traits from [`shybar_core`] (header chrome, scroll surface, host
//! container), forward pan and lifecycle events, and drive in-flight snap
//! animations with [`HeaderScrollController::tick`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shybar::{ControllerRegistry, FollowOptions, HostId, PanEvent};
//!
//! let mut registry = ControllerRegistry::new();
//! let controller = registry.controller_for(HostId(1), &chrome, &container);
//! controller.follow(&surface, FollowOptions::default());
//!
//! // per recognizer callback:
//! controller.handle_pan(PanEvent::changed(translation_y));
//! ```

pub mod config;
pub mod controller;
pub mod registry;

pub use config::HeaderConfig;
pub use controller::{FollowOptions, HeaderScrollController};
pub use registry::{ControllerId, ControllerRegistry, HostId};

pub use shybar_core::{
    EdgeInsets, Fadeable, Follower, Framed, GestureHandle, HeaderChrome, HeaderMetrics,
    HeaderScrollObserver, HeaderState, HostContainer, LifecycleSignal, MetricsError, PanEvent,
    PanPhase, Point, Rect, ScrollSurface, SharedChrome, SharedContainer, SharedFollower,
    SharedFramed, SharedObserver, SharedSurface, Size,
};
