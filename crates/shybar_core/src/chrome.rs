//! Capability traits implemented by the host environment
//!
//! The controller talks to its host exclusively through these seams, so it
//! carries no dependency on any concrete UI toolkit. Hosts hand the
//! controller `Arc<Mutex<dyn ..>>` handles; the controller keeps only
//! `Weak` references and treats a dead upgrade as a silent no-op.

use std::sync::{Arc, Mutex, Weak};

use crate::events::GestureHandle;
use crate::geometry::{EdgeInsets, Point, Rect, Size};
use crate::state::HeaderState;

/// Settable-opacity capability for header sub-elements registered as fade
/// targets (accessory items, decorative views). Registration is explicit:
/// anything the chrome does not surface here is left untouched.
pub trait Fadeable: Send {
    fn alpha(&self) -> f32;
    fn set_alpha(&mut self, alpha: f32);
}

/// The persistent top chrome region whose geometry the controller drives.
pub trait HeaderChrome: Send {
    fn frame(&self) -> Rect;
    fn set_frame(&mut self, frame: Rect);

    /// Whether the header draws over the content instead of above it.
    /// Opaque headers require the content area to be resized as the
    /// header moves; translucent ones only need offset clamping.
    fn is_translucent(&self) -> bool;

    /// Whether header-hosted controls accept input.
    fn set_interactive(&mut self, enabled: bool);

    fn set_title_alpha(&mut self, alpha: f32);
    fn set_tint_alpha(&mut self, alpha: f32);

    /// Visit every sub-element registered as a fade target.
    fn for_each_fade_target(&mut self, apply: &mut dyn FnMut(&mut dyn Fadeable));
}

/// The scrollable content surface the controller follows.
///
/// Installed recognizer handles must be recorded so detaching is
/// observable; the surface itself never interprets gestures.
pub trait ScrollSurface: Send {
    fn content_offset(&self) -> Point;
    fn set_content_offset(&mut self, offset: Point);
    fn content_size(&self) -> Size;

    /// The surface's frame in the host container (the visible viewport).
    fn viewport(&self) -> Rect;
    fn content_insets(&self) -> EdgeInsets;

    fn install_pan_recognizer(&mut self, handle: GestureHandle);
    fn remove_pan_recognizer(&mut self, handle: GestureHandle);
    fn has_pan_recognizer(&self, handle: GestureHandle) -> bool;
}

/// The container owning the header and the content area.
pub trait HostContainer: Send {
    fn frame(&self) -> Rect;

    /// Height of the status area the header tucks under.
    fn status_inset(&self) -> f32;

    /// Frame of the currently visible content view.
    fn content_frame(&self) -> Rect;
    fn set_content_frame(&mut self, frame: Rect);

    /// Thickness of opaque bottom chrome (e.g. a tab bar) subtracted from
    /// the content area when the header is opaque.
    fn bottom_chrome_inset(&self) -> f32;
}

/// Auxiliary view translated in step with the header (e.g. a secondary
/// toolbar pinned below it).
pub trait Follower: Send {
    fn translate_by(&mut self, dy: f32);
}

/// Frame get/set capability, used for the keep-size anchor whose frame is
/// restored after each opaque-mode geometry pass.
pub trait Framed: Send {
    fn frame(&self) -> Rect;
    fn set_frame(&mut self, frame: Rect);
}

/// Observer of controller state changes. Both callbacks fire exactly once
/// per actual change, never for same-state writes.
pub trait HeaderScrollObserver: Send {
    fn will_change_state(&mut self, _next: HeaderState) {}
    fn did_change_state(&mut self, _current: HeaderState) {}
}

pub type SharedChrome = Arc<Mutex<dyn HeaderChrome>>;
pub type SharedSurface = Arc<Mutex<dyn ScrollSurface>>;
pub type SharedContainer = Arc<Mutex<dyn HostContainer>>;
pub type SharedFollower = Arc<Mutex<dyn Follower>>;
pub type SharedFramed = Arc<Mutex<dyn Framed>>;
pub type SharedObserver = Arc<Mutex<dyn HeaderScrollObserver>>;

pub type WeakChrome = Weak<Mutex<dyn HeaderChrome>>;
pub type WeakSurface = Weak<Mutex<dyn ScrollSurface>>;
pub type WeakContainer = Weak<Mutex<dyn HostContainer>>;
