//! Header scroll controller
//!
//! Couples a header's visibility to the drag motion of a followed scroll
//! surface. Dragging content up hides the header, dragging down (or
//! reaching the top) reveals it; a gesture released mid-transition snaps
//! to the nearer terminal state.
//!
//! The controller owns no toolkit objects: the host implements the
//! capability traits in `shybar_core` and forwards pan and lifecycle
//! events. All work is synchronous on the host's event loop; animated
//! transitions advance only through [`HeaderScrollController::tick`].
//!
//! # Example
//!
//! ```rust,ignore
//! let mut controller = HeaderScrollController::new(&chrome, &container);
//! controller.follow(&surface, FollowOptions::default());
//!
//! // host glue, per pan recognizer callback:
//! controller.handle_pan(PanEvent::changed(translation_y));
//!
//! // host glue, per frame while `controller.tick(dt)` returns true
//! ```

use std::sync::{Arc, Weak};

use smallvec::SmallVec;

use shybar_animation::Tween;
use shybar_core::{
    GestureHandle, HeaderMetrics, HeaderState, LifecycleSignal, PanEvent, PanPhase, Rect,
    ScrollSurface, SharedChrome, SharedContainer, SharedFollower, SharedFramed, SharedObserver,
    SharedSurface, WeakChrome, WeakContainer, WeakSurface,
};

use crate::config::HeaderConfig;

// ============================================================================
// Follow Options
// ============================================================================

/// Optional collaborators bound together with a surface.
#[derive(Default)]
pub struct FollowOptions {
    /// Auxiliary views translated in step with the header.
    pub followers: Vec<SharedFollower>,
    /// Observer of state changes.
    pub delegate: Option<SharedObserver>,
    /// View whose frame is restored after each opaque-mode geometry pass,
    /// cancelling unwanted size changes from layout side effects.
    pub keep_size: Option<SharedFramed>,
}

impl FollowOptions {
    pub fn with_followers(followers: Vec<SharedFollower>) -> Self {
        Self {
            followers,
            ..Default::default()
        }
    }

    pub fn with_delegate(delegate: SharedObserver) -> Self {
        Self {
            delegate: Some(delegate),
            ..Default::default()
        }
    }
}

// ============================================================================
// Snap Animation
// ============================================================================

/// An in-flight transition to a terminal state. The tween interpolates the
/// total delta; each tick applies the increment since the last one.
struct SnapAnimation {
    tween: Tween,
    applied: f32,
    /// State the controller was left in when the animation started; the
    /// completion is stale and ignored if it no longer matches.
    expected: HeaderState,
    /// Terminal state committed on completion, if not already committed
    /// when the animation started.
    commit: Option<HeaderState>,
    /// Restore pan input when finished (programmatic show disables it).
    reenable_pan: bool,
}

// ============================================================================
// Controller
// ============================================================================

/// Delta-driven state machine coupling one header to one scroll surface.
pub struct HeaderScrollController {
    config: HeaderConfig,
    state: HeaderState,
    chrome: WeakChrome,
    container: WeakContainer,
    surface: Option<WeakSurface>,
    gesture: GestureHandle,
    last_gesture_offset: f32,
    pending_delay: f32,
    scroll_coupled: bool,
    pan_enabled: bool,
    lifecycle_subscribed: bool,
    followers: SmallVec<[SharedFollower; 2]>,
    keep_size_anchor: Option<(SharedFramed, Rect)>,
    delegate: Option<SharedObserver>,
    snap: Option<SnapAnimation>,
}

impl HeaderScrollController {
    /// Create a controller bound to a header and its owning container.
    pub fn new(chrome: &SharedChrome, container: &SharedContainer) -> Self {
        Self::with_config(chrome, container, HeaderConfig::default())
    }

    pub fn with_config(
        chrome: &SharedChrome,
        container: &SharedContainer,
        config: HeaderConfig,
    ) -> Self {
        Self {
            config,
            state: HeaderState::Expanded,
            chrome: Arc::downgrade(chrome),
            container: Arc::downgrade(container),
            surface: None,
            gesture: GestureHandle::next(),
            last_gesture_offset: 0.0,
            pending_delay: 0.0,
            scroll_coupled: false,
            pan_enabled: true,
            lifecycle_subscribed: false,
            followers: SmallVec::new(),
            keep_size_anchor: None,
            delegate: None,
            snap: None,
        }
    }

    // =========================================================================
    // Read access
    // =========================================================================

    /// Current visual phase of the header.
    pub fn state(&self) -> HeaderState {
        self.state
    }

    /// The currently followed surface, if it is still alive.
    pub fn followed_surface(&self) -> Option<SharedSurface> {
        self.surface.as_ref().and_then(Weak::upgrade)
    }

    pub fn is_scroll_coupled(&self) -> bool {
        self.scroll_coupled
    }

    /// Gate gesture input without changing the visible state.
    pub fn set_scroll_coupled(&mut self, coupled: bool) {
        self.scroll_coupled = coupled;
    }

    pub fn is_lifecycle_subscribed(&self) -> bool {
        self.lifecycle_subscribed
    }

    /// Handle identifying this controller's pan recognizer on surfaces.
    pub fn gesture_handle(&self) -> GestureHandle {
        self.gesture
    }

    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut HeaderConfig {
        &mut self.config
    }

    // =========================================================================
    // Lifecycle API
    // =========================================================================

    /// Follow a scroll surface, replacing any prior binding.
    ///
    /// The previous surface is fully detached first (recognizer removed,
    /// accumulated translation cleared) so no listener or stale state
    /// carries over. Re-enables scroll coupling and subscribes to
    /// lifecycle signals.
    pub fn follow(&mut self, surface: &SharedSurface, options: FollowOptions) {
        self.detach_surface();

        self.followers = options.followers.into_iter().collect();
        self.delegate = options.delegate;
        self.keep_size_anchor = options.keep_size.map(|anchor| {
            let frame = anchor.lock().unwrap().frame();
            (anchor, frame)
        });

        surface.lock().unwrap().install_pan_recognizer(self.gesture);
        self.surface = Some(Arc::downgrade(surface));
        self.scroll_coupled = true;
        self.pan_enabled = true;
        self.lifecycle_subscribed = true;
        self.pending_delay = self.config.max_delay;
        tracing::debug!("following scroll surface");
    }

    /// Release the followed surface and return to the unbound state.
    ///
    /// With `restore_visible` the header is forced fully visible first;
    /// either way any in-flight snap settles so the header ends in a
    /// terminal position.
    pub fn stop_following(&mut self, restore_visible: bool) {
        if restore_visible {
            self.show_header(false);
        }
        self.reset();
    }

    /// Programmatically reveal the header using the default duration.
    pub fn show_header(&mut self, animated: bool) {
        self.show_header_with(animated, self.config.show_hide_duration);
    }

    /// Programmatically reveal the header.
    ///
    /// No-op while no surface is bound. When not collapsed this only
    /// refreshes chrome alpha. Pan input is suspended for the duration of
    /// an animated reveal.
    pub fn show_header_with(&mut self, animated: bool, duration: f32) {
        if self.followed_surface().is_none() {
            return;
        }
        let Some(metrics) = self.metrics() else {
            return;
        };
        let Some(chrome) = self.chrome.upgrade() else {
            return;
        };

        self.settle_snap();
        if self.state != HeaderState::Collapsed {
            self.update_alpha();
            return;
        }

        self.pan_enabled = false;
        self.last_gesture_offset = 0.0;

        let origin_y = chrome.lock().unwrap().frame().origin.y;
        let delta = origin_y - metrics.status_inset();

        if animated && duration > 0.0 {
            self.set_state(HeaderState::Scrolling);
            self.start_snap(delta, duration, Some(HeaderState::Expanded), true);
        } else {
            self.apply_delta(delta);
            self.set_state(HeaderState::Expanded);
            self.pending_delay = self.config.max_delay;
            self.pan_enabled = true;
        }
        self.compensate_translucent_offset(-metrics.header_height());
    }

    /// Programmatically hide the header using the default duration.
    pub fn hide_header(&mut self, animated: bool) {
        self.hide_header_with(animated, self.config.show_hide_duration);
    }

    /// Programmatically hide the header.
    ///
    /// No-op while no surface is bound; only refreshes chrome alpha when
    /// not expanded.
    pub fn hide_header_with(&mut self, animated: bool, duration: f32) {
        if self.followed_surface().is_none() {
            return;
        }
        let Some(metrics) = self.metrics() else {
            return;
        };
        let Some(chrome) = self.chrome.upgrade() else {
            return;
        };

        self.settle_snap();
        if self.state != HeaderState::Expanded {
            self.update_alpha();
            return;
        }

        let origin_y = chrome.lock().unwrap().frame().origin.y;
        let delta = origin_y + metrics.delta_limit();

        if animated && duration > 0.0 {
            self.set_state(HeaderState::Scrolling);
            self.start_snap(delta, duration, Some(HeaderState::Collapsed), false);
        } else {
            self.apply_delta(delta);
            self.set_state(HeaderState::Collapsed);
            self.pending_delay = self.config.max_delay;
        }
        self.compensate_translucent_offset(metrics.header_height());
    }

    /// Environment transition: always force the header fully visible,
    /// without animation. Stale partial states are unsafe across these.
    pub fn handle_lifecycle(&mut self, signal: LifecycleSignal) {
        if !self.lifecycle_subscribed {
            return;
        }
        tracing::debug!(?signal, "lifecycle signal forces header visible");
        self.show_header(false);
    }

    // =========================================================================
    // Gesture input
    // =========================================================================

    /// Feed one pan recognizer update.
    ///
    /// Position updates drive the delta pipeline; a terminal phase resolves
    /// any partial scroll by snapping to the nearer terminal state.
    pub fn handle_pan(&mut self, event: PanEvent) {
        if !self.scroll_coupled || !self.pan_enabled {
            return;
        }
        if self.followed_surface().is_none() {
            return;
        }

        if event.phase == PanPhase::Began {
            // The user re-grabbed the header; any snap in flight is stale.
            self.snap = None;
            self.last_gesture_offset = 0.0;
        }

        if event.phase != PanPhase::Failed {
            let delta = self.last_gesture_offset - event.translation_y;
            self.last_gesture_offset = event.translation_y;
            if self.should_apply_delta(delta) {
                self.scroll_with_delta(delta, false);
            }
        }

        if event.phase.is_terminal() {
            self.resolve_partial_scroll();
            self.last_gesture_offset = 0.0;
        }
    }

    /// Advance any in-flight snap transition by `dt` seconds.
    ///
    /// Returns true while a transition is still animating.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(mut anim) = self.snap.take() else {
            return false;
        };

        let value = anim.tween.step(dt);
        let delta = value - anim.applied;
        anim.applied = value;
        if delta != 0.0 {
            self.apply_delta(delta);
        }

        if anim.tween.is_finished() {
            self.finish_snap(anim);
            false
        } else {
            self.snap = Some(anim);
            true
        }
    }

    // =========================================================================
    // Delta pipeline
    // =========================================================================

    /// Rubber-band guard: elastic overscroll must not reveal the header.
    ///
    /// A revealing delta is dropped when the inset-padded content extent
    /// does not exceed the viewport (nothing to scroll) or when the
    /// surface is overscrolled past its bottom edge.
    fn should_apply_delta(&self, delta: f32) -> bool {
        let Some(surface) = self.followed_surface() else {
            return false;
        };
        if delta < 0.0 {
            let surface = surface.lock().unwrap();
            let padded = padded_content_height(&*surface);
            let viewport = surface.viewport().size.height;
            if padded <= viewport {
                return false;
            }
            if surface.content_offset().y + viewport > padded {
                return false;
            }
        }
        true
    }

    /// Convert a validated delta into header motion and a state transition.
    ///
    /// Positive deltas hide, negative deltas reveal. The header origin is
    /// clamped to `[-delta_limit, status_inset]`; reaching either bound
    /// commits the matching terminal state and restocks the delay budget.
    fn scroll_with_delta(&mut self, delta: f32, ignore_delay: bool) {
        let Some(surface) = self.followed_surface() else {
            return;
        };
        let Some(chrome) = self.chrome.upgrade() else {
            return;
        };
        let Some(metrics) = self.metrics() else {
            return;
        };

        let origin_y = chrome.lock().unwrap().frame().origin.y;
        let delta_limit = metrics.delta_limit();
        let mut delta = delta;

        if delta > 0.0 {
            // Hiding: consume the dead zone before moving.
            if !ignore_delay {
                self.pending_delay -= delta;
                if self.pending_delay > 0.0 {
                    return;
                }
            }

            if self.config.top_bounce_blocks_hiding && self.is_top_bounced(&surface) {
                return;
            }

            // No point hiding a header over under-filled content.
            if !self.config.should_scroll_when_content_fits
                && self.state != HeaderState::Collapsed
                && self.content_fits(&surface)
            {
                return;
            }

            let mut new_origin = origin_y - delta;
            if new_origin < -delta_limit {
                delta = origin_y + delta_limit;
                new_origin = -delta_limit;
            }

            if new_origin <= -delta_limit {
                self.set_state(HeaderState::Collapsed);
                self.pending_delay = self.config.max_delay;
            } else {
                self.set_state(HeaderState::Scrolling);
            }
        } else if delta < 0.0 {
            // Revealing: the dead zone only holds while the content is
            // actually scrolled below the delay distance.
            if !ignore_delay {
                self.pending_delay += delta;
                let offset_y = surface.lock().unwrap().content_offset().y;
                if self.pending_delay > 0.0 && self.config.max_delay < offset_y {
                    return;
                }
            }

            let mut new_origin = origin_y - delta;
            if new_origin > metrics.status_inset() {
                delta = origin_y - metrics.status_inset();
                new_origin = metrics.status_inset();
            }

            if new_origin >= metrics.status_inset() {
                self.set_state(HeaderState::Expanded);
                self.pending_delay = self.config.max_delay;
            } else {
                self.set_state(HeaderState::Scrolling);
            }
        }

        // A delta clamped to zero must not produce a spurious geometry tick.
        if delta != 0.0 {
            tracing::trace!(delta, origin = origin_y, state = ?self.state, "applying header delta");
            self.apply_delta(delta);
        }
    }

    /// A gesture ended mid-transition: snap to the nearer terminal state.
    ///
    /// The terminal state commits immediately; the remaining travel
    /// animates over a duration proportional to the residual distance.
    fn resolve_partial_scroll(&mut self) {
        let Some(metrics) = self.metrics() else {
            return;
        };
        let Some(chrome) = self.chrome.upgrade() else {
            return;
        };
        if self.state != HeaderState::Scrolling {
            return;
        }

        let origin_y = chrome.lock().unwrap().frame().origin.y;
        let half_height = metrics.header_height() / 2.0;
        let threshold = metrics.status_inset() - half_height;

        let (delta, target) = if origin_y >= threshold {
            (origin_y - metrics.status_inset(), HeaderState::Expanded)
        } else {
            (origin_y + metrics.delta_limit(), HeaderState::Collapsed)
        };
        let duration = (delta / half_height).abs() * self.config.snap_unit_duration;

        tracing::trace!(origin = origin_y, ?target, duration, "resolving partial scroll");
        self.set_state(target);
        self.pending_delay = self.config.max_delay;
        self.start_snap(delta, duration, None, false);
    }

    // =========================================================================
    // Geometry & compensation
    // =========================================================================

    /// Apply a validated delta: sizing, then offset compensation, then
    /// followers, then alpha. The order is load-bearing.
    fn apply_delta(&mut self, delta: f32) {
        self.update_sizing(delta);
        self.restore_content_offset(delta);
        self.update_followers(delta);
        self.update_alpha();
    }

    /// Move the header and, when it is opaque, resize the content area so
    /// header and content never overlap.
    fn update_sizing(&mut self, delta: f32) {
        let Some(chrome) = self.chrome.upgrade() else {
            return;
        };
        let Some(container) = self.container.upgrade() else {
            return;
        };

        let (mut frame, translucent) = {
            let chrome = chrome.lock().unwrap();
            (chrome.frame(), chrome.is_translucent())
        };
        frame.origin.y -= delta;
        chrome.lock().unwrap().set_frame(frame);

        if !translucent {
            let header_bottom = frame.bottom();
            {
                let mut host = container.lock().unwrap();
                let mut content = host.content_frame();
                content.origin.y = header_bottom;
                content.size.height =
                    host.frame().size.height - header_bottom - host.bottom_chrome_inset();
                host.set_content_frame(content);
            }
            // Cancel layout side effects on the anchored view.
            if let Some((anchor, keep)) = &self.keep_size_anchor {
                anchor.lock().unwrap().set_frame(*keep);
            }
        }
    }

    /// Hold the perceived scroll position steady while the header resizes
    /// the content area; translucent headers only need the offset pinned
    /// at the fully collapsed extreme.
    fn restore_content_offset(&mut self, delta: f32) {
        if delta == 0.0 {
            return;
        }
        let Some(surface) = self.followed_surface() else {
            return;
        };
        let Some(chrome) = self.chrome.upgrade() else {
            return;
        };
        let Some(container) = self.container.upgrade() else {
            return;
        };

        let translucent = chrome.lock().unwrap().is_translucent();
        let status_inset = container.lock().unwrap().status_inset();

        let mut surface = surface.lock().unwrap();
        let mut offset = surface.content_offset();
        if translucent {
            if self.state == HeaderState::Collapsed && offset.y < -status_inset {
                offset.y = -status_inset;
                surface.set_content_offset(offset);
            }
        } else {
            let top_inset = surface.content_insets().top;
            offset.y = (offset.y - delta).max(-top_inset);
            surface.set_content_offset(offset);
        }
    }

    fn update_followers(&mut self, delta: f32) {
        for follower in &self.followers {
            follower.lock().unwrap().translate_by(-delta);
        }
    }

    /// Fade chrome contents linearly across the travel range: fully opaque
    /// when expanded, fully transparent when collapsed.
    fn update_alpha(&mut self) {
        let Some(metrics) = self.metrics() else {
            return;
        };
        let Some(chrome) = self.chrome.upgrade() else {
            return;
        };

        let mut chrome = chrome.lock().unwrap();
        let origin_y = chrome.frame().origin.y;
        let alpha = ((origin_y + metrics.delta_limit()) / metrics.header_height()).clamp(0.0, 1.0);

        chrome.set_title_alpha(alpha);
        chrome.set_tint_alpha(alpha);
        chrome.for_each_fade_target(&mut |target| target.set_alpha(alpha));
    }

    // =========================================================================
    // Snap animation plumbing
    // =========================================================================

    fn start_snap(
        &mut self,
        total: f32,
        duration: f32,
        commit: Option<HeaderState>,
        reenable_pan: bool,
    ) {
        self.snap = Some(SnapAnimation {
            tween: Tween::new(0.0, total, duration),
            applied: 0.0,
            expected: self.state,
            commit,
            reenable_pan,
        });
    }

    /// Finish an in-flight snap immediately: apply its remaining travel
    /// and run the completion.
    fn settle_snap(&mut self) {
        if let Some(anim) = self.snap.take() {
            let remaining = anim.tween.end() - anim.applied;
            if remaining != 0.0 {
                self.apply_delta(remaining);
            }
            self.finish_snap(anim);
        }
    }

    fn finish_snap(&mut self, anim: SnapAnimation) {
        // A completion that contradicts the current state is stale.
        if self.state == anim.expected {
            if let Some(target) = anim.commit {
                self.set_state(target);
                self.pending_delay = self.config.max_delay;
            }
        }
        if anim.reenable_pan {
            self.pan_enabled = true;
        }
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    fn set_state(&mut self, next: HeaderState) {
        let changed = next != self.state;
        if changed {
            if let Some(delegate) = &self.delegate {
                delegate.lock().unwrap().will_change_state(next);
            }
        }
        self.state = next;
        if let Some(chrome) = self.chrome.upgrade() {
            chrome
                .lock()
                .unwrap()
                .set_interactive(next == HeaderState::Expanded);
        }
        if changed {
            tracing::trace!(state = ?next, "header state changed");
            if let Some(delegate) = &self.delegate {
                delegate.lock().unwrap().did_change_state(next);
            }
        }
    }

    /// Live travel metrics; None while the chrome or container is gone or
    /// reports degenerate geometry.
    fn metrics(&self) -> Option<HeaderMetrics> {
        let chrome = self.chrome.upgrade()?;
        let container = self.container.upgrade()?;
        let height = chrome.lock().unwrap().frame().size.height;
        let inset = container.lock().unwrap().status_inset();
        HeaderMetrics::new(height, inset).ok()
    }

    fn is_top_bounced(&self, surface: &SharedSurface) -> bool {
        let surface = surface.lock().unwrap();
        surface.content_offset().y + surface.content_insets().top < 0.0
    }

    fn content_fits(&self, surface: &SharedSurface) -> bool {
        let surface = surface.lock().unwrap();
        surface.viewport().size.height >= padded_content_height(&*surface)
    }

    /// Shift a translucent surface's offset so revealed/hidden header
    /// height does not visually jump the content.
    fn compensate_translucent_offset(&mut self, dy: f32) {
        let Some(chrome) = self.chrome.upgrade() else {
            return;
        };
        if !chrome.lock().unwrap().is_translucent() {
            return;
        }
        if let Some(surface) = self.followed_surface() {
            let mut surface = surface.lock().unwrap();
            let mut offset = surface.content_offset();
            offset.y += dy;
            surface.set_content_offset(offset);
        }
    }

    /// Remove the recognizer from the current surface and clear gesture
    /// tracking, settling any snap first.
    fn detach_surface(&mut self) {
        self.settle_snap();
        if let Some(surface) = self.surface.take().and_then(|weak| weak.upgrade()) {
            surface.lock().unwrap().remove_pan_recognizer(self.gesture);
        }
        self.last_gesture_offset = 0.0;
    }

    fn reset(&mut self) {
        self.detach_surface();
        self.scroll_coupled = false;
        self.pan_enabled = true;
        self.lifecycle_subscribed = false;
        self.delegate = None;
        self.followers.clear();
        self.keep_size_anchor = None;
        tracing::debug!("stopped following scroll surface");
    }
}

/// Content height including vertical insets, the extent the surface can
/// actually scroll through.
fn padded_content_height(surface: &dyn ScrollSurface) -> f32 {
    surface.content_size().height + surface.content_insets().vertical_sum()
}
