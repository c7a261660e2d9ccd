//! Controller behavior configuration

/// Tunable behavior for a header scroll controller.
#[derive(Clone, Copy, Debug)]
pub struct HeaderConfig {
    /// Dead-zone distance absorbed before a new scroll direction starts
    /// moving the header; small jitters never toggle it.
    pub max_delay: f32,
    /// Allow hiding the header over content that fits entirely within the
    /// viewport.
    pub should_scroll_when_content_fits: bool,
    /// Suppress hiding while the surface is elastically overscrolled past
    /// its top inset. Off by default; the delay dead zone covers the
    /// common case.
    pub top_bounce_blocks_hiding: bool,
    /// Base time unit for partial-scroll snap animation; actual duration
    /// scales with remaining travel over half the header height.
    pub snap_unit_duration: f32,
    /// Default duration for animated show/hide.
    pub show_hide_duration: f32,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            max_delay: 0.0,
            should_scroll_when_content_fits: true,
            top_bounce_blocks_hiding: false,
            snap_unit_duration: 0.2,
            show_hide_duration: 0.1,
        }
    }
}

impl HeaderConfig {
    /// React to a direction change only after `distance` of travel.
    pub fn with_delay(distance: f32) -> Self {
        Self {
            max_delay: distance.max(0.0),
            ..Default::default()
        }
    }

    /// The bounce-blocks-hide variant: top overscroll suppresses hiding
    /// instead of the delay dead zone absorbing it.
    pub fn bounce_blocked() -> Self {
        Self {
            top_bounce_blocks_hiding: true,
            ..Default::default()
        }
    }

    /// Keep the header still over under-filled content.
    pub fn pinned_when_content_fits() -> Self {
        Self {
            should_scroll_when_content_fits: false,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HeaderConfig::default();
        assert_eq!(config.max_delay, 0.0);
        assert!(config.should_scroll_when_content_fits);
        assert!(!config.top_bounce_blocks_hiding);
        assert_eq!(config.snap_unit_duration, 0.2);
        assert_eq!(config.show_hide_duration, 0.1);
    }

    #[test]
    fn test_with_delay_clamps_negative() {
        assert_eq!(HeaderConfig::with_delay(-5.0).max_delay, 0.0);
        assert_eq!(HeaderConfig::with_delay(30.0).max_delay, 30.0);
    }

    #[test]
    fn test_presets() {
        assert!(HeaderConfig::bounce_blocked().top_bounce_blocks_hiding);
        assert!(!HeaderConfig::pinned_when_content_fits().should_scroll_when_content_fits);
    }
}
