//! Timing configuration for waits and gestures.
//!
//! All convenience defaults (wait timeout, poll interval, swipe hold
//! durations) live here as one value passed explicitly to [`Poller`]
//! and [`Scroller`] constructors — there is no mutable global state.
//!
//! [`Poller`]: crate::poller::Poller
//! [`Scroller`]: crate::search::Scroller

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing settings for the waiting and gesture layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitConfig {
    /// Timeout applied by waits when the caller passes `None`.
    pub default_timeout_ms: u64,
    /// Sleep between existence re-checks inside a bounded wait.
    pub poll_interval_ms: u64,
    /// Hold duration for the quick full-surface scroll swipe.
    pub quick_swipe_ms: u64,
    /// Hold duration for element-relative horizontal swipes.
    pub element_swipe_ms: u64,
    /// Timeout used to resolve a locator inside
    /// [`swipe_element_offscreen`](crate::search::Scroller::swipe_element_offscreen).
    pub offscreen_resolve_timeout_ms: u64,
    /// Timeout used by [`assert_has_text`](crate::assert::Asserter::assert_has_text).
    pub text_assert_timeout_ms: u64,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            default_timeout_ms: 5_000,
            poll_interval_ms: 100,
            quick_swipe_ms: 200,
            element_swipe_ms: 300,
            offscreen_resolve_timeout_ms: 10_000,
            text_assert_timeout_ms: 30_000,
        }
    }
}

impl WaitConfig {
    /// Default wait timeout as a [`Duration`].
    pub fn default_timeout(&self) -> Duration {
        Duration::from_millis(self.default_timeout_ms)
    }

    /// Poll interval as a [`Duration`].
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Quick swipe hold as a [`Duration`].
    pub fn quick_swipe(&self) -> Duration {
        Duration::from_millis(self.quick_swipe_ms)
    }

    /// Element swipe hold as a [`Duration`].
    pub fn element_swipe(&self) -> Duration {
        Duration::from_millis(self.element_swipe_ms)
    }

    /// Offscreen-resolve timeout as a [`Duration`].
    pub fn offscreen_resolve_timeout(&self) -> Duration {
        Duration::from_millis(self.offscreen_resolve_timeout_ms)
    }

    /// Text-assertion timeout as a [`Duration`].
    pub fn text_assert_timeout(&self) -> Duration {
        Duration::from_millis(self.text_assert_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = WaitConfig::default();
        assert_eq!(config.default_timeout(), Duration::from_secs(5));
        assert_eq!(config.poll_interval(), Duration::from_millis(100));
        assert_eq!(config.quick_swipe(), Duration::from_millis(200));
        assert_eq!(config.element_swipe(), Duration::from_millis(300));
        assert_eq!(config.offscreen_resolve_timeout(), Duration::from_secs(10));
        assert_eq!(config.text_assert_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn roundtrip_serialization() {
        let config = WaitConfig {
            default_timeout_ms: 2_000,
            ..WaitConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let loaded: WaitConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn deserialize_empty_json_uses_defaults() {
        let loaded: WaitConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(loaded, WaitConfig::default());
    }
}
