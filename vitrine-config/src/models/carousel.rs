use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Carousel timings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Time between two automatic advances (ms). Must be non-zero.
    pub autoplay_interval_ms: u64,
    /// How long a "slide X of N" status message stays in the live region
    /// before it is removed (ms). Removing it lets assistive technology pick
    /// up the next announcement even when the text is identical.
    pub announcement_ttl_ms: u64,
    /// Start cycling slides as soon as the carousel is mounted.
    pub autoplay_on_mount: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 5_000,
            announcement_ttl_ms: 1_000,
            autoplay_on_mount: true,
        }
    }
}

impl CarouselConfig {
    /// Time between two automatic advances.
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    /// Lifetime of a slide announcement.
    pub fn announcement_ttl(&self) -> Duration {
        Duration::from_millis(self.announcement_ttl_ms)
    }
}
