//! Count-up animation timing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Timing of the result reveal and count-up.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnimationConfig {
    /// Count-up duration in milliseconds. Default: 1000. Zero jumps straight to the value.
    pub duration_ms: Option<u64>,
    /// Paint cycle period in milliseconds. Default: 16.
    pub frame_interval_ms: Option<u64>,
    /// Delay before the result container turns visible. Default: 10.
    pub reveal_delay_ms: Option<u64>,
}

impl AnimationConfig {
    pub fn effective_duration(&self) -> Duration {
        Duration::from_millis(
            self.duration_ms
                .unwrap_or(defaults::DEFAULT_ANIMATION_DURATION_MS),
        )
    }

    pub fn effective_frame_interval(&self) -> Duration {
        Duration::from_millis(
            self.frame_interval_ms
                .unwrap_or(defaults::DEFAULT_FRAME_INTERVAL_MS),
        )
    }

    pub fn effective_reveal_delay(&self) -> Duration {
        Duration::from_millis(
            self.reveal_delay_ms
                .unwrap_or(defaults::DEFAULT_REVEAL_DELAY_MS),
        )
    }
}
