//! Playback Clock Configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Slowest playback multiplier (default: 1.0)
    pub min_speed: f64,
    /// Fastest playback multiplier (default: 4.0)
    pub max_speed: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { min_speed: 1.0, max_speed: 4.0 }
    }
}
