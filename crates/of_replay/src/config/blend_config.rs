//! Position Blending Configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendConfig {
    /// Largest gap (seconds) between two tracking samples that is still
    /// interpolated directly (default: 10.0). Inclusive: a gap of exactly this
    /// length is interpolated; the tactical fallback starts only past it.
    pub max_tracking_gap: f64,
    /// Time (seconds) to blend between a real sample and the tactical
    /// position (default: 3.0)
    pub transition_window: f64,
    /// Peak per-axis idle noise offset in pitch units; 0 disables it (default: 0.2).
    ///
    /// Noise is added on top of interpolated positions too, so exact sample
    /// midpoints are only reproduced with noise off (`ReplayConfig::analysis()`).
    pub idle_noise_amplitude: f64,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self { max_tracking_gap: 10.0, transition_window: 3.0, idle_noise_amplitude: 0.2 }
    }
}
