//! Tactical Shift Configuration

use serde::{Deserialize, Serialize};

/// Whole-team shift driven by the ball's x position
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TacticalConfig {
    /// Fraction of pitch length (in the team's attacking frame) that separates
    /// pushing up from dropping off (default: 0.6)
    pub midfield_threshold: f64,
    /// Forward shift per unit of ball distance beyond the threshold (default: 0.3)
    pub attack_factor: f64,
    /// Backward shift per unit of ball distance short of the threshold (default: 0.2)
    pub defend_factor: f64,
}

impl Default for TacticalConfig {
    fn default() -> Self {
        Self { midfield_threshold: 0.6, attack_factor: 0.3, defend_factor: 0.2 }
    }
}
