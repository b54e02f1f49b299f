//! Collision Resolution Configuration

use serde::{Deserialize, Serialize};

/// Bounded pairwise separation of teammates' tactical positions.
///
/// The loop is a heuristic: it stops after `max_iterations` passes even if
/// overlaps remain, so perfect non-overlap is not guaranteed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeparationConfig {
    /// Minimum distance between two teammates (default: 2.0)
    pub min_separation: f64,
    /// Extra spacing added when a pair is pushed apart (default: 0.6).
    /// Also bounds how far idle noise may move players toward each other.
    pub separation_margin: f64,
    /// Maximum number of full pairwise passes per team shape (default: 8)
    pub max_iterations: u32,
    /// Stop once the largest remaining overlap falls below this (default: 0.01)
    pub convergence_tolerance: f64,
}

impl Default for SeparationConfig {
    fn default() -> Self {
        Self {
            min_separation: 2.0,
            separation_margin: 0.6,
            max_iterations: 8,
            convergence_tolerance: 0.01,
        }
    }
}
