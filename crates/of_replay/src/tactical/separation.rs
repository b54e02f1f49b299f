//! Bounded collision resolution between teammates
//!
//! Pairs closer than `min_separation + separation_margin` are pushed apart
//! symmetrically along the vector joining them until they sit that far apart.
//! Settling on the margin, not on `min_separation`, leaves room for idle noise
//! without pulling a settled pair back under `min_separation`. Each pass is
//! O(n²); the number of passes is capped, so a crowded shape may still contain
//! overlaps when the cap is hit.

use crate::config::SeparationConfig;
use crate::pitch::{direction, Pitch, PitchPos};

/// Axis used when two players occupy exactly the same point: the first of the
/// pair moves toward y = 0, the second toward y = width.
const COINCIDENT_AXIS: (f64, f64) = (0.0, 1.0);

/// Outcome of one resolution run
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SeparationReport {
    /// Passes executed (≤ `max_iterations`)
    pub iterations: u32,
    /// Largest remaining shortfall below `min_separation` after the last pass
    pub residual_overlap: f64,
}

impl SeparationReport {
    pub fn converged(&self, config: &SeparationConfig) -> bool {
        self.residual_overlap < config.convergence_tolerance
    }
}

/// Largest `min_separation - distance` over all pairs, 0 when nobody overlaps.
pub fn worst_overlap(positions: &[PitchPos], min_separation: f64) -> f64 {
    let mut worst = 0.0f64;
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let d = positions[i].distance(positions[j]);
            if d < min_separation {
                worst = worst.max(min_separation - d);
            }
        }
    }
    worst
}

/// Push crowded players apart in place; positions stay on the pitch.
///
/// A zero `min_separation` disables the pass. The result depends on slice
/// order, so callers pass players in a stable order.
pub fn resolve_separation(
    positions: &mut [PitchPos],
    config: &SeparationConfig,
    pitch: &Pitch,
) -> SeparationReport {
    let n = positions.len();
    let mut report = SeparationReport::default();
    if config.min_separation <= 0.0 {
        return report;
    }
    let target = config.min_separation + config.separation_margin;

    for iteration in 0..config.max_iterations {
        let mut worst = 0.0f64;

        for i in 0..n {
            for j in (i + 1)..n {
                let d = positions[i].distance(positions[j]);
                if d >= target {
                    continue;
                }
                worst = worst.max(target - d);

                let (dx, dy) = direction(positions[i], positions[j]).unwrap_or(COINCIDENT_AXIS);
                let push = (target - d) * 0.5;

                positions[i] = pitch.clamp(positions[i].offset(-dx * push, -dy * push));
                positions[j] = pitch.clamp(positions[j].offset(dx * push, dy * push));
            }
        }

        report.iterations = iteration + 1;
        if worst < config.convergence_tolerance {
            break;
        }
    }

    report.residual_overlap = worst_overlap(positions, config.min_separation);
    report
}
