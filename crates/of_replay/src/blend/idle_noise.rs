//! Deterministic idle motion
//!
//! Each axis follows `amplitude × sin(2π f t + φ)`. Frequency and phase are
//! hashed from the player id, so the same player always sways the same way
//! and no RNG state exists anywhere.

// FxHasher, not DefaultHasher: the latter is not stable across Rust versions.
use fxhash::FxHasher;
use std::f64::consts::TAU;
use std::hash::{Hash, Hasher};

use crate::models::PlayerId;

/// Sway frequency range in Hz
pub const MIN_FREQUENCY: f64 = 0.15;
pub const MAX_FREQUENCY: f64 = 0.35;

/// Hash salts, one per derived quantity
mod salt {
    pub const FREQ_X: u32 = 0x0100;
    pub const FREQ_Y: u32 = 0x0101;
    pub const PHASE_X: u32 = 0x0200;
    pub const PHASE_Y: u32 = 0x0201;
}

/// Map (player, salt) onto [min, max).
#[inline]
fn hashed_f64(player_id: PlayerId, salt: u32, min: f64, max: f64) -> f64 {
    let mut hasher = FxHasher::default();
    player_id.0.hash(&mut hasher);
    salt.hash(&mut hasher);
    let hash = hasher.finish();

    // Top 53 bits keep the unit value strictly below 1.0
    let unit = (hash >> 11) as f64 / (1u64 << 53) as f64;
    min + (max - min) * unit
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwayParams {
    pub freq_x: f64,
    pub freq_y: f64,
    pub phase_x: f64,
    pub phase_y: f64,
}

impl SwayParams {
    pub fn for_player(player_id: PlayerId) -> Self {
        Self {
            freq_x: hashed_f64(player_id, salt::FREQ_X, MIN_FREQUENCY, MAX_FREQUENCY),
            freq_y: hashed_f64(player_id, salt::FREQ_Y, MIN_FREQUENCY, MAX_FREQUENCY),
            phase_x: hashed_f64(player_id, salt::PHASE_X, 0.0, TAU),
            phase_y: hashed_f64(player_id, salt::PHASE_Y, 0.0, TAU),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdleNoise {
    amplitude: f64,
}

impl IdleNoise {
    pub fn new(amplitude: f64) -> Self {
        Self { amplitude }
    }

    pub fn is_silent(&self) -> bool {
        self.amplitude == 0.0
    }

    /// Offset (dx, dy) for one player at time `t`; each axis within ±amplitude.
    pub fn offset(&self, player_id: PlayerId, t: f64) -> (f64, f64) {
        if self.is_silent() {
            return (0.0, 0.0);
        }
        let p = SwayParams::for_player(player_id);
        (
            self.amplitude * (TAU * p.freq_x * t + p.phase_x).sin(),
            self.amplitude * (TAU * p.freq_y * t + p.phase_y).sin(),
        )
    }
}
