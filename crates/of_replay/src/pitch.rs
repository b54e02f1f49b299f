//! Pitch coordinates and boundary handling
//!
//! All positions share one coordinate system:
//! - x: 0 = home goal line, `length` = away goal line
//! - y: 0 = one touchline, `width` = the other touchline
//!
//! The home team attacks toward +x. Event providers that use a different
//! convention are normalized by the loading collaborator before data reaches
//! this crate.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// StatsBomb pitch length (x-axis).
pub const DEFAULT_LENGTH: f64 = 120.0;
/// StatsBomb pitch width (y-axis).
pub const DEFAULT_WIDTH: f64 = 80.0;

/// A point on the pitch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
pub struct PitchPos {
    pub x: f64,
    pub y: f64,
}

impl PitchPos {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: PitchPos) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation; `t` is not clamped.
    #[inline]
    pub fn lerp(self, to: PitchPos, t: f64) -> PitchPos {
        PitchPos { x: self.x + (to.x - self.x) * t, y: self.y + (to.y - self.y) * t }
    }

    #[inline]
    pub fn offset(self, dx: f64, dy: f64) -> PitchPos {
        PitchPos { x: self.x + dx, y: self.y + dy }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Unit vector from `from` toward `to`, or `None` when the points coincide.
pub fn direction(from: PitchPos, to: PitchPos) -> Option<(f64, f64)> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len > 1e-9 {
        Some((dx / len, dy / len))
    } else {
        None
    }
}

/// Playing surface dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct Pitch {
    pub length: f64,
    pub width: f64,
}

impl Default for Pitch {
    fn default() -> Self {
        Self { length: DEFAULT_LENGTH, width: DEFAULT_WIDTH }
    }
}

impl Pitch {
    pub fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }

    pub fn centre(&self) -> PitchPos {
        PitchPos { x: self.length * 0.5, y: self.width * 0.5 }
    }

    /// Clamp a position onto the playing surface.
    ///
    /// Non-finite coordinates collapse onto the centre line so a bad input can
    /// never leak NaN into a frame.
    pub fn clamp(&self, pos: PitchPos) -> PitchPos {
        let x = if pos.x.is_nan() { self.length * 0.5 } else { pos.x.clamp(0.0, self.length) };
        let y = if pos.y.is_nan() { self.width * 0.5 } else { pos.y.clamp(0.0, self.width) };
        PitchPos { x, y }
    }

    pub fn contains(&self, pos: PitchPos) -> bool {
        (0.0..=self.length).contains(&pos.x) && (0.0..=self.width).contains(&pos.y)
    }

    /// Half-turn about the centre spot; converts between the home and away
    /// attacking frames in both directions.
    #[inline]
    pub fn half_turn(&self, pos: PitchPos) -> PitchPos {
        PitchPos { x: self.length - pos.x, y: self.width - pos.y }
    }
}
