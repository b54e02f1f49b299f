//! Position Blender
//!
//! - `easing`: smoothstep and transition weights
//! - `idle_noise`: deterministic per-player sway
//! - `blender`: per-player resolution and frame assembly

pub mod blender;
pub mod easing;
pub mod idle_noise;

pub use blender::PositionBlender;
pub use easing::{smoothstep, transition_weight};
pub use idle_noise::IdleNoise;
