//! # Replay Configuration
//!
//! Every numeric tunable of the replay engine lives here so nothing in the
//! timeline, tactical or blending code carries a hidden magic number.
//!
//! ## Presets
//! - `broadcast` (default): light idle noise, 3s transitions
//! - `analysis`: no idle noise, short transitions, exact tracked positions
//! - `smooth`: long transitions for slow-motion viewing
//!
//! ## Usage
//! ```rust
//! use of_replay::config::ReplayConfig;
//!
//! let config = ReplayConfig::default();
//! let analysis = ReplayConfig::analysis();
//! assert!(config.validate().is_ok() && analysis.validate().is_ok());
//! ```
//!
//! ## Environment Variables
//!
//! - `OF_REPLAY_PROFILE`: Select preset (broadcast, analysis, smooth)

mod blend_config;
mod playback_config;
mod separation_config;
mod tactical_config;
mod timeline_config;

pub use blend_config::BlendConfig;
pub use playback_config::PlaybackConfig;
pub use separation_config::SeparationConfig;
pub use tactical_config::TacticalConfig;
pub use timeline_config::TimelineConfig;

use crate::error::{ReplayError, Result};
use crate::pitch::Pitch;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Complete replay engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReplayConfig {
    /// Pitch dimensions in the event provider's units
    #[serde(default)]
    pub pitch: Pitch,
    #[serde(default)]
    pub timeline: TimelineConfig,
    #[serde(default)]
    pub tactical: TacticalConfig,
    #[serde(default)]
    pub separation: SeparationConfig,
    #[serde(default)]
    pub blend: BlendConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
}

impl ReplayConfig {
    /// Broadcast-style playback (default)
    pub fn broadcast() -> Self {
        Self::default()
    }

    /// Tactical analysis: positions are never perturbed and the switch to
    /// tactical positions is quick
    pub fn analysis() -> Self {
        let mut cfg = Self::default();
        cfg.blend.idle_noise_amplitude = 0.0;
        cfg.blend.transition_window = 2.0;
        cfg
    }

    /// Slow, soft transitions
    pub fn smooth() -> Self {
        let mut cfg = Self::default();
        cfg.blend.transition_window = 6.0;
        cfg.blend.max_tracking_gap = 15.0;
        cfg.separation.max_iterations = 12;
        cfg
    }

    /// Load preset from OF_REPLAY_PROFILE or use default
    pub fn from_env_or_default() -> Self {
        match env::var("OF_REPLAY_PROFILE").unwrap_or_default().to_lowercase().as_str() {
            "analysis" => Self::analysis(),
            "smooth" => Self::smooth(),
            _ => Self::default(),
        }
    }

    /// Parse a YAML document; missing sections fall back to their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let cfg: Self = serde_yaml::from_str(yaml)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a JSON document; missing sections fall back to their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        fn invalid(msg: String) -> Result<()> {
            Err(ReplayError::InvalidConfig(msg))
        }

        let p = &self.pitch;
        if !(p.length.is_finite() && p.length > 0.0 && p.width.is_finite() && p.width > 0.0) {
            return invalid(format!("pitch must be positive, got {}x{}", p.length, p.width));
        }

        let t = &self.tactical;
        if !(t.midfield_threshold > 0.0 && t.midfield_threshold < 1.0) {
            return invalid(format!(
                "midfield_threshold must be in (0, 1), got {}",
                t.midfield_threshold
            ));
        }
        for (name, v) in [("attack_factor", t.attack_factor), ("defend_factor", t.defend_factor)] {
            if !(0.0..=1.0).contains(&v) {
                return invalid(format!("{} must be in [0, 1], got {}", name, v));
            }
        }
        if t.attack_factor < t.defend_factor {
            warn!(
                attack = t.attack_factor,
                defend = t.defend_factor,
                "attack_factor below defend_factor: teams will retreat harder than they push"
            );
        }

        let s = &self.separation;
        if !(s.min_separation >= 0.0 && s.separation_margin >= 0.0) {
            return invalid("separation distances must be non-negative".to_string());
        }
        if s.max_iterations == 0 {
            return invalid("separation max_iterations must be at least 1".to_string());
        }
        if !(s.convergence_tolerance > 0.0) {
            return invalid(format!(
                "convergence_tolerance must be positive, got {}",
                s.convergence_tolerance
            ));
        }

        let b = &self.blend;
        if !(b.max_tracking_gap > 0.0 && b.transition_window > 0.0) {
            return invalid("max_tracking_gap and transition_window must be positive".to_string());
        }
        // A longer window would pull positions off a sample at the sample's own timestamp.
        if b.transition_window > b.max_tracking_gap {
            return invalid(format!(
                "transition_window {} exceeds max_tracking_gap {}",
                b.transition_window, b.max_tracking_gap
            ));
        }
        if !(b.idle_noise_amplitude >= 0.0) {
            return invalid(format!(
                "idle_noise_amplitude must be non-negative, got {}",
                b.idle_noise_amplitude
            ));
        }
        // Two players drifting toward each other close at most 2·√2·amplitude.
        let worst_drift = 2.0 * std::f64::consts::SQRT_2 * b.idle_noise_amplitude;
        if worst_drift > s.separation_margin {
            return invalid(format!(
                "idle_noise_amplitude {} can close {:.3} between teammates, more than separation_margin {}",
                b.idle_noise_amplitude, worst_drift, s.separation_margin
            ));
        }

        let pb = &self.playback;
        if !(pb.min_speed > 0.0 && pb.min_speed <= pb.max_speed) {
            return invalid(format!(
                "playback speeds must satisfy 0 < min <= max, got {}..{}",
                pb.min_speed, pb.max_speed
            ));
        }

        Ok(())
    }
}

// ========== Tests ==========
