//! Player roles and their base formation slots
//!
//! Base slots are fractions of pitch (length, width) in the team's own
//! attacking frame: length 0 = own goal line, 1 = opponent goal line;
//! width 0 = the left touchline as seen by a player facing the opponent goal.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Starting position of a player
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerRole {
    GK,
    LB,
    LCB,
    CB,
    RCB,
    RB,
    LWB,
    RWB,
    CDM,
    LDM,
    RDM,
    LM,
    LCM,
    CM,
    RCM,
    RM,
    LAM,
    CAM,
    RAM,
    LW,
    RW,
    LF,
    CF,
    RF,
    ST,
}

impl PlayerRole {
    /// Role used when a label cannot be recognised.
    pub const FALLBACK: PlayerRole = PlayerRole::CM;

    /// Base slot as (length fraction, width fraction).
    pub fn base_slot(self) -> (f64, f64) {
        match self {
            PlayerRole::GK => (0.04, 0.50),
            PlayerRole::LB => (0.20, 0.15),
            PlayerRole::LCB => (0.19, 0.35),
            PlayerRole::CB => (0.18, 0.50),
            PlayerRole::RCB => (0.19, 0.65),
            PlayerRole::RB => (0.20, 0.85),
            PlayerRole::LWB => (0.28, 0.10),
            PlayerRole::RWB => (0.28, 0.90),
            PlayerRole::LDM => (0.30, 0.35),
            PlayerRole::CDM => (0.30, 0.50),
            PlayerRole::RDM => (0.30, 0.65),
            PlayerRole::LM => (0.38, 0.15),
            PlayerRole::LCM => (0.37, 0.35),
            PlayerRole::CM => (0.37, 0.50),
            PlayerRole::RCM => (0.37, 0.65),
            PlayerRole::RM => (0.38, 0.85),
            PlayerRole::LAM => (0.45, 0.30),
            PlayerRole::CAM => (0.45, 0.50),
            PlayerRole::RAM => (0.45, 0.70),
            PlayerRole::LW => (0.52, 0.12),
            PlayerRole::RW => (0.52, 0.88),
            PlayerRole::LF => (0.54, 0.35),
            PlayerRole::CF => (0.55, 0.50),
            PlayerRole::RF => (0.54, 0.65),
            PlayerRole::ST => (0.56, 0.50),
        }
    }

    /// Parse a roster label, falling back to central midfield for anything unknown.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_else(|_| {
            debug!(label, fallback = ?Self::FALLBACK, "unrecognised role label");
            Self::FALLBACK
        })
    }
}

impl FromStr for PlayerRole {
    type Err = ();

    /// Accepts short codes ("LCB", "DM") and provider long names
    /// ("Left Center Back", "Centre Defensive Midfield").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .to_uppercase()
            .replace(['-', '_'], " ")
            .replace("CENTRE", "CENTER")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        let role = match normalized.as_str() {
            "GK" | "GOALKEEPER" => Self::GK,
            "LB" | "LEFT BACK" => Self::LB,
            "LCB" | "LEFT CENTER BACK" => Self::LCB,
            "CB" | "CENTER BACK" | "DEF" | "DEFENDER" => Self::CB,
            "RCB" | "RIGHT CENTER BACK" => Self::RCB,
            "RB" | "RIGHT BACK" => Self::RB,
            "LWB" | "LEFT WING BACK" => Self::LWB,
            "RWB" | "RIGHT WING BACK" => Self::RWB,
            "CDM" | "DM" | "CENTER DEFENSIVE MIDFIELD" => Self::CDM,
            "LDM" | "LEFT DEFENSIVE MIDFIELD" => Self::LDM,
            "RDM" | "RIGHT DEFENSIVE MIDFIELD" => Self::RDM,
            "LM" | "LEFT MIDFIELD" => Self::LM,
            "LCM" | "LEFT CENTER MIDFIELD" => Self::LCM,
            "CM" | "CENTER MIDFIELD" | "MID" | "MIDFIELDER" => Self::CM,
            "RCM" | "RIGHT CENTER MIDFIELD" => Self::RCM,
            "RM" | "RIGHT MIDFIELD" => Self::RM,
            "LAM" | "LEFT ATTACKING MIDFIELD" => Self::LAM,
            "CAM" | "AM" | "CENTER ATTACKING MIDFIELD" => Self::CAM,
            "RAM" | "RIGHT ATTACKING MIDFIELD" => Self::RAM,
            "LW" | "LEFT WING" => Self::LW,
            "RW" | "RIGHT WING" => Self::RW,
            "LF" | "LEFT CENTER FORWARD" => Self::LF,
            "CF" | "CENTER FORWARD" | "SECONDARY STRIKER" => Self::CF,
            "RF" | "RIGHT CENTER FORWARD" => Self::RF,
            "ST" | "STRIKER" | "FWD" | "FORWARD" => Self::ST,
            _ => return Err(()),
        };
        Ok(role)
    }
}
