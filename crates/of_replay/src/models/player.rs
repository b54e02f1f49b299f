use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema,
)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema,
)]
#[serde(transparent)]
pub struct TeamId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// Static roster entry; never mutated during playback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct PlayerMeta {
    pub id: PlayerId,
    pub jersey_number: u8,
    #[serde(default)]
    pub name: String,
    /// Starting position label, e.g. "LCB" or "Left Center Back"
    pub role: String,
    pub team_id: TeamId,
}

impl PlayerMeta {
    pub fn new(id: u32, jersey_number: u8, role: impl Into<String>, team_id: u32) -> Self {
        Self {
            id: PlayerId(id),
            jersey_number,
            name: String::new(),
            role: role.into(),
            team_id: TeamId(team_id),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct TeamInfo {
    pub id: TeamId,
    #[serde(default)]
    pub name: String,
}

/// Home attacks toward +x, away toward −x.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    #[inline]
    pub fn attacks_right(self) -> bool {
        matches!(self, TeamSide::Home)
    }

    pub fn opponent(self) -> Self {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }
}
