use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::player::{PlayerId, TeamId};
use crate::pitch::PitchPos;

/// Which path of the blender produced a position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PositionSource {
    /// Smoothstep between two close tracking samples
    Tracked,
    /// Partway between a tracking sample and the tactical position
    Blended,
    /// Pure tactical position, no nearby tracking data
    Tactical,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct PlayerFrame {
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub jersey_number: u8,
    pub position: PitchPos,
    pub source: PositionSource,
}

/// Everything the renderer needs for one timestamp. Players are ordered by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct RenderFrame {
    /// Timestamp after clamping to the match bounds
    pub t: f64,
    pub ball: PitchPos,
    pub players: Vec<PlayerFrame>,
}

impl RenderFrame {
    pub fn player(&self, id: PlayerId) -> Option<&PlayerFrame> {
        self.players.binary_search_by_key(&id, |p| p.player_id).ok().map(|idx| &self.players[idx])
    }

    pub fn team(&self, team_id: TeamId) -> impl Iterator<Item = &PlayerFrame> {
        self.players.iter().filter(move |p| p.team_id == team_id)
    }
}
