//! Tactical position model
//!
//! Idealized formation positions as a pure function of ball location, team
//! side and player role. No tracking data is consulted.

use super::roles::PlayerRole;
use super::separation::{resolve_separation, SeparationReport};
use crate::config::{SeparationConfig, TacticalConfig};
use crate::models::{PlayerId, TeamSide};
use crate::pitch::{Pitch, PitchPos};

#[derive(Debug, Clone)]
pub struct TacticalModel {
    pitch: Pitch,
    tactical: TacticalConfig,
    separation: SeparationConfig,
}

impl TacticalModel {
    pub fn new(pitch: Pitch, tactical: TacticalConfig, separation: SeparationConfig) -> Self {
        Self { pitch, tactical, separation }
    }

    pub fn pitch(&self) -> &Pitch {
        &self.pitch
    }

    /// Express a pitch position in the side's attacking frame (attacking toward +x).
    /// The mapping is its own inverse.
    #[inline]
    pub fn to_team_frame(&self, side: TeamSide, pos: PitchPos) -> PitchPos {
        if side.attacks_right() {
            pos
        } else {
            self.pitch.half_turn(pos)
        }
    }

    /// Length-axis shift applied to the whole team, in the team's attacking frame.
    ///
    /// Past the threshold the team pushes up by `attack_factor`; short of it the
    /// team drops off by the smaller `defend_factor`.
    pub fn team_shift(&self, side: TeamSide, ball: PitchPos) -> f64 {
        let ball_x = self.to_team_frame(side, ball).x;
        let threshold = self.tactical.midfield_threshold * self.pitch.length;

        if ball_x > threshold {
            (ball_x - threshold) * self.tactical.attack_factor
        } else {
            -(threshold - ball_x) * self.tactical.defend_factor
        }
    }

    /// Formation position of one player before teammates are separated.
    pub fn tactical_position(&self, role: PlayerRole, side: TeamSide, ball: PitchPos) -> PitchPos {
        let (len_frac, wid_frac) = role.base_slot();
        let shift = self.team_shift(side, ball);

        let local = self.pitch.clamp(PitchPos {
            x: len_frac * self.pitch.length + shift,
            y: wid_frac * self.pitch.width,
        });
        self.to_team_frame(side, local)
    }

    /// Tactical positions for a whole team with teammates pushed apart.
    ///
    /// Output is ordered by player id regardless of input order, which keeps
    /// the separation pass (and therefore every frame) deterministic.
    pub fn team_shape(
        &self,
        side: TeamSide,
        players: &[(PlayerId, PlayerRole)],
        ball: PitchPos,
    ) -> TeamShape {
        let mut ordered = players.to_vec();
        ordered.sort_by_key(|(id, _)| *id);

        let mut positions: Vec<PitchPos> =
            ordered.iter().map(|(_, role)| self.tactical_position(*role, side, ball)).collect();
        let report = resolve_separation(&mut positions, &self.separation, &self.pitch);

        TeamShape {
            positions: ordered.into_iter().map(|(id, _)| id).zip(positions).collect(),
            report,
        }
    }
}

/// Resolved tactical positions of one team, ordered by player id.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamShape {
    pub positions: Vec<(PlayerId, PitchPos)>,
    pub report: SeparationReport,
}

impl TeamShape {
    pub fn position_of(&self, id: PlayerId) -> Option<PitchPos> {
        self.positions.binary_search_by_key(&id, |(pid, _)| *pid).ok().map(|i| self.positions[i].1)
    }
}
