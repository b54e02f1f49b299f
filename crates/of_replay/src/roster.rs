//! Read-only player metadata cache
//!
//! Built once when a match is loaded and never mutated afterwards. Lookups by
//! id are O(1); per-side lists are kept sorted by player id so frame assembly
//! iterates players in a stable order.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{ReplayError, Result};
use crate::models::{PlayerId, PlayerMeta, TeamId, TeamSide};
use crate::tactical::PlayerRole;

#[derive(Debug, Clone)]
pub struct RosterEntry {
    pub meta: PlayerMeta,
    pub side: TeamSide,
    pub role: PlayerRole,
}

#[derive(Debug, Clone)]
pub struct RosterCache {
    home_team: TeamId,
    away_team: TeamId,
    entries: HashMap<PlayerId, RosterEntry>,
    home: Vec<(PlayerId, PlayerRole)>,
    away: Vec<(PlayerId, PlayerRole)>,
}

impl RosterCache {
    pub fn build(
        home_team: TeamId,
        away_team: TeamId,
        roster: impl IntoIterator<Item = PlayerMeta>,
    ) -> Result<Self> {
        let mut entries = HashMap::new();
        let mut home = Vec::new();
        let mut away = Vec::new();

        for meta in roster {
            let side = if meta.team_id == home_team {
                TeamSide::Home
            } else if meta.team_id == away_team {
                TeamSide::Away
            } else {
                return Err(ReplayError::UnknownTeam { player_id: meta.id, team_id: meta.team_id });
            };

            if entries.contains_key(&meta.id) {
                return Err(ReplayError::DuplicatePlayer(meta.id));
            }

            let role = PlayerRole::from_label(&meta.role);
            match side {
                TeamSide::Home => home.push((meta.id, role)),
                TeamSide::Away => away.push((meta.id, role)),
            }
            entries.insert(meta.id, RosterEntry { meta, side, role });
        }

        home.sort_by_key(|(id, _)| *id);
        away.sort_by_key(|(id, _)| *id);

        debug!(home = home.len(), away = away.len(), "roster cache built");

        Ok(Self { home_team, away_team, entries, home, away })
    }

    #[inline]
    pub fn get(&self, id: PlayerId) -> Option<&RosterEntry> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Players of one side with their parsed roles, ordered by id.
    pub fn side(&self, side: TeamSide) -> &[(PlayerId, PlayerRole)] {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    pub fn team_id(&self, side: TeamSide) -> TeamId {
        match side {
            TeamSide::Home => self.home_team,
            TeamSide::Away => self.away_team,
        }
    }

    pub fn side_of_team(&self, team_id: TeamId) -> Option<TeamSide> {
        if team_id == self.home_team {
            Some(TeamSide::Home)
        } else if team_id == self.away_team {
            Some(TeamSide::Away)
        } else {
            None
        }
    }

    /// All player ids, ordered.
    pub fn player_ids(&self) -> Vec<PlayerId> {
        let mut ids: Vec<PlayerId> = self.entries.keys().copied().collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<PlayerMeta> {
        vec![
            PlayerMeta::new(7, 7, "RW", 1),
            PlayerMeta::new(1, 1, "Goalkeeper", 1),
            PlayerMeta::new(30, 9, "Striker", 2),
            PlayerMeta::new(21, 1, "GK", 2),
        ]
    }

    #[test]
    fn test_build_splits_sides_in_id_order() {
        let cache = RosterCache::build(TeamId(1), TeamId(2), roster()).unwrap();

        assert_eq!(cache.len(), 4);
        assert_eq!(
            cache.side(TeamSide::Home),
            &[(PlayerId(1), PlayerRole::GK), (PlayerId(7), PlayerRole::RW)]
        );
        assert_eq!(
            cache.side(TeamSide::Away),
            &[(PlayerId(21), PlayerRole::GK), (PlayerId(30), PlayerRole::ST)]
        );
        assert_eq!(cache.get(PlayerId(30)).map(|e| e.side), Some(TeamSide::Away));
        assert_eq!(cache.player_ids(), vec![PlayerId(1), PlayerId(7), PlayerId(21), PlayerId(30)]);
    }

    #[test]
    fn test_duplicate_player_rejected() {
        let mut players = roster();
        players.push(PlayerMeta::new(7, 17, "LW", 1));

        let err = RosterCache::build(TeamId(1), TeamId(2), players).unwrap_err();
        assert!(matches!(err, ReplayError::DuplicatePlayer(PlayerId(7))));
    }

    #[test]
    fn test_unknown_team_rejected() {
        let players = vec![PlayerMeta::new(5, 5, "CB", 99)];

        let err = RosterCache::build(TeamId(1), TeamId(2), players).unwrap_err();
        assert!(matches!(
            err,
            ReplayError::UnknownTeam { player_id: PlayerId(5), team_id: TeamId(99) }
        ));
    }

    #[test]
    fn test_unknown_role_label_uses_fallback() {
        let players = vec![PlayerMeta::new(5, 5, "Libero", 1)];
        let cache = RosterCache::build(TeamId(1), TeamId(2), players).unwrap();
        assert_eq!(cache.get(PlayerId(5)).map(|e| e.role), Some(PlayerRole::FALLBACK));
    }

    #[test]
    fn test_side_of_team() {
        let cache = RosterCache::build(TeamId(1), TeamId(2), roster()).unwrap();
        assert_eq!(cache.side_of_team(TeamId(2)), Some(TeamSide::Away));
        assert_eq!(cache.side_of_team(TeamId(3)), None);
        assert_eq!(cache.team_id(TeamSide::Home), TeamId(1));
    }
}
