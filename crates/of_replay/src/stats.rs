//! Per-player event statistics
//!
//! Counted once over the whole timeline; events without an acting player
//! are ignored.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{Event, EventOutcome, EventType, PlayerId, TeamSide};
use crate::roster::RosterCache;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema)]
pub struct PlayerStats {
    pub events: u32,
    pub passes_attempted: u32,
    pub passes_completed: u32,
    pub shots: u32,
    pub shots_on_target: u32,
    pub goals: u32,
    pub dribbles: u32,
    pub tackles: u32,
    pub interceptions: u32,
}

impl PlayerStats {
    fn record(&mut self, event: &Event) {
        self.events += 1;
        match event.event_type {
            EventType::Pass => {
                self.passes_attempted += 1;
                if event.outcome == Some(EventOutcome::Complete) {
                    self.passes_completed += 1;
                }
            }
            EventType::Shot => {
                self.shots += 1;
                if event.outcome.is_some_and(EventOutcome::is_on_target) {
                    self.shots_on_target += 1;
                }
                if event.is_goal() {
                    self.goals += 1;
                }
            }
            EventType::Dribble => self.dribbles += 1,
            EventType::Tackle => self.tackles += 1,
            EventType::Interception => self.interceptions += 1,
            _ => {}
        }
    }

    /// Completed / attempted passes, `None` without attempts.
    pub fn pass_completion(&self) -> Option<f64> {
        ratio(self.passes_completed, self.passes_attempted)
    }

    /// On-target / total shots, `None` without shots.
    pub fn shot_accuracy(&self) -> Option<f64> {
        ratio(self.shots_on_target, self.shots)
    }

    pub fn get(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Events => self.events,
            StatKind::PassesAttempted => self.passes_attempted,
            StatKind::PassesCompleted => self.passes_completed,
            StatKind::Shots => self.shots,
            StatKind::ShotsOnTarget => self.shots_on_target,
            StatKind::Goals => self.goals,
            StatKind::Dribbles => self.dribbles,
            StatKind::Tackles => self.tackles,
            StatKind::Interceptions => self.interceptions,
        }
    }

    fn merge(&mut self, other: &PlayerStats) {
        self.events += other.events;
        self.passes_attempted += other.passes_attempted;
        self.passes_completed += other.passes_completed;
        self.shots += other.shots;
        self.shots_on_target += other.shots_on_target;
        self.goals += other.goals;
        self.dribbles += other.dribbles;
        self.tackles += other.tackles;
        self.interceptions += other.interceptions;
    }
}

fn ratio(num: u32, den: u32) -> Option<f64> {
    (den > 0).then(|| num as f64 / den as f64)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Events,
    PassesAttempted,
    PassesCompleted,
    Shots,
    ShotsOnTarget,
    Goals,
    Dribbles,
    Tackles,
    Interceptions,
}

impl StatKind {
    pub const ALL: [StatKind; 9] = [
        StatKind::Events,
        StatKind::PassesAttempted,
        StatKind::PassesCompleted,
        StatKind::Shots,
        StatKind::ShotsOnTarget,
        StatKind::Goals,
        StatKind::Dribbles,
        StatKind::Tackles,
        StatKind::Interceptions,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StatKind::Events => "events",
            StatKind::PassesAttempted => "passes_attempted",
            StatKind::PassesCompleted => "passes_completed",
            StatKind::Shots => "shots",
            StatKind::ShotsOnTarget => "shots_on_target",
            StatKind::Goals => "goals",
            StatKind::Dribbles => "dribbles",
            StatKind::Tackles => "tackles",
            StatKind::Interceptions => "interceptions",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        StatKind::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| format!("unknown statistic '{}'", s))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
pub struct MatchStatistics {
    /// Keyed by player id, so iteration and serialization are ordered
    pub players: BTreeMap<PlayerId, PlayerStats>,
    /// Events whose actor is not in the roster
    pub unattributed_events: u32,
}

impl MatchStatistics {
    pub fn from_events<'e>(events: impl IntoIterator<Item = &'e Event>, roster: &RosterCache) -> Self {
        let mut stats = Self::default();
        for event in events {
            let Some(player_id) = event.player_id else {
                continue;
            };
            if !roster.contains(player_id) {
                stats.unattributed_events += 1;
                continue;
            }
            stats.players.entry(player_id).or_default().record(event);
        }
        stats
    }

    pub fn player(&self, id: PlayerId) -> Option<&PlayerStats> {
        self.players.get(&id)
    }

    /// Up to `limit` players with the highest value of `kind`, ties broken by id.
    /// Players with a zero count are left out.
    pub fn top_players(&self, kind: StatKind, limit: usize) -> Vec<(PlayerId, u32)> {
        let mut ranked: Vec<(PlayerId, u32)> = self
            .players
            .iter()
            .map(|(id, s)| (*id, s.get(kind)))
            .filter(|(_, v)| *v > 0)
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(limit);
        ranked
    }

    /// Sum over all players of one side.
    pub fn team_totals(&self, side: TeamSide, roster: &RosterCache) -> PlayerStats {
        let mut total = PlayerStats::default();
        for (_, stats) in self.players.iter().filter(|(id, _)| {
            roster.get(**id).is_some_and(|entry| entry.side == side)
        }) {
            total.merge(stats);
        }
        total
    }
}
