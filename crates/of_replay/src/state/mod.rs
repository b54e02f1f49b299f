//! Match State at a Timestamp
//!
//! Score, period, possession and ball owner as of any instant. The state
//! after every event is folded once at load time into a prefix table, so a
//! query is a binary search and seeking backward is as cheap as forward.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Event, PlayerId, TeamId, TeamSide};
use crate::roster::RosterCache;
use crate::timeline::EventTimeline;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct MatchState {
    /// Query timestamp after clamping
    pub t: f64,
    pub minute: u32,
    pub period: u8,
    pub home_score: u32,
    pub away_score: u32,
    /// Team of the most recent event that named one
    pub possession: Option<TeamId>,
    /// Acting player of the most recent event
    pub ball_owner: Option<PlayerId>,
    /// Index into the timeline's sorted events
    pub last_event: Option<usize>,
}

impl MatchState {
    fn kickoff() -> Self {
        Self {
            t: 0.0,
            minute: 0,
            period: 1,
            home_score: 0,
            away_score: 0,
            possession: None,
            ball_owner: None,
            last_event: None,
        }
    }

    fn apply(&mut self, idx: usize, event: &Event, roster: &RosterCache) {
        self.last_event = Some(idx);
        self.period = event.period;

        if event.is_goal() {
            let side = event
                .team_id
                .and_then(|team| roster.side_of_team(team))
                .or_else(|| event.player_id.and_then(|p| roster.get(p)).map(|e| e.side));
            match side {
                Some(TeamSide::Home) => self.home_score += 1,
                Some(TeamSide::Away) => self.away_score += 1,
                None => debug!(event = idx, "goal without an attributable team ignored"),
            }
        }

        if let Some(team) = event.team_id {
            self.possession = Some(team);
        }
        self.ball_owner = event.player_id;
    }

    pub fn score_line(&self) -> String {
        format!("{}-{}", self.home_score, self.away_score)
    }
}

/// Minute shown on the match clock (floor of elapsed minutes).
#[inline]
pub fn match_minute(t: f64) -> u32 {
    if t.is_finite() && t > 0.0 {
        (t / 60.0) as u32
    } else {
        0
    }
}

/// State after each event, parallel to the timeline's sorted events.
#[derive(Debug, Clone)]
pub struct StateIndex {
    after_event: Vec<MatchState>,
}

impl StateIndex {
    pub fn build(timeline: &EventTimeline, roster: &RosterCache) -> Self {
        let mut state = MatchState::kickoff();
        let after_event = timeline
            .events()
            .iter()
            .enumerate()
            .map(|(idx, event)| {
                state.apply(idx, event, roster);
                state.clone()
            })
            .collect();
        Self { after_event }
    }

    /// State as of `t`; `t` must already be clamped to the timeline.
    pub fn state_at(&self, timeline: &EventTimeline, t: f64) -> MatchState {
        let seen = timeline.events_until(t);
        let mut state = match seen.checked_sub(1) {
            Some(i) => self.after_event[i].clone(),
            None => MatchState::kickoff(),
        };
        state.t = t;
        state.minute = match_minute(t);
        state
    }

    pub fn final_state(&self) -> Option<&MatchState> {
        self.after_event.last()
    }
}
