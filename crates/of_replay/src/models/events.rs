use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::player::{PlayerId, TeamId};
use crate::pitch::PitchPos;

/// One match action as delivered by the event provider.
///
/// `timestamp` is optional on input so that incomplete provider data can be
/// represented and rejected by the timeline loader instead of failing at
/// deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Event {
    /// Seconds since kickoff
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    #[serde(default = "default_period")]
    pub period: u8,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
    /// Acting player, if the provider attributes the event to one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<PlayerId>,
    /// Ball location at the moment of the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<PitchPos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<EventOutcome>,
    /// Real positions of the visible players at this instant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeze_frame: Option<Vec<FreezeFramePlayer>>,
}

fn default_period() -> u8 {
    1
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Pass,
    Shot,
    Tackle,
    Interception,
    Dribble,
    Foul,
    /// Snapshot of player positions; must carry a freeze-frame payload
    FreezeFrame,
    PeriodStart,
    PeriodEnd,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventOutcome {
    Complete,
    Incomplete,
    Goal,
    Saved,
    OffTarget,
    Blocked,
    Won,
    Lost,
}

impl EventOutcome {
    pub fn is_on_target(self) -> bool {
        matches!(self, EventOutcome::Goal | EventOutcome::Saved)
    }
}

/// A single player position inside a freeze frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct FreezeFramePlayer {
    pub player_id: PlayerId,
    pub location: PitchPos,
}

impl Event {
    pub fn new(timestamp: f64, event_type: EventType) -> Self {
        Self {
            timestamp: Some(timestamp),
            period: default_period(),
            event_type,
            team_id: None,
            player_id: None,
            location: None,
            outcome: None,
            freeze_frame: None,
        }
    }

    pub fn with_team(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn with_player(mut self, player_id: PlayerId) -> Self {
        self.player_id = Some(player_id);
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.location = Some(PitchPos::new(x, y));
        self
    }

    pub fn with_outcome(mut self, outcome: EventOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn with_period(mut self, period: u8) -> Self {
        self.period = period;
        self
    }

    pub fn with_freeze_frame(mut self, players: Vec<FreezeFramePlayer>) -> Self {
        self.freeze_frame = Some(players);
        self
    }

    /// Freeze-frame snapshot at `timestamp` with no ball location.
    pub fn freeze_frame(timestamp: f64, players: Vec<FreezeFramePlayer>) -> Self {
        Self::new(timestamp, EventType::FreezeFrame).with_freeze_frame(players)
    }

    pub fn is_goal(&self) -> bool {
        self.event_type == EventType::Shot && self.outcome == Some(EventOutcome::Goal)
    }
}

impl FreezeFramePlayer {
    pub fn new(player_id: PlayerId, x: f64, y: f64) -> Self {
        Self { player_id, location: PitchPos::new(x, y) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_shape() {
        let event = Event::new(12.5, EventType::Pass)
            .with_team(TeamId(1))
            .with_player(PlayerId(7))
            .at(40.0, 30.0)
            .with_outcome(EventOutcome::Complete);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "pass");
        assert_eq!(json["player_id"], 7);
        assert_eq!(json["outcome"], "complete");
        assert!(json.get("freeze_frame").is_none());
    }

    #[test]
    fn test_missing_timestamp_deserializes() {
        let event: Event = serde_json::from_str(r#"{"type": "shot", "team_id": 2}"#).unwrap();
        assert_eq!(event.timestamp, None);
        assert_eq!(event.period, 1);
        assert_eq!(event.event_type, EventType::Shot);
    }

    #[test]
    fn test_unknown_event_type_maps_to_other() {
        let event: Event =
            serde_json::from_str(r#"{"timestamp": 3.0, "type": "ball_receipt"}"#).unwrap();
        assert_eq!(event.event_type, EventType::Other);
    }

    #[test]
    fn test_goal_detection() {
        let goal = Event::new(80.0, EventType::Shot).with_outcome(EventOutcome::Goal);
        let saved = Event::new(81.0, EventType::Shot).with_outcome(EventOutcome::Saved);
        assert!(goal.is_goal());
        assert!(!saved.is_goal());
        assert!(saved.outcome.unwrap().is_on_target());
    }
}
