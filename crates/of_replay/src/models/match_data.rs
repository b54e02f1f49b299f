//! Match input document
//!
//! The loading collaborator (fetching, caching, provider format translation)
//! hands the replay engine one `MatchData` per match.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::events::Event;
use super::player::{PlayerMeta, TeamInfo};
use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct MatchData {
    pub home: TeamInfo,
    pub away: TeamInfo,
    pub roster: Vec<PlayerMeta>,
    pub events: Vec<Event>,
}

impl MatchData {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// JSON schema of the input document, for provider adapters.
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(MatchData);
        serde_json::to_value(schema).unwrap_or(serde_json::Value::Null)
    }
}
