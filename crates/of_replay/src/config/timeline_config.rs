//! Timeline Extraction Configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Record the acting player of an event at the event's ball location as a
    /// tracking sample, next to freeze-frame samples (default: true)
    pub track_event_actors: bool,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self { track_event_actors: true }
    }
}
