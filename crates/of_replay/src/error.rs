use crate::models::{PlayerId, TeamId};
use std::fmt;
use thiserror::Error;

/// Why an event was rejected at load time.
#[derive(Debug, Clone, PartialEq)]
pub enum MalformedEventReason {
    MissingTimestamp,
    InvalidTimestamp(f64),
    EmptyFreezeFrame,
}

impl fmt::Display for MalformedEventReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MalformedEventReason::MissingTimestamp => write!(f, "missing timestamp"),
            MalformedEventReason::InvalidTimestamp(t) => {
                write!(f, "timestamp {} is not a finite, non-negative number of seconds", t)
            }
            MalformedEventReason::EmptyFreezeFrame => {
                write!(f, "freeze frame carries no player positions")
            }
        }
    }
}

/// An event that cannot be placed on the timeline.
///
/// `event_index` is the position in the sequence handed to the loader, before sorting.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Malformed event #{event_index}: {reason}")]
pub struct MalformedEventError {
    pub event_index: usize,
    pub reason: MalformedEventReason,
}

impl MalformedEventError {
    pub fn new(event_index: usize, reason: MalformedEventReason) -> Self {
        Self { event_index, reason }
    }
}

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error(transparent)]
    MalformedEvent(#[from] MalformedEventError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Duplicate player in roster: {0}")]
    DuplicatePlayer(PlayerId),

    #[error("Player {player_id} belongs to team {team_id}, which is neither home nor away")]
    UnknownTeam { player_id: PlayerId, team_id: TeamId },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Sampling {span}s at {fps} fps exceeds {limit} frames")]
    TooManySamples { fps: f64, span: f64, limit: usize },
}

impl ReplayError {
    /// Whether the application can keep running after rejecting the match or document.
    ///
    /// Bad match data only invalidates that match selection; a broken configuration
    /// invalidates every match loaded with it.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ReplayError::MalformedEvent(_) => true,
            ReplayError::DuplicatePlayer(_) => true,
            ReplayError::UnknownTeam { .. } => true,
            ReplayError::Json(_) => true,
            ReplayError::TooManySamples { .. } => true,
            ReplayError::InvalidConfig(_) => false,
            ReplayError::Yaml(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReplayError>;
