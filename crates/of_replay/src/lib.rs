//! # of_replay - Deterministic Football Match Replay Engine
//!
//! Replays event data of a football match as smooth 2D player movement.
//! Sparse real positions ("freeze frames") are fused with procedurally
//! generated tactical positions, producing a position for every player at
//! any requested timestamp.
//!
//! ## Features
//! - Pure over (loaded match, t): same inputs give bit-identical frames
//! - O(log n) lookups, seeking backward costs the same as playing forward
//! - Ball-driven tactical team shape with bounded collision resolution
//! - No I/O in the core; match documents arrive as `MatchData`
//!
//! ## Usage
//! ```rust
//! use of_replay::{MatchReplay, ReplayConfig};
//!
//! let json = r#"{
//!     "home": {"id": 1}, "away": {"id": 2},
//!     "roster": [{"id": 9, "jersey_number": 9, "role": "ST", "team_id": 1}],
//!     "events": [{"timestamp": 0.0, "type": "period_start"},
//!                {"timestamp": 60.0, "type": "pass", "location": {"x": 70.0, "y": 30.0}}]
//! }"#;
//! let replay = MatchReplay::from_json_str(json, ReplayConfig::default()).unwrap();
//! let frame = replay.frame_at(30.0);
//! assert_eq!(frame.players.len(), 1);
//! ```

// Config presets start from the default and override a few fields
#![allow(clippy::field_reassign_with_default)]

pub mod blend;
pub mod config;
pub mod digest;
pub mod error;
pub mod models;
pub mod pitch;
pub mod replay;
pub mod roster;
pub mod state;
pub mod stats;
pub mod tactical;
pub mod timeline;

pub use blend::PositionBlender;
pub use config::ReplayConfig;
pub use error::{MalformedEventError, MalformedEventReason, ReplayError, Result};
pub use models::{
    Event, EventOutcome, EventType, FreezeFramePlayer, MatchData, PlayerFrame, PlayerId,
    PlayerMeta, PositionSource, RenderFrame, TeamId, TeamInfo, TeamSide,
};
pub use pitch::{Pitch, PitchPos};
pub use replay::{MatchReplay, PlaybackClock};
pub use roster::RosterCache;
pub use state::MatchState;
pub use stats::{MatchStatistics, PlayerStats, StatKind};
pub use tactical::{PlayerRole, TacticalModel};
pub use timeline::{EventTimeline, SampleOrigin, TrackingSample};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
