pub mod events;
pub mod frame;
pub mod match_data;
pub mod player;

pub use events::{Event, EventOutcome, EventType, FreezeFramePlayer};
pub use frame::{PlayerFrame, PositionSource, RenderFrame};
pub use match_data::MatchData;
pub use player::{PlayerId, PlayerMeta, TeamId, TeamInfo, TeamSide};
