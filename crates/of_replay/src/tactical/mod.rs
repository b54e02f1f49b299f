//! Tactical Position Model
//!
//! - `roles`: role labels and base formation slots
//! - `model`: ball-driven team shift and per-role tactical positions
//! - `separation`: bounded pairwise collision resolution

pub mod model;
pub mod roles;
pub mod separation;

pub use model::{TacticalModel, TeamShape};
pub use roles::PlayerRole;
pub use separation::{resolve_separation, worst_overlap, SeparationReport};
