// Use cases layer: application workflows for the game server.

pub mod game;
pub mod simulation;
pub mod types;

pub use game::{MatchHandle, MatchSettings, spawn_match, world_task};
pub use simulation::Match;
pub use types::{GameEvent, MatchEvent, ServerState, WorldUpdate};
