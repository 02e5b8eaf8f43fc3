// Domain layer: core simulation types and rules.

pub mod disc;
pub mod entity;
pub mod errors;
pub mod player;
pub mod state;
pub mod systems;
pub mod team;
pub mod tuning;
pub mod vector;

pub use disc::Disc;
pub use entity::{Entity, WorldBounds};
pub use errors::{MatchError, ThrowError};
pub use player::{Heading, Player};
pub use state::{DiscSnapshot, PlayerId, PlayerInput, PlayerSnapshot};
pub use team::{Score, ScoringEndzone, Team, TeamId};
pub use tuning::GameConfig;
pub use vector::Vector2;
