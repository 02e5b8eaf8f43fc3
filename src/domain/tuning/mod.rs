// Gameplay tuning, grouped into one copyable config handed to every entity.

pub mod disc;
pub mod field;
pub mod player;
pub mod rules;

pub use disc::{BoundsStop, DiscFlightRules, DiscTuning, TravelMetric};
pub use field::FieldTuning;
pub use player::PlayerTuning;
pub use rules::RulesTuning;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GameConfig {
    pub field: FieldTuning,
    pub player: PlayerTuning,
    pub disc: DiscTuning,
    pub rules: RulesTuning,
}
