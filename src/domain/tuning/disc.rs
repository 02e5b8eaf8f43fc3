/// Gameplay tuning for the disc.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscTuning {
    /// Flight speed in world units per millisecond.
    pub speed: f32,

    /// Which stopping rules the disc integrator applies.
    pub flight_rules: DiscFlightRules,
}

impl Default for DiscTuning {
    fn default() -> Self {
        Self {
            speed: 0.3,
            flight_rules: DiscFlightRules::default(),
        }
    }
}

/// How far the disc is considered to have travelled after one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TravelMetric {
    /// Adds `|step|²` per tick while still comparing against the straight-line
    /// throw distance. This is what deployed clients observe.
    #[default]
    SquaredStep,
    /// Adds `|step|` per tick (true path length).
    PathLength,
}

/// When the world rectangle stops the disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsStop {
    /// Stops as soon as the disc is strictly inside the world. This is what
    /// deployed clients observe.
    #[default]
    WhileInsideWorld,
    /// Stops once the disc has left the world.
    WhenOutsideWorld,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiscFlightRules {
    pub travel_metric: TravelMetric,
    pub bounds_stop: BoundsStop,
}
