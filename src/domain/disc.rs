// The thrown disc: owns its own flight state and stops itself.

use crate::domain::entity::{Entity, WorldBounds};
use crate::domain::errors::ThrowError;
use crate::domain::tuning::{BoundsStop, DiscFlightRules, GameConfig, TravelMetric};
use crate::domain::{PlayerId, PlayerInput, Vector2};

#[derive(Debug, Clone)]
pub struct Disc {
    pub position: Vector2,
    velocity: Vector2,
    /// Orientation at creation. Informational only.
    pub angle: f32,
    /// Player who released the disc. A handle, resolved against the match
    /// roster; it may outlive the player.
    pub source: Option<PlayerId>,
    speed: f32,

    distance_traveled: f32,
    throw_source: Vector2,
    throw_destination: Vector2,
    throw_vector: Vector2,
    throw_vector_normalized: Vector2,
    throw_distance: f32,

    /// Never set by the simulation; disc lifetime is owned by the match.
    pub destroyed: bool,

    world: WorldBounds,
    flight_rules: DiscFlightRules,
}

impl Disc {
    /// Creates a disc at rest.
    pub fn create_new_disc(position: [f32; 2], config: &GameConfig) -> Self {
        Self {
            position: Vector2::from_array(position),
            velocity: Vector2::ZERO,
            angle: 0.0,
            source: None,
            speed: config.disc.speed,
            distance_traveled: 0.0,
            throw_source: Vector2::ZERO,
            throw_destination: Vector2::ZERO,
            throw_vector: Vector2::ZERO,
            throw_vector_normalized: Vector2::ZERO,
            throw_distance: 0.0,
            destroyed: false,
            world: config.field.world(),
            flight_rules: config.disc.flight_rules,
        }
    }

    pub fn with_source(mut self, source: PlayerId) -> Self {
        self.source = Some(source);
        self
    }

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn distance_traveled(&self) -> f32 {
        self.distance_traveled
    }

    pub fn throw_source(&self) -> Vector2 {
        self.throw_source
    }

    pub fn throw_destination(&self) -> Vector2 {
        self.throw_destination
    }

    pub fn throw_vector(&self) -> Vector2 {
        self.throw_vector
    }

    pub fn throw_vector_normalized(&self) -> Vector2 {
        self.throw_vector_normalized
    }

    pub fn throw_distance(&self) -> f32 {
        self.throw_distance
    }

    pub fn is_in_flight(&self) -> bool {
        self.velocity != Vector2::ZERO
    }

    /// Starts a throw toward `mouse_down` when the input carries one.
    ///
    /// Without a throw target the current velocity is kept. A target equal to
    /// the disc's position is rejected and leaves the disc untouched.
    pub fn update_on_input(&mut self, data: &PlayerInput) -> Result<(), ThrowError> {
        let Some(destination) = data.mouse_down else {
            return Ok(());
        };
        if !destination.is_finite() {
            return Err(ThrowError::NonFiniteTarget);
        }

        let throw_vector = destination - self.position;
        let Some(normalized) = throw_vector.try_normalize() else {
            return Err(ThrowError::ZeroLengthThrow);
        };

        self.distance_traveled = 0.0;
        self.throw_destination = destination;
        self.throw_source = self.position;
        self.throw_vector = throw_vector;
        self.throw_distance = throw_vector.length();
        self.throw_vector_normalized = normalized;
        self.velocity = normalized * self.speed;
        Ok(())
    }

    /// Integrates one step and applies the stopping rules.
    pub fn update(&mut self, _last_update_time: f64, delta_time: f32) {
        let step = self.velocity * delta_time;
        self.position += step;
        self.distance_traveled += self.travel_increment(step);

        if self.stopped_by_bounds() || self.distance_traveled > self.throw_distance {
            self.velocity = Vector2::ZERO;
        }
    }

    fn travel_increment(&self, step: Vector2) -> f32 {
        match self.flight_rules.travel_metric {
            TravelMetric::SquaredStep => step.length_squared(),
            TravelMetric::PathLength => step.length(),
        }
    }

    fn stopped_by_bounds(&self) -> bool {
        match self.flight_rules.bounds_stop {
            BoundsStop::WhileInsideWorld => self.is_within_world_bounds(),
            BoundsStop::WhenOutsideWorld => !self.is_within_world_bounds(),
        }
    }
}

impl Entity for Disc {
    fn position(&self) -> Vector2 {
        self.position
    }

    fn position_mut(&mut self) -> &mut Vector2 {
        &mut self.position
    }

    fn world(&self) -> WorldBounds {
        self.world
    }
}
