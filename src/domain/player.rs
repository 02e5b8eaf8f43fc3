// Player entity: input-driven movement, possession timing and scoring flags.

use crate::domain::entity::{Entity, WorldBounds};
use crate::domain::team::ScoringEndzone;
use crate::domain::tuning::{FieldTuning, GameConfig};
use crate::domain::{PlayerId, PlayerInput, Team, Vector2};
use std::f32::consts::FRAC_1_SQRT_2;

/// Movement direction resolved from the four directional keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
    Up,
    Left,
    Down,
    Right,
    Still,
}

impl Heading {
    /// Resolves key state in a fixed precedence: diagonals first (up-left,
    /// up-right, down-left, down-right), then opposing pairs cancel
    /// (left+right, up+down), then single keys (up, left, down, right).
    pub fn from_input(input: &PlayerInput) -> Heading {
        match (input.up, input.down, input.left, input.right) {
            (true, _, true, _) => Heading::UpLeft,
            (true, _, _, true) => Heading::UpRight,
            (_, true, true, _) => Heading::DownLeft,
            (_, true, _, true) => Heading::DownRight,
            (_, _, true, true) => Heading::Still,
            (true, true, _, _) => Heading::Still,
            (true, _, _, _) => Heading::Up,
            (_, _, true, _) => Heading::Left,
            (_, true, _, _) => Heading::Down,
            (_, _, _, true) => Heading::Right,
            _ => Heading::Still,
        }
    }

    /// Velocity for this heading; y grows downward so "up" is negative y.
    pub fn velocity(self, speed: f32) -> Vector2 {
        let d = speed * FRAC_1_SQRT_2;
        match self {
            Heading::UpLeft => Vector2::new(-d, -d),
            Heading::UpRight => Vector2::new(d, -d),
            Heading::DownLeft => Vector2::new(-d, d),
            Heading::DownRight => Vector2::new(d, d),
            Heading::Up => Vector2::new(0.0, -speed),
            Heading::Left => Vector2::new(-speed, 0.0),
            Heading::Down => Vector2::new(0.0, speed),
            Heading::Right => Vector2::new(speed, 0.0),
            Heading::Still => Vector2::ZERO,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    name: String,
    socket_id: String,
    pub team: Team,

    pub position: Vector2,
    velocity: Vector2,
    speed: f32,
    hitbox_size: f32,

    /// Possession flag, owned by the match rules.
    pub has_disc: bool,
    in_endzone: bool,
    has_scored: bool,
    in_field: bool,
    stalled_out: bool,
    time_with_disc: f32,
    last_update_time: f64,

    field: FieldTuning,
    stall_out_time: f32,
    disc_space_radius: f32,
}

impl Player {
    pub fn create(
        id: PlayerId,
        name: impl Into<String>,
        socket_id: impl Into<String>,
        team: Team,
        config: &GameConfig,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            socket_id: socket_id.into(),
            team,
            position: Vector2::ZERO,
            velocity: Vector2::ZERO,
            speed: config.player.speed,
            hitbox_size: config.player.radius,
            has_disc: false,
            in_endzone: false,
            has_scored: false,
            in_field: false,
            stalled_out: false,
            time_with_disc: 0.0,
            last_update_time: 0.0,
            field: config.field,
            stall_out_time: config.player.stall_out_time,
            disc_space_radius: config.player.disc_space_radius,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn socket_id(&self) -> &str {
        &self.socket_id
    }

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn hitbox_size(&self) -> f32 {
        self.hitbox_size
    }

    pub fn in_endzone(&self) -> bool {
        self.in_endzone
    }

    pub fn has_scored(&self) -> bool {
        self.has_scored
    }

    pub fn in_field(&self) -> bool {
        self.in_field
    }

    /// Cached by [`Player::recompute_derived_flags`].
    pub fn stalled_out(&self) -> bool {
        self.stalled_out
    }

    pub fn time_with_disc(&self) -> f32 {
        self.time_with_disc
    }

    pub fn last_update_time(&self) -> f64 {
        self.last_update_time
    }

    pub fn update_on_input(&mut self, data: &PlayerInput) {
        self.velocity = Heading::from_input(data).velocity(self.speed);
    }

    /// Freezes the player in place until the next input.
    pub fn stop_movement(&mut self) {
        self.velocity = Vector2::ZERO;
    }

    /// Physics step.
    ///
    /// Order matters: scoring is judged on the integrated position before it
    /// is clamped back into the world, field membership after.
    pub fn update(&mut self, last_update_time: f64, delta_time: f32) {
        self.last_update_time = last_update_time;
        self.position += self.velocity * delta_time;
        self.set_has_scored();
        self.clamp_to_world_bounds();
        self.set_in_field();

        if self.has_disc {
            self.time_with_disc += delta_time;
        } else {
            self.time_with_disc = 0.0;
        }
    }

    /// Refreshes every position- and possession-derived flag. Runs once per
    /// tick after catches and disc-space pushes have settled.
    pub fn recompute_derived_flags(&mut self) {
        self.is_stalled_out();
        self.in_endzone = self.is_in_endzone();
        self.set_has_scored();
        self.set_in_field();
    }

    /// Gives up the disc and clears the stall count with it.
    pub fn lose_possession(&mut self) {
        self.has_disc = false;
        self.time_with_disc = 0.0;
        self.is_stalled_out();
        self.set_has_scored();
    }

    /// Re-evaluates the stall count and caches the result.
    pub fn is_stalled_out(&mut self) -> bool {
        self.stalled_out = self.time_with_disc > self.stall_out_time;
        self.stalled_out
    }

    /// Whether the player stands strictly inside the endzone their team attacks.
    pub fn is_in_endzone(&self) -> bool {
        let f = &self.field;
        let p = self.position;
        let in_width = p.x > f.field_min_x && p.x < f.field_max_x;

        match self.team.scoring_endzone {
            ScoringEndzone::Bottom => {
                in_width
                    && p.y > f.field_height + f.field_height_offset - f.endzone_height
                    && p.y < f.canvas_height - f.field_height_offset
            }
            ScoringEndzone::Top => {
                in_width
                    && p.y > f.field_height_offset
                    && p.y < f.field_height_offset + f.endzone_height
            }
        }
    }

    pub fn set_in_field(&mut self) {
        let f = &self.field;
        let p = self.position;
        self.in_field = p.x > f.field_min_x
            && p.x < f.field_max_x
            && p.y > f.field_min_y
            && p.y < f.field_max_y;
    }

    pub fn set_has_scored(&mut self) {
        self.has_scored = self.is_in_endzone() && self.has_disc;
    }

    /// Places the player without touching velocity.
    pub fn set_start_position(&mut self, start: [f32; 2]) {
        self.position = Vector2::from_array(start);
    }

    /// Pushes this player out to the disc-space radius around the holder.
    pub fn bound_player_disc_space(&mut self, disc_holder: Option<&Player>) {
        let Some(holder) = disc_holder else {
            return;
        };

        let offset = self.position - holder.position;
        if offset.length() <= self.disc_space_radius {
            self.position =
                holder.position + Vector2::from_polar(self.disc_space_radius, offset.angle());
        }
    }
}

impl Entity for Player {
    fn position(&self) -> Vector2 {
        self.position
    }

    fn position_mut(&mut self) -> &mut Vector2 {
        &mut self.position
    }

    fn world(&self) -> WorldBounds {
        self.field.world()
    }
}
