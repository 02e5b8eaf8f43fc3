// Shared positional behaviour for everything that lives in the world.

use crate::domain::Vector2;

/// Axis-aligned world rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl WorldBounds {
    /// Strict interior membership; points on an edge are outside.
    pub fn contains(&self, p: Vector2) -> bool {
        p.x > self.min_x && p.x < self.max_x && p.y > self.min_y && p.y < self.max_y
    }

    pub fn clamp(&self, p: Vector2) -> Vector2 {
        Vector2::new(
            p.x.clamp(self.min_x, self.max_x),
            p.y.clamp(self.min_y, self.max_y),
        )
    }
}

pub trait Entity {
    fn position(&self) -> Vector2;
    fn position_mut(&mut self) -> &mut Vector2;
    fn world(&self) -> WorldBounds;

    fn is_within_world_bounds(&self) -> bool {
        self.world().contains(self.position())
    }

    /// Moves the entity to the nearest point inside the world rectangle.
    fn clamp_to_world_bounds(&mut self) {
        let clamped = self.world().clamp(self.position());
        *self.position_mut() = clamped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker {
        pos: Vector2,
        world: WorldBounds,
    }

    impl Entity for Marker {
        fn position(&self) -> Vector2 {
            self.pos
        }

        fn position_mut(&mut self) -> &mut Vector2 {
            &mut self.pos
        }

        fn world(&self) -> WorldBounds {
            self.world
        }
    }

    fn marker(x: f32, y: f32) -> Marker {
        Marker {
            pos: Vector2::new(x, y),
            world: WorldBounds {
                min_x: 0.0,
                max_x: 100.0,
                min_y: 0.0,
                max_y: 50.0,
            },
        }
    }

    #[test]
    fn when_position_is_outside_then_clamp_lands_on_the_boundary() {
        let cases = [
            (-10.0, 25.0, 0.0, 25.0),
            (150.0, 25.0, 100.0, 25.0),
            (40.0, -3.0, 40.0, 0.0),
            (40.0, 80.0, 40.0, 50.0),
            (-1.0, 99.0, 0.0, 50.0),
        ];

        for (x, y, ex, ey) in cases {
            let mut m = marker(x, y);
            m.clamp_to_world_bounds();
            assert_eq!(m.position(), Vector2::new(ex, ey));

            m.clamp_to_world_bounds();
            assert_eq!(m.position(), Vector2::new(ex, ey), "clamp must be idempotent");
        }
    }

    #[test]
    fn when_position_is_inside_then_clamp_is_a_no_op() {
        let mut m = marker(12.5, 7.0);
        assert!(m.is_within_world_bounds());
        m.clamp_to_world_bounds();
        assert_eq!(m.position(), Vector2::new(12.5, 7.0));
    }

    #[test]
    fn when_position_is_on_an_edge_then_it_is_not_within_bounds() {
        assert!(!marker(0.0, 10.0).is_within_world_bounds());
        assert!(!marker(10.0, 50.0).is_within_world_bounds());
        assert!(marker(0.1, 49.9).is_within_world_bounds());
    }
}
