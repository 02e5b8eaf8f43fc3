// Plain 2D vector used for positions, velocities and throw geometry.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn from_array(pair: [f32; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }

    /// Builds a vector of length `magnitude` pointing along `angle` (radians,
    /// measured the same way as [`Vector2::angle`]).
    pub fn from_polar(magnitude: f32, angle: f32) -> Self {
        Self::new(magnitude * angle.cos(), magnitude * angle.sin())
    }

    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// `atan2(y, x)`.
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    pub fn distance_to(self, other: Vector2) -> f32 {
        (other - self).length()
    }

    /// Unit vector in the same direction, or `None` for a zero-length vector.
    pub fn try_normalize(self) -> Option<Self> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Some(self.scale(1.0 / len))
        } else {
            None
        }
    }

    pub fn normalize_or_zero(self) -> Self {
        self.try_normalize().unwrap_or(Self::ZERO)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from(pair: [f32; 2]) -> Self {
        Self::from_array(pair)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Self::Output {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Self::Output {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-5;

    fn approx(a: Vector2, b: Vector2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn when_built_from_polar_then_angle_and_length_round_trip() {
        let v = Vector2::from_polar(5.0, FRAC_PI_2);
        assert!(approx(v, Vector2::new(0.0, 5.0)));
        assert!((v.length() - 5.0).abs() < EPS);
        assert!((v.angle() - FRAC_PI_2).abs() < EPS);

        let back = Vector2::from_polar(2.0, PI);
        assert!(approx(back, Vector2::new(-2.0, 0.0)));
    }

    #[test]
    fn when_combining_vectors_then_operators_are_componentwise() {
        let a = Vector2::from_array([3.0, 4.0]);
        let b = Vector2::new(1.0, -2.0);

        assert_eq!(a + b, Vector2::new(4.0, 2.0));
        assert_eq!(a - b, Vector2::new(2.0, 6.0));
        assert_eq!(a * 2.0, Vector2::new(6.0, 8.0));
        assert_eq!(-b, Vector2::new(-1.0, 2.0));
        assert_eq!(a.length_squared(), 25.0);
        assert_eq!(a.length(), 5.0);

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
        assert_eq!(a, Vector2::new(3.0, 4.0));
    }

    #[test]
    fn when_normalizing_zero_vector_then_none_is_returned() {
        assert!(Vector2::zero().try_normalize().is_none());
        assert_eq!(Vector2::ZERO.normalize_or_zero(), Vector2::ZERO);

        let unit = Vector2::new(0.0, -7.0).try_normalize().expect("non-zero vector");
        assert!(approx(unit, Vector2::new(0.0, -1.0)));
    }
}
