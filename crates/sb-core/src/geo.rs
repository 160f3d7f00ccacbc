//! Three-component vector type and line projection helpers.
//!
//! Host simulations report positions and velocities in world units with Z
//! pointing up.  Most movement quantities only care about the horizontal
//! plane, so every length/dot helper has a `_2d` twin that ignores Z.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use crate::{CoreError, CoreResult};

/// A world-space vector (position, velocity, view angles, wish move).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn scale(self, k: f64) -> Vec3 {
        Vec3::new(self.x * k, self.y * k, self.z * k)
    }

    #[inline]
    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Dot product of the X/Y components only.
    #[inline]
    pub fn dot_2d(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Horizontal speed / length, Z ignored.
    #[inline]
    pub fn length_2d(self) -> f64 {
        self.dot_2d(self).sqrt()
    }

    #[inline]
    pub fn distance(self, other: Vec3) -> f64 {
        (self - other).length()
    }

    /// Unit vector in the same direction, or `None` for a zero-length vector.
    pub fn normalize(self) -> Option<Vec3> {
        let len = self.length();
        if len == 0.0 || !len.is_finite() {
            return None;
        }
        Some(self.scale(1.0 / len))
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, k: f64) -> Vec3 {
        self.scale(k)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vec3::new(x, y, z)
    }
}

// ── Projection ────────────────────────────────────────────────────────────────

/// Orthogonal projection of `point` onto the infinite line through `start`
/// and `end`.
pub fn line_closest_point(start: Vec3, end: Vec3, point: Vec3) -> CoreResult<Vec3> {
    let dir = (end - start)
        .normalize()
        .ok_or(CoreError::DegenerateGeometry("line endpoints coincide"))?;
    let along = (point - start).dot(dir);
    Ok(start + dir * along)
}

/// Projection of `point` onto the segment `start → end`, clamped to the
/// segment with a sign-of-dot-product test.
///
/// The side test compares `start · end` against `closest · end`, i.e. dot
/// products of world-space *positions*, not of directions along the
/// segment.  When both endpoints lie on the same side of the world origin a
/// projection that falls past `end` is returned unclamped (see the
/// `known_misclamp_past_end` test).
pub fn closest_point_on_segment_clamped(start: Vec3, end: Vec3, point: Vec3) -> CoreResult<Vec3> {
    let closest = line_closest_point(start, end, point)?;

    let line_dot = start.dot(end);
    let closest_dot = closest.dot(end);
    let segment_len = start.distance(end);

    if line_dot * closest_dot > 0.0 {
        if segment_len < closest.distance(end) {
            return Ok(start);
        }
    } else if segment_len < closest.distance(start) {
        return Ok(end);
    }
    Ok(closest)
}
