//! Yaw (heading) helpers.
//!
//! Yaw is measured in degrees, counter-clockwise from +X, and kept in the
//! half-open range (−180°, 180°].

use crate::Vec3;

/// Heading of `v` in degrees, or `None` for a zero vector.
///
/// Computed as `acos` of the X component of the *fully* normalized vector
/// (Z included), signed by Y.  A vertical velocity component therefore
/// pulls the result towards ±90°; the control adapter accepts this because
/// it only asks for headings of velocities with real horizontal speed.
pub fn yaw_of(v: Vec3) -> Option<f64> {
    let n = v.normalize()?;
    let deg = n.x.clamp(-1.0, 1.0).acos().to_degrees();
    Some(if n.y < 0.0 { -deg } else { deg })
}

/// Reduce `yaw` into (−180°, 180°].
///
/// Values already in range are returned bit-for-bit unchanged, which makes
/// the function exactly idempotent.
pub fn wrap_yaw(yaw: f64) -> f64 {
    if yaw > -180.0 && yaw <= 180.0 {
        return yaw;
    }
    let wrapped = 180.0 - (180.0 - yaw).rem_euclid(360.0);
    // rem_euclid may round up to exactly 360 for inputs a hair below a
    // multiple of 360.
    if wrapped <= -180.0 { wrapped + 360.0 } else { wrapped }
}

/// Shortest signed angular delta from `b` to `a`, in (−180°, 180°].
#[inline]
pub fn yaw_difference(a: f64, b: f64) -> f64 {
    wrap_yaw(a - b)
}

/// Angle (radians) between the current horizontal velocity and the wish
/// direction that maximises speed gain over the next tick.
///
/// Derived from the air-acceleration step: the tick adds at most
/// `accel · wish_speed · tick_secs`, so the speed is only clipped while the
/// projected velocity stays below `wish_speed · (1 − accel · tick_secs)`.
/// Returns `0.0` when the agent is still slower than that (no turn needed).
pub fn optimal_strafe_angle(wish_speed: f64, accel: f64, velocity: Vec3, tick_secs: f64) -> f64 {
    let num = wish_speed * (1.0 - accel * tick_secs);
    let speed = velocity.length_2d();
    if speed == 0.0 || num >= speed {
        return 0.0;
    }
    (num / speed).clamp(-1.0, 1.0).acos()
}
