//! Scalar reward for an agent state relative to a route.

use sb_core::{Vec3, closest_point_on_segment_clamped};

use crate::Route;

/// Added to every reward once `end` is the only target left.  Larger than
/// any reachable intermediate-segment reward.
pub const END_REWARD_BASE: f64 = 100_000.0;

/// Smallest distance used as a divisor.  Keeps rewards finite when the
/// agent sits exactly on a route point; at this floor the route term is
/// `100 / 1e-3 = 1e5`, i.e. "very large" without becoming infinite.
pub const REWARD_DISTANCE_FLOOR: f64 = 1e-3;

const ROUTE_WEIGHT: f64 = 100.0;
const DIRECTION_WEIGHT: f64 = 2.0;
const SPEED_WEIGHT: f64 = 3.0;

impl Route {
    /// Reward for being at `position` moving with `velocity`.
    ///
    /// - Only `end` left: `END_REWARD_BASE + 1 / distance(position, end)`.
    /// - Otherwise: `100 / distance-to-route + 2 · (dir · velocity) +
    ///   3 · horizontal speed`, where `dir` points from `position` to the
    ///   target and distance-to-route is measured to the clamped projection
    ///   onto the segment leading into the target.
    pub fn reward(&self, position: Vec3, velocity: Vec3) -> f64 {
        let remaining = self.remaining_points(position);
        let target = remaining[0];

        if remaining.len() == 1 {
            let distance = floored(position.distance(target.position));
            return END_REWARD_BASE + 1.0 / distance;
        }

        let want_direction = (target.position - position).normalize().unwrap_or(Vec3::ZERO);
        let direction_reward = want_direction.dot(velocity);

        let speed_reward = velocity.length_2d();

        let closest = self
            .previous_point(target)
            .and_then(|prev| {
                closest_point_on_segment_clamped(prev.position, target.position, position).ok()
            })
            .unwrap_or(target.position);
        let route_reward = 1.0 / floored(position.distance(closest));

        ROUTE_WEIGHT * route_reward + DIRECTION_WEIGHT * direction_reward + SPEED_WEIGHT * speed_reward
    }
}

#[inline]
fn floored(distance: f64) -> f64 {
    distance.max(REWARD_DISTANCE_FLOOR)
}
