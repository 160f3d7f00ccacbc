//! Named route points.

use sb_agent::AgentState;
use sb_core::{GroundRef, Vec3};

/// A named point on a route, sampled from an agent standing there.
///
/// Waypoints are value objects: replacing one means building a new one.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub name: String,
    pub position: Vec3,
    /// Facing in degrees; the only meaningful part of the sampled view angles.
    pub yaw: f64,
    /// Surface the sample stood on, used to re-seat the agent on it.
    pub ground: GroundRef,
}

impl Waypoint {
    pub fn new(name: impl Into<String>, position: Vec3, yaw: f64, ground: GroundRef) -> Self {
        Self { name: name.into(), position, yaw, ground }
    }

    /// An unplaced waypoint at the origin.
    pub fn unplaced(name: impl Into<String>) -> Self {
        Self::new(name, Vec3::ZERO, 0.0, GroundRef::AIRBORNE)
    }

    /// Capture `state`'s position, heading, and ground under `name`.
    pub fn sample(name: impl Into<String>, state: &AgentState) -> Self {
        Self::new(name, state.position, state.yaw, state.ground)
    }

    /// Stationary agent snapshot standing on this waypoint.
    pub fn rest_state(&self) -> AgentState {
        AgentState::at_rest(self.position, self.yaw, self.ground)
    }
}

impl std::fmt::Display for Waypoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} yaw {:.1}", self.name, self.position, self.yaw)
    }
}
