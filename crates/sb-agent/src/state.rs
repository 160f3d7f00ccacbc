//! Per-tick agent snapshot.

use sb_core::{GroundRef, Vec3};

/// A read-only projection of the host's per-tick agent state.
///
/// Everything except `delta_yaw` can be written back through
/// [`Simulation::restore`][crate::Simulation::restore]; restoring a snapshot
/// taken at tick N and re-issuing the same command must reproduce tick N+1.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    pub position: Vec3,
    pub velocity: Vec3,

    /// View yaw in degrees.  Pitch and roll are always zero for the bot.
    pub yaw: f64,

    /// Surface below the agent; [`GroundRef::AIRBORNE`] in the air.
    pub ground: GroundRef,

    /// Host jump timer in milliseconds.  Negative means "not set".
    pub jump_time: i32,

    pub double_jumped: bool,

    /// Per-tick view offset the host adds to every commanded angle.
    /// Tick-local: never part of a restore.
    pub delta_yaw: f64,
}

impl AgentState {
    /// A stationary snapshot standing at `position` facing `yaw`.
    pub fn at_rest(position: Vec3, yaw: f64, ground: GroundRef) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            yaw,
            ground,
            jump_time: 0,
            double_jumped: false,
            delta_yaw: 0.0,
        }
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.ground.is_grounded()
    }

    /// Horizontal speed in units per second.
    #[inline]
    pub fn speed_2d(&self) -> f64 {
        self.velocity.length_2d()
    }
}
