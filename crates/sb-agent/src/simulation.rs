//! The `Simulation` trait — the host-side extension point.

use sb_core::{GroundRef, Vec3};

use crate::{AgentState, MoveCommand};

/// Everything the optimizer needs from the host simulation for one agent.
///
/// All calls are synchronous and happen inside the host's tick callback.
/// Setter calls take effect before the host's next physics step, so a
/// snapshot restored during tick N is what the command issued during tick
/// N is applied to.
///
/// # Required methods
///
/// The setters mirror the host's individual state pokes.  [`restore`]
/// (provided) composes them into a full snapshot rewind.
///
/// [`restore`]: Simulation::restore
pub trait Simulation {
    /// Current agent state.
    fn state(&self) -> AgentState;

    fn set_position(&mut self, position: Vec3);
    fn set_velocity(&mut self, velocity: Vec3);
    fn set_view_angles(&mut self, angles: Vec3);
    fn set_ground_ref(&mut self, ground: GroundRef);
    fn set_jump_time(&mut self, jump_time: i32);
    fn set_double_jumped(&mut self, double_jumped: bool);

    /// Queue `command` for the agent's next physics step.
    ///
    /// Returns `false` when the host refused the command (agent gone); the
    /// caller ends its session.
    fn issue_command(&mut self, command: &MoveCommand) -> bool;

    /// Rewind the agent to `snapshot`.
    ///
    /// The ground reference is only written when the snapshot is grounded
    /// and the jump timer only when it is set (`>= 0`); the host keeps its
    /// own values otherwise.
    fn restore(&mut self, snapshot: &AgentState) {
        self.set_position(snapshot.position);
        self.set_velocity(snapshot.velocity);
        self.set_view_angles(Vec3::new(0.0, snapshot.yaw, 0.0));
        if snapshot.ground.is_grounded() {
            self.set_ground_ref(snapshot.ground);
        }
        if snapshot.jump_time >= 0 {
            self.set_jump_time(snapshot.jump_time);
        }
        self.set_double_jumped(snapshot.double_jumped);
    }
}
