//! Action → `MoveCommand` mapping.
//!
//! # Rules
//!
//! 1. **Jump.**  A grounded agent moving faster than `max_ground_speed`
//!    presses jump unless the action is `Idle` or suppresses it.  A jumping
//!    tick is planned as an air tick.
//! 2. **Ground.**  `Left`/`Right` are pressed as their diagonal and rotate
//!    the view by `±turn_rate · dt`.  Diagonals keep the current view.
//! 3. **Air diagonal.**  The view is set to the velocity heading plus the
//!    optimal strafe angle (minus `diagonal_offset` when positive, mirrored
//!    for `RightDiag`).  Skipped while either the wish or the velocity is
//!    negligible.
//! 4. **Air turn.**  If the view is more than `turn_snap_angle` off the
//!    velocity heading it first snaps onto it; then `±turn_rate · dt` is
//!    added.  Skipped while the agent is nearly stationary.
//! 5. The host's `delta_yaw` is subtracted and the result wrapped.

use sb_agent::{AgentState, MoveCommand};
use sb_core::{optimal_strafe_angle, wrap_yaw, yaw_difference, yaw_of};

use crate::{Action, ActionKind, MoveConfig};

/// Below this a wish or velocity is treated as zero.
const NEGLIGIBLE: f64 = 0.1;

/// The planned input for one tick, before it is packed into a command.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MoveIntent {
    /// `[forward, right, up]`.
    pub wish: [i8; 3],
    /// View yaw in degrees, already corrected for `delta_yaw`.
    pub yaw: f64,
    pub jump: bool,
}

impl MoveIntent {
    pub fn command(&self) -> MoveCommand {
        MoveCommand::new(self.yaw, self.wish[0], self.wish[1], self.wish[2])
    }
}

/// Plan the input that performs `action` from `state`.
pub fn plan_move(action: &Action, state: &AgentState, config: &MoveConfig) -> MoveIntent {
    let velocity = state.velocity;
    let speed = velocity.length_2d();
    let dt = config.tick_rate.tick_secs();

    let jump = state.is_grounded()
        && speed > config.max_ground_speed
        && !action.is_idle()
        && !action.suppress_jump;
    let grounded = state.is_grounded() && !jump;

    let turn = config.tick_rate.per_tick(action.turn_rate);
    let turn = if action.kind.is_right() { -turn } else { turn };
    let mut yaw = state.yaw;

    let wish = if grounded {
        if action.kind.is_turn() {
            yaw += turn;
        }
        wish_move(action.kind.grounded_equivalent(), jump, config.wish_move)
    } else {
        let wish = wish_move(action.kind, jump, config.wish_move);
        let wish_2d = f64::from(wish[0]).hypot(f64::from(wish[1]));

        if action.kind.is_diagonal() {
            if wish_2d > NEGLIGIBLE && speed > NEGLIGIBLE {
                // The diagonal wish is 45° off the view, so the planar wish
                // speed is the diagonal's length.
                let diagonal_speed = f64::from(config.wish_move) * std::f64::consts::SQRT_2;
                let mut offset =
                    optimal_strafe_angle(diagonal_speed, config.air_accel, velocity, dt).to_degrees();
                if offset > 0.0 {
                    offset -= config.diagonal_offset;
                    if action.kind.is_right() {
                        offset = -offset;
                    }
                }
                if let Some(heading) = yaw_of(velocity) {
                    yaw = heading + offset;
                }
            }
        } else if action.kind.is_turn() && speed > NEGLIGIBLE {
            if let Some(heading) = yaw_of(velocity) {
                if yaw_difference(yaw, heading).abs() > config.turn_snap_angle {
                    yaw = heading;
                }
            }
            yaw += turn;
        }
        wish
    };

    MoveIntent { wish, yaw: wrap_yaw(yaw - state.delta_yaw), jump }
}

fn wish_move(kind: ActionKind, jump: bool, speed: i8) -> [i8; 3] {
    let mut wish = match kind {
        ActionKind::LeftDiag  => [speed, speed.saturating_neg(), 0],
        ActionKind::Left      => [0, speed.saturating_neg(), 0],
        ActionKind::RightDiag => [speed, speed, 0],
        ActionKind::Right     => [0, speed, 0],
        ActionKind::Idle      => [0, 0, 0],
    };
    if jump {
        wish[2] = speed;
    }
    wish
}
