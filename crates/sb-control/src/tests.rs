//! Unit tests for sb-control.

use sb_agent::AgentState;
use sb_core::{GroundRef, TickRate, Vec3, optimal_strafe_angle, wrap_yaw};

use crate::{Action, ActionKind, MoveConfig, plan_move};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn grounded(velocity: Vec3, yaw: f64) -> AgentState {
    AgentState {
        velocity,
        yaw,
        ground: GroundRef(0),
        ..AgentState::default()
    }
}

fn airborne(velocity: Vec3, yaw: f64) -> AgentState {
    AgentState {
        velocity,
        yaw,
        ground: GroundRef::AIRBORNE,
        ..AgentState::default()
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ── Action ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod action {
    use super::*;

    #[test]
    fn idle_is_default() {
        assert_eq!(Action::default(), Action::IDLE);
        assert!(Action::IDLE.is_idle());
        assert!(!Action::IDLE.suppress_jump);
    }

    #[test]
    fn kind_classification() {
        assert!(ActionKind::LeftDiag.is_diagonal());
        assert!(ActionKind::Right.is_turn());
        assert!(ActionKind::RightDiag.is_right());
        assert!(!ActionKind::Left.is_right());
        assert_eq!(ActionKind::Left.grounded_equivalent(), ActionKind::LeftDiag);
        assert_eq!(ActionKind::Right.grounded_equivalent(), ActionKind::RightDiag);
        assert_eq!(ActionKind::Idle.grounded_equivalent(), ActionKind::Idle);
    }

    #[test]
    fn display() {
        assert_eq!(Action::left(120.0).to_string(), "left 120deg/s");
        assert_eq!(Action::right_diag().to_string(), "right_diag");
    }
}

// ── Ground ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ground {
    use super::*;

    #[test]
    fn idle_presses_nothing() {
        let i = plan_move(&Action::IDLE, &grounded(Vec3::ZERO, 30.0), &MoveConfig::default());
        assert_eq!(i.wish, [0, 0, 0]);
        assert_eq!(i.yaw, 30.0);
        assert!(!i.jump);
        assert!(i.command().is_neutral());
    }

    #[test]
    fn diagonals_keep_view() {
        let cfg = MoveConfig::default();
        let s = grounded(Vec3::new(100.0, 0.0, 0.0), 10.0);
        let l = plan_move(&Action::left_diag(), &s, &cfg);
        assert_eq!(l.wish, [127, -127, 0]);
        assert_eq!(l.yaw, 10.0);
        let r = plan_move(&Action::right_diag(), &s, &cfg);
        assert_eq!(r.wish, [127, 127, 0]);
    }

    #[test]
    fn turns_press_diagonal_and_rotate() {
        let cfg = MoveConfig::default();
        let s = grounded(Vec3::ZERO, 0.0);
        let l = plan_move(&Action::left(125.0), &s, &cfg);
        assert_eq!(l.wish, [127, -127, 0]);
        assert!(close(l.yaw, 1.0));
        let r = plan_move(&Action::right(250.0), &s, &cfg);
        assert_eq!(r.wish, [127, 127, 0]);
        assert!(close(r.yaw, -2.0));
    }

    #[test]
    fn turn_per_tick_follows_tick_rate() {
        let cfg = MoveConfig { tick_rate: TickRate(250), ..MoveConfig::default() };
        let s = grounded(Vec3::ZERO, 0.0);
        assert!(close(plan_move(&Action::left(125.0), &s, &cfg).yaw, 0.5));
        assert!(close(plan_move(&Action::right(250.0), &s, &cfg).yaw, -1.0));
    }

    #[test]
    fn delta_yaw_subtracted_and_wrapped() {
        let mut s = grounded(Vec3::ZERO, 175.0);
        s.delta_yaw = -10.0;
        let i = plan_move(&Action::left_diag(), &s, &MoveConfig::default());
        assert!(close(i.yaw, -175.0));
    }
}

// ── Jump ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod jump {
    use super::*;

    #[test]
    fn jumps_when_fast_on_ground() {
        let s = grounded(Vec3::new(400.0, 0.0, 0.0), 0.0);
        let i = plan_move(&Action::left_diag(), &s, &MoveConfig::default());
        assert!(i.jump);
        assert_eq!(i.wish[2], 127);
    }

    #[test]
    fn no_jump_at_or_below_ground_cap() {
        let s = grounded(Vec3::new(320.0, 0.0, 0.0), 0.0);
        let i = plan_move(&Action::left_diag(), &s, &MoveConfig::default());
        assert!(!i.jump);
        assert_eq!(i.wish[2], 0);
    }

    #[test]
    fn idle_and_suppressed_never_jump() {
        let cfg = MoveConfig::default();
        let s = grounded(Vec3::new(400.0, 0.0, 0.0), 0.0);
        assert!(!plan_move(&Action::IDLE, &s, &cfg).jump);
        let held = Action::left_diag().with_suppress_jump(true);
        assert!(!plan_move(&held, &s, &cfg).jump);
    }

    #[test]
    fn airborne_never_jumps() {
        let s = airborne(Vec3::new(600.0, 0.0, 0.0), 0.0);
        assert!(!plan_move(&Action::left_diag(), &s, &MoveConfig::default()).jump);
    }

    #[test]
    fn jumping_turn_is_planned_in_air() {
        // Air rules: pure turn presses only the side key.
        let s = grounded(Vec3::new(400.0, 0.0, 0.0), 0.0);
        let i = plan_move(&Action::left(0.0), &s, &MoveConfig::default());
        assert!(i.jump);
        assert_eq!(i.wish, [0, -127, 127]);
    }
}

// ── Air ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod air {
    use super::*;

    #[test]
    fn slow_diagonal_follows_velocity_heading() {
        // Below the optimal-angle threshold the offset is zero.
        let s = airborne(Vec3::new(0.0, 100.0, 0.0), -40.0);
        let i = plan_move(&Action::left_diag(), &s, &MoveConfig::default());
        assert!(close(i.yaw, 90.0));
    }

    #[test]
    fn fast_diagonals_are_mirrored() {
        let cfg = MoveConfig::default();
        let v = Vec3::new(600.0, 0.0, 0.0);
        let wish = 127.0 * 2f64.sqrt();
        let opt = optimal_strafe_angle(wish, 1.0, v, 0.008).to_degrees() - 45.0;

        let l = plan_move(&Action::left_diag(), &airborne(v, 0.0), &cfg);
        let r = plan_move(&Action::right_diag(), &airborne(v, 0.0), &cfg);
        assert!(close(l.yaw, opt));
        assert!(close(r.yaw, -opt));
        assert_eq!(l.wish, [127, -127, 0]);
    }

    #[test]
    fn stationary_air_diagonal_keeps_view() {
        let s = airborne(Vec3::new(0.0, 0.0, -50.0), 33.0);
        let i = plan_move(&Action::right_diag(), &s, &MoveConfig::default());
        assert_eq!(i.yaw, 33.0);
    }

    #[test]
    fn turn_snaps_to_velocity_when_far_off() {
        let s = airborne(Vec3::new(0.0, 400.0, 0.0), 0.0);
        let i = plan_move(&Action::left(125.0), &s, &MoveConfig::default());
        assert!(close(i.yaw, 91.0));
        assert_eq!(i.wish, [0, -127, 0]);
    }

    #[test]
    fn turn_adds_to_view_when_close() {
        let s = airborne(Vec3::new(0.0, 400.0, 0.0), 87.0);
        let i = plan_move(&Action::right(250.0), &s, &MoveConfig::default());
        assert!(close(i.yaw, 85.0));
        assert_eq!(i.wish, [0, 127, 0]);
    }

    #[test]
    fn stationary_turn_keeps_view() {
        let s = airborne(Vec3::ZERO, 12.0);
        let i = plan_move(&Action::left(360.0), &s, &MoveConfig::default());
        assert_eq!(i.yaw, wrap_yaw(12.0));
    }

    #[test]
    fn idle_in_air_keeps_view() {
        let s = airborne(Vec3::new(500.0, 0.0, 0.0), 70.0);
        let i = plan_move(&Action::IDLE, &s, &MoveConfig::default());
        assert_eq!(i.yaw, 70.0);
        assert_eq!(i.wish, [0, 0, 0]);
    }
}
