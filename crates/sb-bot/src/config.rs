//! Bot configuration.

use sb_control::{Action, MoveConfig};
use sb_core::TickRate;
use sb_solver::SolverConfig;

/// Everything a [`StrafeBot`][crate::StrafeBot] is built from.
///
/// Typically left at `Default`; the demo binary can load it from JSON.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BotConfig {
    pub movement: MoveConfig,
    pub solver: SolverConfig,
    /// Defaults for `addcs` arguments the operator leaves out.
    pub canned_start: CannedStart,
}

/// A fixed strafe-jump start: walk, then turn left at a constant rate.
///
/// The defaults reach roughly 511 u/s on flat ground.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CannedStart {
    /// Ticks pressing the left diagonal without turning.  Default: 12.
    pub walk_ticks: u32,
    /// Ticks turning left afterwards.  Default: 69.
    pub strafe_ticks: u32,
    /// Degrees turned over the strafe ticks.  Default: 250.
    pub strafe_angle: f64,
}

impl CannedStart {
    /// Upper bound on either phase, one minute at 125 Hz.
    pub const MAX_PHASE_TICKS: u32 = 7_500;

    /// Turn rate (deg/s) that covers `strafe_angle` in `strafe_ticks`.
    pub fn turn_rate(&self, tick_rate: TickRate) -> f64 {
        let (_, strafe_ticks) = self.phase_ticks();
        if strafe_ticks == 0 {
            return 0.0;
        }
        tick_rate.hz() / f64::from(strafe_ticks) * self.strafe_angle
    }

    /// `walk_ticks + strafe_ticks` left actions; only the last one
    /// suppresses jumping.
    ///
    /// This is the reverse of the classic circle-jump plugin, which
    /// suppressed the jump on every tick but the last.
    ///
    /// Each phase is capped at [`MAX_PHASE_TICKS`][Self::MAX_PHASE_TICKS].
    pub fn actions(&self, tick_rate: TickRate) -> Vec<Action> {
        let (walk_ticks, strafe_ticks) = self.phase_ticks();
        let Some(total) = walk_ticks.checked_add(strafe_ticks) else {
            return Vec::new();
        };
        let rate = self.turn_rate(tick_rate);
        (0..total)
            .map(|i| {
                let turn = if i >= walk_ticks { rate } else { 0.0 };
                Action::left(turn).with_suppress_jump(i + 1 == total)
            })
            .collect()
    }

    fn phase_ticks(&self) -> (u32, u32) {
        let walk = self.walk_ticks.min(Self::MAX_PHASE_TICKS);
        let strafe = self.strafe_ticks.min(Self::MAX_PHASE_TICKS);
        if (walk, strafe) != (self.walk_ticks, self.strafe_ticks) {
            log::warn!(
                "canned start {}+{} ticks capped to {walk}+{strafe}",
                self.walk_ticks,
                self.strafe_ticks
            );
        }
        (walk, strafe)
    }
}

impl Default for CannedStart {
    fn default() -> Self {
        Self {
            walk_ticks:   12,
            strafe_ticks: 69,
            strafe_angle: 250.0,
        }
    }
}
