//! Coordinate-wise hill-climbing over the action space.
//!
//! # Candidate order
//!
//! ```text
//! LeftDiag → RightDiag → Left 15, 30, … 360 → Right 15, 30, … 360 → commit
//! ```
//!
//! A turn direction is abandoned as soon as a rate above the first grid
//! step scores lower than the rate before it: `Left` jumps straight to
//! `Right 15`, `Right` commits.  The scores along one direction are assumed
//! to be unimodal.

use std::fmt;

use sb_control::{Action, ActionKind};

use crate::SolverConfig;

// ── Candidate ─────────────────────────────────────────────────────────────────

/// An action and the reward it earned over one window.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    pub action: Action,
    pub reward: f64,
}

impl Candidate {
    /// Nothing tried yet.
    pub const SENTINEL: Candidate = Candidate { action: Action::IDLE, reward: f64::NEG_INFINITY };

    pub fn new(action: Action, reward: f64) -> Self {
        Self { action, reward }
    }
}

impl Default for Candidate {
    fn default() -> Self {
        Self::SENTINEL
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (reward {:.3})", self.action, self.reward)
    }
}

// ── Sweep ─────────────────────────────────────────────────────────────────────

/// What to do after [`Sweep::advance`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SweepStep {
    /// Run this action for a window and score it.
    Measure(Action),
    /// Every candidate has been tried; commit this one.
    Commit(Candidate),
}

/// Search state of the window currently being solved.
///
/// `trial` keeps the reward of the most recently scored candidate while it
/// moves on to the next action, which is what the early-termination check
/// compares against.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sweep {
    best: Candidate,
    trial: Candidate,
}

impl Sweep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn best(&self) -> &Candidate {
        &self.best
    }

    pub fn trial(&self) -> &Candidate {
        &self.trial
    }

    /// No candidate has been tried since the last reset.
    pub fn is_fresh(&self) -> bool {
        self.trial.action.is_idle()
    }

    /// Back to the sentinel for a fresh window.
    pub fn reset(&mut self) {
        self.best = Candidate::SENTINEL;
        self.trial = Candidate::SENTINEL;
    }

    /// Store `reward` as the score of the current trial.
    ///
    /// Returns the candidate to commit when the sweep ends early.
    pub fn record(&mut self, reward: f64, config: &SolverConfig) -> Option<Candidate> {
        let previous = self.trial.reward;
        self.trial.reward = reward;
        if reward > self.best.reward {
            self.best = self.trial;
        }

        let action = &mut self.trial.action;
        if previous > reward && action.kind.is_turn() && action.turn_rate > config.turn_step {
            match action.kind {
                ActionKind::Left => {
                    // `advance` steps this up to the first grid rate.
                    *action = Action::right(0.0);
                }
                _ => {
                    action.turn_rate = 0.0;
                    return Some(self.best);
                }
            }
        }
        None
    }

    /// Move `trial` to the next action in the sweep.
    pub fn advance(&mut self, config: &SolverConfig) -> SweepStep {
        let action = &mut self.trial.action;
        match action.kind {
            ActionKind::Idle      => *action = Action::left_diag(),
            ActionKind::LeftDiag  => *action = Action::right_diag(),
            ActionKind::RightDiag => *action = Action::left(config.turn_step),
            ActionKind::Left => {
                action.turn_rate += config.turn_step;
                if action.turn_rate > config.turn_max {
                    *action = Action::right(config.turn_step);
                }
            }
            ActionKind::Right => {
                action.turn_rate += config.turn_step;
                if action.turn_rate > config.turn_max {
                    action.turn_rate = 0.0;
                    return SweepStep::Commit(self.best);
                }
            }
        }
        SweepStep::Measure(*action)
    }
}
