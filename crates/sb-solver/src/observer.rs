//! Solver progress hooks.

use sb_core::Tick;

use crate::Candidate;

/// Callbacks invoked by [`Session::tick`][crate::Session::tick] while
/// solving.
///
/// All methods default to no-ops.
///
/// # Example — commit counter
///
/// ```rust,ignore
/// struct Commits(usize);
///
/// impl SolveObserver for Commits {
///     fn on_window_committed(&mut self, _tick: Tick, _window: usize, _winner: &Candidate) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SolveObserver {
    /// A candidate finished its window and was scored.  `best` already
    /// accounts for it.
    fn on_candidate_measured(&mut self, _tick: Tick, _candidate: &Candidate, _best: &Candidate) {}

    /// A window's winner was written to history.  `window` counts commits
    /// since the session was last reset, starting at 0.
    fn on_window_committed(&mut self, _tick: Tick, _window: usize, _winner: &Candidate) {}
}

/// A [`SolveObserver`] that ignores everything.
pub struct NoopObserver;

impl SolveObserver for NoopObserver {}
