//! The per-tick state machine.

use sb_agent::{AgentState, Simulation};
use sb_control::{Action, MoveConfig, plan_move};
use sb_core::Tick;
use sb_history::{ActionQueue, History};

use crate::{Candidate, Mode, Objective, SolveObserver, SolverConfig, SolverError, SolverResult, Sweep, SweepStep};

/// One agent's optimizer: history, pending actions and search state.
///
/// Drive it by calling [`tick`][Self::tick] exactly once per host tick.
/// Every call issues exactly one command.
pub struct Session {
    solver: SolverConfig,
    movement: MoveConfig,
    mode: Mode,
    history: History,
    /// Remaining ticks of the candidate being measured or the committed
    /// winner being replayed.
    window: ActionQueue,
    /// Operator-queued actions.  Always recorded.
    queue: ActionQueue,
    sweep: Sweep,

    /// Open a new window entry once both queues drain.
    save_next: bool,
    /// `window` holds a candidate under test; score on drain.
    measure_next: bool,
    /// The last history entry was recorded for an operator-queued action.
    last_queued: bool,
    /// The next recorded tick overwrites the last entry's action instead of
    /// appending a new entry.
    reopen_last: bool,

    /// Next history entry to replay.
    cursor: usize,
    tick: Tick,
    windows: usize,
}

impl Session {
    pub fn new(solver: SolverConfig, movement: MoveConfig) -> Self {
        Self {
            solver,
            movement,
            mode: Mode::Idle,
            history: History::new(),
            window: ActionQueue::new(),
            queue: ActionQueue::new(),
            sweep: Sweep::new(),
            save_next: false,
            measure_next: false,
            last_queued: false,
            reopen_last: false,
            cursor: 0,
            tick: Tick::ZERO,
            windows: 0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Operator-queued actions still to run.
    pub fn queue(&self) -> &ActionQueue {
        &self.queue
    }

    /// Ticks left in the current measurement or commit replay.
    pub fn window_queue(&self) -> &ActionQueue {
        &self.window
    }

    pub fn sweep(&self) -> &Sweep {
        &self.sweep
    }

    pub fn solver_config(&self) -> &SolverConfig {
        &self.solver
    }

    pub fn move_config(&self) -> &MoveConfig {
        &self.movement
    }

    /// Ticks handled since the last reset.
    pub fn tick_count(&self) -> Tick {
        self.tick
    }

    /// Windows committed since the last reset.
    pub fn windows_committed(&self) -> usize {
        self.windows
    }

    // ── Setup ─────────────────────────────────────────────────────────────

    /// Drop history, queued actions and search state; back to idle.
    pub fn reset(&mut self) {
        self.set_mode(Mode::Idle);
        self.history.clear();
        self.window.clear();
        self.queue.clear();
        self.sweep.reset();
        self.save_next = false;
        self.measure_next = false;
        self.last_queued = false;
        self.reopen_last = false;
        self.cursor = 0;
        self.tick = Tick::ZERO;
        self.windows = 0;
    }

    /// Append the first confirmed snapshot.  Call right after `reset`.
    pub fn seed(&mut self, snapshot: AgentState) {
        self.history.push(snapshot, Action::IDLE);
    }

    /// Queue `actions` to be issued, one per tick, before the next window
    /// is searched.  Every one of them is recorded into history.
    pub fn queue_recorded<I: IntoIterator<Item = Action>>(&mut self, actions: I) {
        self.save_next = true;
        self.queue.extend(actions);
    }

    // ── Mode changes ──────────────────────────────────────────────────────

    /// Rewind to the last confirmed snapshot and start searching.
    pub fn start_solve<S: Simulation + ?Sized>(&mut self, sim: &mut S) -> SolverResult<()> {
        self.rewind(sim, "solving needs a seeded history")?;
        self.set_mode(Mode::Solving);
        Ok(())
    }

    pub fn stop_solve(&mut self) -> bool {
        self.leave(Mode::Solving)
    }

    /// Rewind to the last confirmed snapshot and record queued actions.
    pub fn start_recording<S: Simulation + ?Sized>(&mut self, sim: &mut S) -> SolverResult<()> {
        self.rewind(sim, "recording needs a seeded history")?;
        self.set_mode(Mode::Recording);
        Ok(())
    }

    pub fn stop_recording(&mut self) -> bool {
        self.leave(Mode::Recording)
    }

    /// Rewind to the first snapshot and replay from there.
    pub fn start_playback<S: Simulation + ?Sized>(&mut self, sim: &mut S) -> SolverResult<()> {
        self.history
            .restore(0, sim)
            .map_err(|_| SolverError::InvalidRouteState("playback needs a recorded history"))?;
        self.cursor = 0;
        self.set_mode(Mode::Playing);
        Ok(())
    }

    pub fn stop_playback(&mut self) -> bool {
        self.leave(Mode::Playing)
    }

    /// Restore the last entry and drop the interrupted window.
    ///
    /// A partial measurement is discarded and the sweep restarts.  A partial
    /// commit replay is cut short: the last recorded tick becomes the start
    /// of the next window.  An operator-queued action that was recorded last
    /// is put back so it runs again from its own snapshot.
    fn rewind<S: Simulation + ?Sized>(&mut self, sim: &mut S, empty: &'static str) -> SolverResult<()> {
        let last = self
            .history
            .restore_last(sim)
            .map_err(|_| SolverError::InvalidRouteState(empty))?
            .action;

        self.window.clear();
        self.measure_next = false;
        self.sweep.reset();
        if std::mem::take(&mut self.last_queued) {
            self.queue.push_front(last);
        }
        self.reopen_last = !last.is_idle();
        self.save_next = self.reopen_last || !self.queue.is_empty();
        Ok(())
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            log::info!("session mode {} -> {}", self.mode, mode);
            self.mode = mode;
        }
    }

    fn leave(&mut self, mode: Mode) -> bool {
        if self.mode != mode {
            return false;
        }
        self.set_mode(Mode::Idle);
        true
    }

    // ── Per-tick dispatch ─────────────────────────────────────────────────

    /// Handle one host tick according to the current mode.
    ///
    /// Returns `false` only when the host refused the command.  Idle ticks
    /// always return `true`.  Internal failures drop the session to idle.
    pub fn tick<S, O, B>(&mut self, sim: &mut S, objective: &O, observer: &mut B) -> bool
    where
        S: Simulation + ?Sized,
        O: Objective + ?Sized,
        B: SolveObserver + ?Sized,
    {
        let outcome = match self.mode {
            Mode::Playing   => self.playback_tick(sim),
            Mode::Solving   => self.solve_tick(sim, objective, observer),
            Mode::Recording => self.record_tick(sim),
            Mode::Idle      => {
                self.idle_tick(sim);
                Ok(true)
            }
        };
        self.tick.advance();

        match outcome {
            Ok(alive) => alive,
            Err(e) => {
                log::error!("{} tick failed: {e}", self.mode);
                self.set_mode(Mode::Idle);
                self.idle_tick(sim);
                true
            }
        }
    }

    /// One solving tick.
    pub fn solve_tick<S, O, B>(&mut self, sim: &mut S, objective: &O, observer: &mut B) -> SolverResult<bool>
    where
        S: Simulation + ?Sized,
        O: Objective + ?Sized,
        B: SolveObserver + ?Sized,
    {
        if let Some(action) = self.window.pop_front() {
            if !self.measure_next {
                self.record(sim, action)?;
            }
            return Ok(self.issue(sim, &action));
        }

        if self.measure_next {
            self.measure_next = false;
            let score = objective.score(&sim.state());
            let measured = Candidate::new(self.sweep.trial().action, score);
            let ended = self.sweep.record(score, &self.solver);
            log::trace!("{}: measured {measured}, best {}", self.tick, self.sweep.best());
            observer.on_candidate_measured(self.tick, &measured, self.sweep.best());

            if let Some(winner) = ended {
                log::debug!("{}: {} scored lower than the previous rate, ending sweep", self.tick, measured.action);
                return self.commit(sim, winner, observer);
            }
        }

        if self.sweep.is_fresh() {
            if let Some(action) = self.queue.pop_front() {
                return self.issue_queued(sim, action);
            }
            self.open_window(sim)?;
        }

        match self.sweep.advance(&self.solver) {
            SweepStep::Measure(action) => self.measure(sim, action),
            SweepStep::Commit(winner) => self.commit(sim, winner, observer),
        }
    }

    /// One recording tick: drain the queue into history, then idle.
    pub fn record_tick<S: Simulation + ?Sized>(&mut self, sim: &mut S) -> SolverResult<bool> {
        if let Some(action) = self.queue.pop_front() {
            return self.issue_queued(sim, action);
        }
        self.open_window(sim)?;
        Ok(self.idle_tick(sim))
    }

    /// One playback tick: restore the next entry and reissue its action.
    /// Past the end the agent idles.
    pub fn playback_tick<S: Simulation + ?Sized>(&mut self, sim: &mut S) -> SolverResult<bool> {
        if self.cursor >= self.history.len() {
            return Ok(self.idle_tick(sim));
        }
        let action = self.history.restore(self.cursor, sim)?.action;
        self.cursor += 1;
        Ok(self.issue(sim, &action))
    }

    /// Issue the idle command.
    pub fn idle_tick<S: Simulation + ?Sized>(&self, sim: &mut S) -> bool {
        self.issue(sim, &Action::IDLE)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn issue<S: Simulation + ?Sized>(&self, sim: &mut S, action: &Action) -> bool {
        let intent = plan_move(action, &sim.state(), &self.movement);
        sim.issue_command(&intent.command())
    }

    fn issue_queued<S: Simulation + ?Sized>(&mut self, sim: &mut S, action: Action) -> SolverResult<bool> {
        self.record(sim, action)?;
        self.last_queued = true;
        Ok(self.issue(sim, &action))
    }

    /// Log the current state with the action about to be issued from it.
    fn record<S: Simulation + ?Sized>(&mut self, sim: &S, action: Action) -> SolverResult<()> {
        self.last_queued = false;
        if std::mem::take(&mut self.reopen_last) {
            self.history.replace_last_action(action)?;
        } else {
            self.history.push(sim.state(), action);
        }
        Ok(())
    }

    /// The queued actions have run; the current state starts a new window.
    fn open_window<S: Simulation + ?Sized>(&mut self, sim: &S) -> SolverResult<()> {
        if std::mem::take(&mut self.save_next) {
            self.record(sim, Action::IDLE)?;
        }
        Ok(())
    }

    fn measure<S: Simulation + ?Sized>(&mut self, sim: &mut S, action: Action) -> SolverResult<bool> {
        self.history.restore_last(sim)?;
        self.measure_next = true;
        self.window.push_repeated(action, self.solver.repeat_ticks());
        Ok(self.issue(sim, &action))
    }

    fn commit<S, B>(&mut self, sim: &mut S, winner: Candidate, observer: &mut B) -> SolverResult<bool>
    where
        S: Simulation + ?Sized,
        B: SolveObserver + ?Sized,
    {
        self.history.replace_last_action(winner.action)?;
        self.history.restore_last(sim)?;
        self.save_next = true;
        self.last_queued = false;
        self.reopen_last = false;
        let alive = self.issue(sim, &winner.action);
        self.sweep.reset();
        self.window.push_repeated(winner.action, self.solver.repeat_ticks());

        log::info!("window {} committed, history len {}: {winner}", self.windows, self.history.len());
        observer.on_window_committed(self.tick, self.windows, &winner);
        self.windows += 1;
        Ok(alive)
    }
}
