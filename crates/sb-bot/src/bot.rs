//! The `StrafeBot` facade.

use sb_agent::{AgentState, Simulation};
use sb_control::Action;
use sb_route::{Route, Waypoint};
use sb_solver::{Mode, Session, SolveObserver};

use crate::{BotConfig, BotError, BotResult, CannedStart, OperatorCommand};

/// One optimized agent: its route, its session, and the operations an
/// operator can run on them.
///
/// The bot is driven from two places: operator commands (authoring, mode
/// changes) and the host's per-tick callback ([`run_tick`][Self::run_tick]).
/// Both run on the host's thread, so mode changes land on the next tick.
pub struct StrafeBot {
    config: BotConfig,
    route: Route,
    session: Session,
    /// Set once the agent has been placed at the route start.
    attached: bool,
}

impl StrafeBot {
    pub fn new(config: BotConfig) -> Self {
        let session = Session::new(config.solver.clone(), config.movement.clone());
        Self {
            config,
            route: Route::new(),
            session,
            attached: false,
        }
    }

    /// Build a bot for `route` and place the agent at its start.
    pub fn attach<S: Simulation + ?Sized>(config: BotConfig, route: Route, sim: &mut S) -> Self {
        let mut bot = Self::new(config);
        bot.route = route;
        bot.restart_from_start(sim);
        bot
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Forget history, queued actions and search state.  The route stays.
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Reset, teleport the agent to the route start at rest, and seed the
    /// history with that snapshot.
    pub fn restart_from_start<S: Simulation + ?Sized>(&mut self, sim: &mut S) {
        self.session.reset();
        let start = self.route.start().rest_state();
        sim.restore(&start);
        self.session.seed(start);
        self.attached = true;
        log::info!("restarted at {}", self.route.start());
    }

    // ── Route authoring ───────────────────────────────────────────────────

    /// Move the route start to `sample`.  An attached bot restarts there.
    pub fn set_start<S: Simulation + ?Sized>(&mut self, sample: &AgentState, sim: &mut S) -> &Waypoint {
        self.route.set_start(sample);
        if self.attached {
            self.restart_from_start(sim);
        }
        self.route.start()
    }

    pub fn add_checkpoint(&mut self, sample: &AgentState) -> BotResult<&Waypoint> {
        let waypoint = self.route.push_checkpoint(sample)?;
        log::info!("added {waypoint}");
        Ok(waypoint)
    }

    /// Drop the most recent checkpoint.  `None` when there is none.
    pub fn remove_checkpoint(&mut self) -> Option<Waypoint> {
        let removed = self.route.pop_checkpoint();
        match &removed {
            Some(waypoint) => log::info!("removed {waypoint}"),
            None => log::warn!("no checkpoint to remove"),
        }
        removed
    }

    pub fn set_end(&mut self, sample: &AgentState) -> &Waypoint {
        self.route.set_end(sample)
    }

    // ── Modes ─────────────────────────────────────────────────────────────

    pub fn start_solve<S: Simulation + ?Sized>(&mut self, sim: &mut S) -> BotResult<()> {
        self.session.start_solve(sim).map_err(|e| rejected("solve", e.into()))
    }

    pub fn stop_solve(&mut self) -> bool {
        self.session.stop_solve()
    }

    pub fn start_recording<S: Simulation + ?Sized>(&mut self, sim: &mut S) -> BotResult<()> {
        self.session.start_recording(sim).map_err(|e| rejected("record", e.into()))
    }

    pub fn stop_recording(&mut self) -> bool {
        self.session.stop_recording()
    }

    pub fn start_playback<S: Simulation + ?Sized>(&mut self, sim: &mut S) -> BotResult<()> {
        self.session.start_playback(sim).map_err(|e| rejected("playback", e.into()))
    }

    pub fn stop_playback(&mut self) -> bool {
        self.session.stop_playback()
    }

    /// Queue a canned strafe-jump start to run (and be recorded) before
    /// any further search.
    pub fn queue_recorded_sequence(&mut self, walk_ticks: u32, strafe_ticks: u32, strafe_angle: f64) {
        let canned = CannedStart { walk_ticks, strafe_ticks, strafe_angle };
        let actions = canned.actions(self.config.movement.tick_rate);
        log::info!(
            "queued canned start: {} walk + {} strafe ticks at {:.1} deg/s",
            walk_ticks,
            strafe_ticks,
            canned.turn_rate(self.config.movement.tick_rate)
        );
        self.queue_recorded_actions(actions);
    }

    /// Queue an arbitrary scripted sequence, recorded like a canned start.
    pub fn queue_recorded_actions<I: IntoIterator<Item = Action>>(&mut self, actions: I) {
        self.session.queue_recorded(actions);
    }

    // ── Per tick ──────────────────────────────────────────────────────────

    /// Handle one host tick.  `false` means the host refused the command
    /// and the agent should be released.
    pub fn run_tick<S, B>(&mut self, sim: &mut S, observer: &mut B) -> bool
    where
        S: Simulation + ?Sized,
        B: SolveObserver + ?Sized,
    {
        self.session.tick(sim, &self.route, observer)
    }

    // ── Operator commands ─────────────────────────────────────────────────

    /// Run `command`.  Authoring commands sample `operator`, the state of
    /// the player who issued it.
    pub fn execute<S: Simulation + ?Sized>(
        &mut self,
        command: &OperatorCommand,
        operator: &AgentState,
        sim: &mut S,
    ) -> BotResult<()> {
        log::debug!("operator command {command:?}");
        match command {
            OperatorCommand::Spawn => self.restart_from_start(sim),
            OperatorCommand::Reset => self.reset(),
            OperatorCommand::Solve => self.start_solve(sim)?,
            OperatorCommand::StopSolve => {
                self.stop_solve();
            }
            OperatorCommand::Play => self.start_playback(sim)?,
            OperatorCommand::StopPlay => {
                self.stop_playback();
            }
            OperatorCommand::Record => self.start_recording(sim)?,
            OperatorCommand::StopRecord => {
                self.stop_recording();
            }
            OperatorCommand::SetStart => {
                self.set_start(operator, sim);
            }
            OperatorCommand::SetEnd => {
                self.set_end(operator);
            }
            OperatorCommand::AddCheckpoint => {
                self.add_checkpoint(operator)?;
            }
            OperatorCommand::RemoveCheckpoint => {
                self.remove_checkpoint();
            }
            OperatorCommand::AddCannedStart(canned) => {
                self.queue_recorded_sequence(canned.walk_ticks, canned.strafe_ticks, canned.strafe_angle)
            }
        }
        Ok(())
    }
}

fn rejected(operation: &str, e: BotError) -> BotError {
    log::warn!("{operation} rejected: {e}");
    e
}
