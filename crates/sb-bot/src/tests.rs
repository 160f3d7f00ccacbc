//! Unit tests for sb-bot.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use sb_agent::{AgentState, MoveCommand, Simulation};
use sb_control::{Action, ActionKind};
use sb_core::{GroundRef, Tick, TickRate, Vec3};
use sb_route::Route;
use sb_solver::{Candidate, Mode, NoopObserver, SolveObserver};

use crate::{BotConfig, BotError, CannedStart, OperatorCommand, StrafeBot};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Ground-only kinematics: any pressed move key sets the velocity to 300 u/s
/// along the commanded yaw, releasing them halves it.
struct Glider {
    state: AgentState,
    commands: Vec<MoveCommand>,
}

impl Glider {
    fn new() -> Self {
        Self {
            state: AgentState::at_rest(Vec3::new(-500.0, 40.0, 0.0), 0.0, GroundRef(0)),
            commands: Vec::new(),
        }
    }
}

impl Simulation for Glider {
    fn state(&self) -> AgentState {
        self.state.clone()
    }
    fn set_position(&mut self, position: Vec3) {
        self.state.position = position;
    }
    fn set_velocity(&mut self, velocity: Vec3) {
        self.state.velocity = velocity;
    }
    fn set_view_angles(&mut self, angles: Vec3) {
        self.state.yaw = angles.y;
    }
    fn set_ground_ref(&mut self, ground: GroundRef) {
        self.state.ground = ground;
    }
    fn set_jump_time(&mut self, jump_time: i32) {
        self.state.jump_time = jump_time;
    }
    fn set_double_jumped(&mut self, double_jumped: bool) {
        self.state.double_jumped = double_jumped;
    }
    fn issue_command(&mut self, command: &MoveCommand) -> bool {
        self.state.yaw = command.yaw;
        self.state.velocity = if command.is_neutral() {
            self.state.velocity * 0.5
        } else {
            let rad = command.yaw.to_radians();
            Vec3::new(rad.cos(), rad.sin(), 0.0) * 300.0
        };
        self.state.position += self.state.velocity * 0.008;
        self.commands.push(*command);
        true
    }
}

fn standing_at(x: f64, y: f64, yaw: f64) -> AgentState {
    AgentState::at_rest(Vec3::new(x, y, 0.0), yaw, GroundRef(1))
}

/// start (0,0) → end (1000,0).
fn straight_route() -> Route {
    let mut route = Route::new();
    route.set_start(&standing_at(0.0, 0.0, 0.0));
    route.set_end(&standing_at(1000.0, 0.0, 0.0));
    route
}

fn random_action(rng: &mut SmallRng) -> Action {
    let kind = match rng.gen_range(0..5) {
        0 => ActionKind::LeftDiag,
        1 => ActionKind::RightDiag,
        2 => ActionKind::Left,
        3 => ActionKind::Right,
        _ => ActionKind::Idle,
    };
    Action::new(kind, f64::from(rng.gen_range(0..=24u32)) * 15.0)
}

#[derive(Default)]
struct Commits(Vec<Candidate>);

impl SolveObserver for Commits {
    fn on_window_committed(&mut self, _tick: Tick, _window: usize, winner: &Candidate) {
        self.0.push(*winner);
    }
}

// ── Canned start ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod canned {
    use super::*;

    #[test]
    fn default_sequence() {
        let actions = CannedStart::default().actions(TickRate::DEFAULT);
        assert_eq!(actions.len(), 81);
        assert!(actions.iter().all(|a| a.kind == ActionKind::Left));
        assert!(actions[..12].iter().all(|a| a.turn_rate == 0.0));
        let rate = 125.0 / 69.0 * 250.0;
        assert!(actions[12..].iter().all(|a| (a.turn_rate - rate).abs() < 1e-9));
        assert!((rate - 452.9).abs() < 0.01);
        assert!(actions[..80].iter().all(|a| !a.suppress_jump));
        assert!(actions[80].suppress_jump);
    }

    #[test]
    fn no_strafe_ticks_means_no_turn() {
        let canned = CannedStart { walk_ticks: 5, strafe_ticks: 0, strafe_angle: 250.0 };
        let actions = canned.actions(TickRate::DEFAULT);
        assert_eq!(actions.len(), 5);
        assert!(actions.iter().all(|a| a.turn_rate == 0.0));
        assert!(actions[4].suppress_jump);
    }

    #[test]
    fn empty_sequence() {
        let canned = CannedStart { walk_ticks: 0, strafe_ticks: 0, strafe_angle: 0.0 };
        assert!(canned.actions(TickRate::DEFAULT).is_empty());
    }

    #[test]
    fn oversized_phases_are_capped() {
        let max = CannedStart::MAX_PHASE_TICKS;
        let canned = CannedStart { walk_ticks: u32::MAX, strafe_ticks: 1, strafe_angle: 250.0 };
        let actions = canned.actions(TickRate::DEFAULT);
        assert_eq!(actions.len(), max as usize + 1);
        assert!(actions[..max as usize].iter().all(|a| a.turn_rate == 0.0));
        assert!((actions[max as usize].turn_rate - 125.0 * 250.0).abs() < 1e-9);

        let canned = CannedStart { walk_ticks: 0, strafe_ticks: 4_000_000_000, strafe_angle: 250.0 };
        assert_eq!(canned.actions(TickRate::DEFAULT).len(), max as usize);
    }

    #[test]
    fn bot_queues_sequence() {
        let mut sim = Glider::new();
        let mut bot = StrafeBot::attach(BotConfig::default(), straight_route(), &mut sim);
        bot.queue_recorded_sequence(12, 69, 250.0);
        assert_eq!(bot.session().queue().len(), 81);
    }
}

// ── Operator commands ─────────────────────────────────────────────────────────

#[cfg(test)]
mod commands {
    use super::*;

    #[test]
    fn verbs() {
        let cases = [
            ("testbot", OperatorCommand::Spawn),
            ("resetbot", OperatorCommand::Reset),
            ("solve", OperatorCommand::Solve),
            ("stopsolve", OperatorCommand::StopSolve),
            ("play", OperatorCommand::Play),
            ("stopplay", OperatorCommand::StopPlay),
            ("record", OperatorCommand::Record),
            ("stoprecord", OperatorCommand::StopRecord),
            ("setstart", OperatorCommand::SetStart),
            ("setend", OperatorCommand::SetEnd),
            ("addcp", OperatorCommand::AddCheckpoint),
            ("removecp", OperatorCommand::RemoveCheckpoint),
        ];
        for (line, expected) in cases {
            assert_eq!(OperatorCommand::parse(line).unwrap(), expected, "{line}");
        }
        assert_eq!(OperatorCommand::parse("  !Solve ").unwrap(), OperatorCommand::Solve);
        assert_eq!("play".parse::<OperatorCommand>().unwrap(), OperatorCommand::Play);
    }

    #[test]
    fn addcs_defaults() {
        assert_eq!(
            OperatorCommand::parse("addcs").unwrap(),
            OperatorCommand::AddCannedStart(CannedStart::default())
        );
        assert_eq!(
            OperatorCommand::parse("addcs 10").unwrap(),
            OperatorCommand::AddCannedStart(CannedStart { walk_ticks: 10, ..CannedStart::default() })
        );
        assert_eq!(
            OperatorCommand::parse("addcs 8 60 270.5").unwrap(),
            OperatorCommand::AddCannedStart(CannedStart {
                walk_ticks:   8,
                strafe_ticks: 60,
                strafe_angle: 270.5,
            })
        );
    }

    #[test]
    fn malformed_addcs_args_fall_back_one_by_one() {
        assert_eq!(
            OperatorCommand::parse("addcs x 50 abc").unwrap(),
            OperatorCommand::AddCannedStart(CannedStart {
                walk_ticks:   12,
                strafe_ticks: 50,
                strafe_angle: 250.0,
            })
        );
        assert_eq!(
            OperatorCommand::parse("addcs -3 7 inf").unwrap(),
            OperatorCommand::AddCannedStart(CannedStart {
                walk_ticks:   12,
                strafe_ticks: 7,
                strafe_angle: 250.0,
            })
        );
    }

    #[test]
    fn oversized_addcs_ticks_fall_back() {
        let command = OperatorCommand::parse("addcs 4294967295 1 250").unwrap();
        assert_eq!(
            command,
            OperatorCommand::AddCannedStart(CannedStart {
                walk_ticks:   12,
                strafe_ticks: 1,
                strafe_angle: 250.0,
            })
        );
        let OperatorCommand::AddCannedStart(canned) = command else {
            unreachable!()
        };
        assert_eq!(canned.actions(TickRate::DEFAULT).len(), 13);

        assert_eq!(
            OperatorCommand::parse("addcs 0 4000000000").unwrap(),
            OperatorCommand::AddCannedStart(CannedStart { walk_ticks: 0, ..CannedStart::default() })
        );
        let max = CannedStart::MAX_PHASE_TICKS;
        assert_eq!(
            OperatorCommand::parse(&format!("addcs {max} {max}")).unwrap(),
            OperatorCommand::AddCannedStart(CannedStart {
                walk_ticks:   max,
                strafe_ticks: max,
                strafe_angle: 250.0,
            })
        );
    }

    #[test]
    fn custom_defaults() {
        let defaults = CannedStart { walk_ticks: 1, strafe_ticks: 2, strafe_angle: 3.0 };
        assert_eq!(
            OperatorCommand::parse_with("addcs 9", &defaults).unwrap(),
            OperatorCommand::AddCannedStart(CannedStart { walk_ticks: 9, ..defaults })
        );
    }

    #[test]
    fn unknown_verbs() {
        assert_eq!(
            OperatorCommand::parse("jump high"),
            Err(BotError::UnknownCommand("jump".into()))
        );
        assert_eq!(OperatorCommand::parse(""), Err(BotError::UnknownCommand(String::new())));
    }
}

// ── Facade ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod facade {
    use super::*;

    #[test]
    fn unseeded_bot_rejects_modes_and_idles() {
        let mut sim = Glider::new();
        let mut bot = StrafeBot::new(BotConfig::default());
        assert!(!bot.is_attached());
        assert!(matches!(bot.start_solve(&mut sim), Err(BotError::InvalidRouteState(_))));
        assert!(matches!(bot.start_playback(&mut sim), Err(BotError::InvalidRouteState(_))));
        assert!(matches!(bot.start_recording(&mut sim), Err(BotError::InvalidRouteState(_))));
        assert_eq!(bot.mode(), Mode::Idle);
        assert!(bot.run_tick(&mut sim, &mut NoopObserver));
        assert!(sim.commands[0].is_neutral());
    }

    #[test]
    fn attach_teleports_to_start() {
        let mut sim = Glider::new();
        sim.state.velocity = Vec3::new(50.0, 0.0, 0.0);
        let mut route = straight_route();
        route.set_start(&standing_at(10.0, 20.0, 90.0));
        let bot = StrafeBot::attach(BotConfig::default(), route, &mut sim);

        assert!(bot.is_attached());
        assert_eq!(sim.state.position, Vec3::new(10.0, 20.0, 0.0));
        assert_eq!(sim.state.velocity, Vec3::ZERO);
        assert_eq!(sim.state.yaw, 90.0);
        assert_eq!(sim.state.ground, GroundRef(1));
        assert_eq!(bot.session().history().len(), 1);
    }

    #[test]
    fn set_start_restarts_attached_bot() {
        let mut sim = Glider::new();
        let mut bot = StrafeBot::attach(BotConfig::default(), straight_route(), &mut sim);
        bot.queue_recorded_sequence(3, 3, 90.0);
        bot.start_solve(&mut sim).unwrap();
        for _ in 0..10 {
            bot.run_tick(&mut sim, &mut NoopObserver);
        }
        assert!(bot.session().history().len() > 1);

        let operator = standing_at(-200.0, 5.0, 45.0);
        bot.execute(&OperatorCommand::SetStart, &operator, &mut sim).unwrap();
        assert_eq!(bot.route().start().position, operator.position);
        assert_eq!(bot.session().history().len(), 1);
        assert_eq!(bot.mode(), Mode::Idle);
        assert_eq!(sim.state.position, operator.position);
    }

    #[test]
    fn set_start_leaves_unattached_sim_alone() {
        let mut sim = Glider::new();
        let before = sim.state();
        let mut bot = StrafeBot::new(BotConfig::default());
        bot.set_start(&standing_at(1.0, 2.0, 3.0), &mut sim);
        assert_eq!(sim.state(), before);
        assert!(bot.session().history().is_empty());
    }

    #[test]
    fn checkpoint_authoring() {
        let mut sim = Glider::new();
        let mut bot = StrafeBot::new(BotConfig::default());
        let op = standing_at(100.0, 0.0, 0.0);
        bot.execute(&OperatorCommand::AddCheckpoint, &op, &mut sim).unwrap();
        bot.execute(&OperatorCommand::AddCheckpoint, &op, &mut sim).unwrap();
        let names: Vec<&str> = bot.route().checkpoints().iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["cp0", "cp1"]);

        bot.execute(&OperatorCommand::RemoveCheckpoint, &op, &mut sim).unwrap();
        bot.execute(&OperatorCommand::RemoveCheckpoint, &op, &mut sim).unwrap();
        bot.execute(&OperatorCommand::RemoveCheckpoint, &op, &mut sim).unwrap();
        assert!(bot.route().checkpoints().is_empty());

        bot.execute(&OperatorCommand::SetEnd, &op, &mut sim).unwrap();
        assert_eq!(bot.route().end().position, op.position);
    }

    #[test]
    fn reset_then_play_is_rejected() {
        let mut sim = Glider::new();
        let mut bot = StrafeBot::attach(BotConfig::default(), straight_route(), &mut sim);
        let op = sim.state();
        bot.execute(&OperatorCommand::Reset, &op, &mut sim).unwrap();
        assert_eq!(
            bot.execute(&OperatorCommand::Play, &op, &mut sim),
            Err(BotError::InvalidRouteState("playback needs a recorded history"))
        );
        bot.execute(&OperatorCommand::Spawn, &op, &mut sim).unwrap();
        bot.execute(&OperatorCommand::Play, &op, &mut sim).unwrap();
        assert_eq!(bot.mode(), Mode::Playing);
    }

    #[test]
    fn solving_a_route_commits_windows() {
        let mut sim = Glider::new();
        let mut bot = StrafeBot::attach(BotConfig::default(), straight_route(), &mut sim);
        let op = sim.state();
        bot.execute(&OperatorCommand::parse("addcs 2 3 30").unwrap(), &op, &mut sim).unwrap();
        bot.execute(&OperatorCommand::Solve, &op, &mut sim).unwrap();

        let mut commits = Commits::default();
        for _ in 0..3_000 {
            assert!(bot.run_tick(&mut sim, &mut commits));
            if commits.0.len() == 2 {
                break;
            }
        }
        assert_eq!(commits.0.len(), 2);
        assert!(commits.0.iter().all(|c| c.reward.is_finite()));
        // Seed, 5 canned ticks, opened window, 24 repeats of the first
        // winner, second window entry.
        assert_eq!(bot.session().history().len(), 1 + 5 + 1 + 24 + 1);
        assert_eq!(bot.session().windows_committed(), 2);
        assert!(bot.stop_solve());
    }
}

// ── Replay ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod replay {
    use super::*;

    fn play_once(bot: &mut StrafeBot, sim: &mut Glider, ticks: usize) -> Vec<MoveCommand> {
        sim.commands.clear();
        bot.start_playback(sim).unwrap();
        for _ in 0..ticks {
            assert!(bot.run_tick(sim, &mut NoopObserver));
        }
        sim.commands.clone()
    }

    fn record_script(seed: u64, len: usize) -> (StrafeBot, Glider, Vec<MoveCommand>) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut sim = Glider::new();
        let mut bot = StrafeBot::attach(BotConfig::default(), straight_route(), &mut sim);
        let script: Vec<Action> = (0..len).map(|_| random_action(&mut rng)).collect();
        bot.queue_recorded_actions(script);
        bot.start_recording(&mut sim).unwrap();
        for _ in 0..len + 1 {
            bot.run_tick(&mut sim, &mut NoopObserver);
        }
        bot.stop_recording();
        let recorded = sim.commands[..len].to_vec();
        (bot, sim, recorded)
    }

    #[test]
    fn playback_issues_history_then_idles() {
        let (mut bot, mut sim, _) = record_script(7, 30);
        let len = bot.session().history().len();
        assert_eq!(len, 1 + 30 + 1);

        let played = play_once(&mut bot, &mut sim, len + 10);
        assert_eq!(played.len(), len + 10);
        assert!(played[len..].iter().all(|c| c.is_neutral()));
        assert_eq!(bot.mode(), Mode::Playing);
    }

    #[test]
    fn playback_reproduces_recording() {
        let (mut bot, mut sim, recorded) = record_script(42, 40);
        let len = bot.session().history().len();
        let played = play_once(&mut bot, &mut sim, len);
        // Entry 0 is the seeded start; entries 1..=40 are the script.
        assert_eq!(played[1..=40], recorded[..]);
    }

    #[test]
    fn replaying_twice_is_identical() {
        for seed in [1, 2, 3] {
            let (mut bot, mut sim, _) = record_script(seed, 50);
            let len = bot.session().history().len();
            let first = play_once(&mut bot, &mut sim, len + 5);
            sim.state.position = Vec3::new(999.0, -999.0, 0.0);
            sim.state.yaw = -120.0;
            let second = play_once(&mut bot, &mut sim, len + 5);
            assert_eq!(first, second, "seed {seed}");
        }
    }
}
