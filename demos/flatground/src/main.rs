//! flatground — strafebot on a toy flat-floor host.
//!
//! Authors an L-shaped route, seeds a canned strafe-jump start, solves for
//! a while, then plays the solution back.  Every operator action goes
//! through the same text commands a real host would forward.
//!
//! ```text
//! flatground [config.json] [solve_seconds]
//! ```
//!
//! `RUST_LOG=debug` shows early terminations, `trace` every candidate.

mod physics;

use anyhow::{Context, Result};

use sb_agent::{AgentState, Simulation};
use sb_bot::{BotConfig, OperatorCommand, StrafeBot};
use sb_core::{GroundRef, Tick, Vec3};
use sb_solver::{Candidate, SolveObserver};

use physics::FlatGround;

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_SOLVE_SECS: u64 = 60;
const PLAYBACK_TAIL_TICKS: u64 = 125;

// ── Operator script ───────────────────────────────────────────────────────────

/// Where the operator stands for each authoring command.
fn operator_at(x: f64, y: f64, yaw: f64) -> AgentState {
    AgentState::at_rest(Vec3::new(x, y, 0.0), yaw, GroundRef(0))
}

fn script() -> Vec<(&'static str, AgentState)> {
    vec![
        ("setstart", operator_at(0.0, 0.0, 0.0)),
        ("addcp", operator_at(4_000.0, 0.0, 90.0)),
        ("setend", operator_at(4_000.0, 3_000.0, 90.0)),
        ("testbot", operator_at(0.0, 0.0, 0.0)),
        ("addcs", operator_at(0.0, 0.0, 0.0)),
        ("solve", operator_at(0.0, 0.0, 0.0)),
    ]
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Progress {
    measured: usize,
    windows: usize,
    last: Option<Candidate>,
}

impl SolveObserver for Progress {
    fn on_candidate_measured(&mut self, _tick: Tick, _candidate: &Candidate, _best: &Candidate) {
        self.measured += 1;
    }

    fn on_window_committed(&mut self, _tick: Tick, window: usize, winner: &Candidate) {
        self.windows = window + 1;
        self.last = Some(*winner);
        if window % 10 == 0 {
            println!("  window {window:>4}: {winner}");
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) if path != "-" => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            log::info!("loaded config from {path}");
            serde_json::from_str::<BotConfig>(&text).with_context(|| format!("parsing {path}"))?
        }
        _ => BotConfig::default(),
    };
    let solve_secs = match args.next() {
        Some(s) => s.parse::<u64>().with_context(|| format!("solve_seconds {s:?}"))?,
        None => DEFAULT_SOLVE_SECS,
    };
    let tick_rate = config.movement.tick_rate;

    println!("=== flatground — strafebot ===");
    println!("Tick rate: {tick_rate}  |  Solve time: {solve_secs} s");
    println!("Config: {}", serde_json::to_string(&config)?);
    println!();

    let mut sim = FlatGround::new(tick_rate);
    let mut bot = StrafeBot::new(config.clone());

    // 1. Operator session.
    for (line, operator) in script() {
        let command = OperatorCommand::parse_with(line, &config.canned_start)?;
        bot.execute(&command, &operator, &mut sim)
            .with_context(|| format!("operator command {line:?}"))?;
    }
    let names: Vec<String> = bot.route().waypoints().map(|w| w.to_string()).collect();
    println!("Route: {}", names.join(" → "));

    // 2. Solve.
    let mut progress = Progress::default();
    let solve_ticks = solve_secs * u64::from(tick_rate.0);
    for _ in 0..solve_ticks {
        if !bot.run_tick(&mut sim, &mut progress) {
            anyhow::bail!("host dropped the agent while solving");
        }
    }
    bot.stop_solve();
    println!();
    println!(
        "Solved {} windows ({} candidates measured), history {} ticks",
        progress.windows,
        progress.measured,
        bot.session().history().len()
    );
    if let Some(last) = progress.last {
        println!("Last winner: {last}");
    }

    // 3. Playback.
    let operator = sim.state();
    bot.execute(&OperatorCommand::Play, &operator, &mut sim)?;
    let playback_ticks = bot.session().history().len() as u64 + PLAYBACK_TAIL_TICKS;
    let mut top_speed: f64 = 0.0;
    for _ in 0..playback_ticks {
        if !bot.run_tick(&mut sim, &mut sb_solver::NoopObserver) {
            anyhow::bail!("host dropped the agent during playback");
        }
        top_speed = top_speed.max(sim.state().speed_2d());
    }
    bot.stop_playback();

    let end = sim.state();
    println!();
    println!("Playback: {playback_ticks} ticks, top speed {top_speed:.1} u/s");
    println!(
        "Final position {} ({:.1} u from end), reward {:.2}",
        end.position,
        end.position.distance(bot.route().end().position),
        bot.route().reward(end.position, end.velocity)
    );
    println!("Host ticks: {}", sim.ticks);
    Ok(())
}
