//! Operator text commands.
//!
//! | Verb         | Command                                |
//! |--------------|----------------------------------------|
//! | `testbot`    | `Spawn` — (re)start at the route start |
//! | `resetbot`   | `Reset`                                |
//! | `solve`      | `Solve`                                |
//! | `stopsolve`  | `StopSolve`                            |
//! | `play`       | `Play`                                 |
//! | `stopplay`   | `StopPlay`                             |
//! | `record`     | `Record`                               |
//! | `stoprecord` | `StopRecord`                           |
//! | `setstart`   | `SetStart`                             |
//! | `setend`     | `SetEnd`                               |
//! | `addcp`      | `AddCheckpoint`                        |
//! | `removecp`   | `RemoveCheckpoint`                     |
//! | `addcs [walk] [strafe] [angle]` | `AddCannedStart`    |
//!
//! A leading `!` on the verb is accepted.  `addcs` tick counts above
//! [`CannedStart::MAX_PHASE_TICKS`] fall back to the default.

use std::str::FromStr;

use crate::{BotError, BotResult, CannedStart};

#[derive(Clone, Debug, PartialEq)]
pub enum OperatorCommand {
    Spawn,
    Reset,
    Solve,
    StopSolve,
    Play,
    StopPlay,
    Record,
    StopRecord,
    SetStart,
    SetEnd,
    AddCheckpoint,
    RemoveCheckpoint,
    AddCannedStart(CannedStart),
}

impl OperatorCommand {
    /// Parse with the stock `addcs` defaults.
    pub fn parse(line: &str) -> BotResult<Self> {
        Self::parse_with(line, &CannedStart::default())
    }

    /// Parse one command line.  `addcs` arguments that are missing or
    /// malformed take their value from `defaults`.
    pub fn parse_with(line: &str, defaults: &CannedStart) -> BotResult<Self> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next().unwrap_or_default();
        let verb = verb.strip_prefix('!').unwrap_or(verb);

        let command = match verb.to_ascii_lowercase().as_str() {
            "testbot"    => Self::Spawn,
            "resetbot"   => Self::Reset,
            "solve"      => Self::Solve,
            "stopsolve"  => Self::StopSolve,
            "play"       => Self::Play,
            "stopplay"   => Self::StopPlay,
            "record"     => Self::Record,
            "stoprecord" => Self::StopRecord,
            "setstart"   => Self::SetStart,
            "setend"     => Self::SetEnd,
            "addcp"      => Self::AddCheckpoint,
            "removecp"   => Self::RemoveCheckpoint,
            "addcs" => Self::AddCannedStart(CannedStart {
                walk_ticks:   ticks_or_default(tokens.next(), "walk_ticks", defaults.walk_ticks),
                strafe_ticks: ticks_or_default(tokens.next(), "strafe_ticks", defaults.strafe_ticks),
                strafe_angle: finite_or_default(
                    arg_or_default(tokens.next(), "strafe_angle", defaults.strafe_angle),
                    defaults.strafe_angle,
                ),
            }),
            _ => return Err(BotError::UnknownCommand(verb.to_owned())),
        };
        Ok(command)
    }
}

impl FromStr for OperatorCommand {
    type Err = BotError;

    fn from_str(s: &str) -> BotResult<Self> {
        Self::parse(s)
    }
}

fn parse_arg<T: FromStr>(token: &str, name: &'static str) -> BotResult<T> {
    token
        .parse()
        .map_err(|_| BotError::MalformedOperatorInput { name, arg: token.to_owned() })
}

fn arg_or_default<T: FromStr + Copy>(token: Option<&str>, name: &'static str, default: T) -> T {
    let Some(token) = token else {
        return default;
    };
    parse_arg(token, name).unwrap_or_else(|e| {
        log::warn!("{e}; using the default");
        default
    })
}

fn ticks_or_default(token: Option<&str>, name: &'static str, default: u32) -> u32 {
    let ticks = arg_or_default(token, name, default);
    if ticks > CannedStart::MAX_PHASE_TICKS {
        log::warn!("{name} {ticks} exceeds {}; using the default", CannedStart::MAX_PHASE_TICKS);
        return default;
    }
    ticks
}

fn finite_or_default(value: f64, default: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        log::warn!("strafe_angle {value} is not finite; using the default");
        default
    }
}
