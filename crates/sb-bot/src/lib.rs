//! `sb-bot` — the operator-facing side of strafebot.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`bot`]     | `StrafeBot` — owns one route and one session                  |
//! | [`command`] | `OperatorCommand` — text command parsing                      |
//! | [`config`]  | `BotConfig`, `CannedStart`                                    |
//! | [`error`]   | `BotError`, `BotResult<T>`                                    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sb_bot::{BotConfig, OperatorCommand, StrafeBot};
//! use sb_solver::NoopObserver;
//!
//! let mut bot = StrafeBot::attach(BotConfig::default(), route, &mut sim);
//! bot.execute(&OperatorCommand::parse("addcs")?, &sim.state(), &mut sim)?;
//! bot.execute(&OperatorCommand::parse("solve")?, &sim.state(), &mut sim)?;
//!
//! // In the host's per-tick callback:
//! if !bot.run_tick(&mut sim, &mut NoopObserver) {
//!     // host dropped the agent
//! }
//! ```

pub mod bot;
pub mod command;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use bot::StrafeBot;
pub use command::OperatorCommand;
pub use config::{BotConfig, CannedStart};
pub use error::{BotError, BotResult};
