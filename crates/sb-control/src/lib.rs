//! `sb-control` — what the bot can do each tick, and how that becomes input.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`action`]  | `ActionKind`, `Action` — the discrete action space           |
//! | [`config`]  | `MoveConfig` — movement constants (tick rate, speeds, angles)|
//! | [`adapter`] | `plan_move`, `MoveIntent` — action + state → `MoveCommand`   |
//!
//! # Movement model
//!
//! On the ground every action keeps accelerating: pure turns are pressed as
//! their diagonal and only rotate the view.  In the air the diagonals hold
//! the acceleration-maximising strafe angle relative to the current
//! velocity, and the pure turns rotate the view at a fixed rate after
//! snapping to the velocity heading.  See [`adapter`] for the details.

pub mod action;
pub mod adapter;
pub mod config;

#[cfg(test)]
mod tests;

pub use action::{Action, ActionKind};
pub use adapter::{MoveIntent, plan_move};
pub use config::MoveConfig;
