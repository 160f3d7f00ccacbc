//! `sb-agent` — the boundary between the optimizer and the host simulation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`state`]     | `AgentState` — read-only per-tick snapshot of the agent    |
//! | [`command`]   | `MoveCommand` — the one input injected per tick            |
//! | [`simulation`]| `Simulation` trait — everything the host must provide      |
//!
//! The optimizer never steps physics itself.  Each tick it reads
//! [`Simulation::state`], optionally rewinds with [`Simulation::restore`],
//! and hands exactly one [`MoveCommand`] to [`Simulation::issue_command`].

pub mod command;
pub mod simulation;
pub mod state;


pub use command::MoveCommand;
pub use simulation::Simulation;
pub use state::AgentState;
