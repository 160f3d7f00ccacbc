//! `sb-solver` — online, window-by-window search for good movement input.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`config`]    | `SolverConfig` — window length and turn-rate grid          |
//! | [`sweep`]     | `Candidate`, `Sweep` — coordinate-wise hill-climbing       |
//! | [`session`]   | `Session` — per-tick state machine driving a `Simulation`  |
//! | [`mode`]      | `Mode` — idle / recording / solving / playing              |
//! | [`objective`] | `Objective` trait (implemented for `Route`)                |
//! | [`observer`]  | `SolveObserver` hooks, `NoopObserver`                      |
//! | [`error`]     | `SolverError`, `SolverResult<T>`                           |
//!
//! # Solving a window
//!
//! ```text
//! tick 0      restore last confirmed snapshot, issue candidate c
//! tick 1..24  issue c (queued)
//! tick 25     score state → Sweep; restore, issue next candidate …
//! …           sweep exhausted (or terminated early)
//! commit      rewrite last entry's action, restore, issue winner ×25
//!             while recording each tick; then open the next window
//! ```
//!
//! The host advances physics between calls, so every candidate is measured
//! by rewinding to the same snapshot and letting the host run it for a full
//! window.

pub mod config;
pub mod error;
pub mod mode;
pub mod objective;
pub mod observer;
pub mod session;
pub mod sweep;


pub use config::SolverConfig;
pub use error::{SolverError, SolverResult};
pub use mode::Mode;
pub use objective::Objective;
pub use observer::{NoopObserver, SolveObserver};
pub use session::Session;
pub use sweep::{Candidate, Sweep, SweepStep};
