//! `sb-history` — what the bot did, and what it is about to do.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`history`] | `HistoryEntry`, `History` — append-only (snapshot, action) log |
//! | [`queue`]   | `ActionQueue` — FIFO of actions to issue on upcoming ticks     |
//! | [`error`]   | `HistoryError`, `HistoryResult<T>`                            |
//!
//! # Replay model
//!
//! Each entry pairs the agent snapshot taken at the *start* of a tick with
//! the action issued from it.  Restoring entry `i` and reissuing actions
//! `i..` reproduces the recorded run, provided the host is deterministic.
//! The last entry is always the most recently confirmed state, which is
//! where every candidate measurement rewinds to.

pub mod error;
pub mod history;
pub mod queue;


pub use error::{HistoryError, HistoryResult};
pub use history::{History, HistoryEntry};
pub use queue::ActionQueue;
