//! `sb-route` — the route an agent is optimised along, and its reward.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`waypoint`] | `Waypoint` — named, sampled position + heading            |
//! | [`route`]    | `Route` — start, checkpoint stack, end; progress queries  |
//! | [`reward`]   | `Route::reward` and its constants                         |
//! | [`error`]    | `RouteError`, `RouteResult<T>`                            |
//!
//! # Progress model
//!
//! A route is the polyline start → checkpoints → end.  The agent's *target*
//! is the first waypoint it has not yet passed (see
//! [`Route::remaining_points`]); reward pulls the agent towards the segment
//! leading to that target and rewards speed along it.  Once only `end`
//! remains the reward switches to a large constant plus inverse distance, so
//! finishing always beats loitering near the last checkpoint.

pub mod error;
pub mod reward;
pub mod route;
pub mod waypoint;


pub use error::{RouteError, RouteResult};
pub use reward::{END_REWARD_BASE, REWARD_DISTANCE_FLOOR};
pub use route::Route;
pub use waypoint::Waypoint;
