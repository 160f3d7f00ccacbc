//! `sb-core` — foundational types for the `strafebot` workspace.
//!
//! This crate is a dependency of every other `sb-*` crate.  It has no `sb-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`geo`]    | `Vec3`, line / segment projection                            |
//! | [`yaw`]    | yaw extraction, wrapping, differences, optimal strafe angle  |
//! | [`ids`]    | `GroundRef` (host ground-entity handle)                      |
//! | [`time`]   | `Tick`, `TickRate`                                           |
//! | [`error`]  | `CoreError`, `CoreResult`                                    |
//!
//! All angles exchanged between crates are in **degrees** except the raw
//! output of [`yaw::optimal_strafe_angle`], which is radians like the
//! `acos` it comes from.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod geo;
pub mod ids;
pub mod time;
pub mod yaw;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{Vec3, closest_point_on_segment_clamped, line_closest_point};
pub use ids::GroundRef;
pub use time::{Tick, TickRate};
pub use yaw::{optimal_strafe_angle, wrap_yaw, yaw_difference, yaw_of};
