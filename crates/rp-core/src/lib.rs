//! `rp-core` — foundational types for the `rproute` planner.
//!
//! This crate is a dependency of every other `rp-*` crate.  It has no `rp-*`
//! dependencies and few external ones (`rand`, `thiserror`, `chrono`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `NodeId`                                               |
//! | [`geo`]      | `GeoPoint`, haversine distance in kilometres           |
//! | [`time`]     | `HourOfDay`, `Clock`, `SystemClock`, `FixedClock`      |
//! | [`rng`]      | `PlannerRng`                                           |
//! | [`config`]   | `PlannerConfig`                                        |
//! | [`error`]    | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to public types.            |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PlannerConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{GeoPoint, distance_km};
pub use ids::NodeId;
pub use rng::PlannerRng;
pub use time::{Clock, FixedClock, HourOfDay, SystemClock};
