//! `ev-core` — foundational types for the `rust_ev` reachability monitor.
//!
//! This crate is a dependency of every other `ev-*` crate.  It intentionally
//! has no `ev-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `NodeId`, `RoadId`, `RecordId`                        |
//! | [`time`]    | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]     | `SimRng` (seeded, deterministic)                      |
//! | [`traffic`] | `TrafficCondition`, `TrafficSampler` + impls          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod ids;
pub mod rng;
pub mod time;
pub mod traffic;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{NodeId, RecordId, RoadId};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
pub use traffic::{SequenceSampler, TrafficCondition, TrafficSampler, UniformSampler};
