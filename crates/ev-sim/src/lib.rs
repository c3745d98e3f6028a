//! `ev-sim` — tick loop orchestrator for the rust_ev monitor.
//!
//! # Three-phase tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Refresh  — redraw every road record's traffic condition
//!   ② Compute  — single-source shortest paths from the fixed origin
//!   ③ Report   — extract per-station statuses; hand them to the observer
//! ```
//!
//! The three phases run strictly sequentially; the core exposes no timers
//! or callbacks beyond the observer, and never sleeps — pacing between
//! ticks belongs to the driving binary.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ev_core::{NodeId, SimConfig, UniformSampler};
//! use ev_graph::DijkstraEngine;
//! use ev_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(config, network, stations, NodeId(5),
//!                               UniformSampler::new(config.seed), DijkstraEngine)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
