//! `ev-graph` — road network and routing core of the `rust_ev` monitor.
//!
//! # Data flow per tick
//!
//! ```text
//! conditions::refresh_all   — redraw every record's traffic condition
//!         ↓
//! DijkstraEngine            — distances + predecessors from the origin
//!         ↓
//! report::extract           — one StationStatus per flagged vertex
//! ```
//!
//! The network topology is frozen once [`RoadNetworkBuilder::build`] runs;
//! only per-record traffic conditions mutate afterwards.

pub mod conditions;
pub mod engine;
pub mod error;
pub mod loader;
pub mod network;
pub mod report;
pub mod stations;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use conditions::refresh_all;
pub use engine::{DijkstraEngine, PathEngine, PathSolution, UNREACHABLE};
pub use error::{GraphError, GraphResult, RouteError, RouteResult};
pub use loader::{load_topology_csv, load_topology_reader};
pub use network::{RoadAttrs, RoadNetwork, RoadNetworkBuilder};
pub use report::{extract, StationStatus};
pub use stations::StationSet;
