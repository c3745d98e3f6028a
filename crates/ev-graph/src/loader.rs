//! CSV topology loader.
//!
//! # CSV format
//!
//! One row per physical road:
//!
//! ```csv
//! a,b,weight,closed
//! 0,12,60,false
//! 1,9,350,false
//! 7,14,50,true
//! ```
//!
//! `weight` is parsed signed so a negative value in the file is rejected as
//! [`GraphError::InvalidWeight`] rather than silently wrapping; in-bounds
//! values fit `u32`.  `closed` accepts `true`/`false` (serde bool).
//!
//! The loader draws the initial traffic condition for each road from the
//! supplied sampler, exactly as manual [`RoadNetworkBuilder::add_road`]
//! calls would.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ev_core::{NodeId, TrafficSampler};

use crate::network::{RoadNetwork, RoadNetworkBuilder};
use crate::{GraphError, GraphResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RoadRow {
    a:      u32,
    b:      u32,
    weight: i64,
    closed: bool,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a road network from a CSV file.
pub fn load_topology_csv<S: TrafficSampler>(
    path:         &Path,
    vertex_count: usize,
    sampler:      &mut S,
) -> GraphResult<RoadNetwork> {
    let file = std::fs::File::open(path).map_err(GraphError::Io)?;
    load_topology_reader(file, vertex_count, sampler)
}

/// Like [`load_topology_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded topologies.
pub fn load_topology_reader<R: Read, S: TrafficSampler>(
    reader:       R,
    vertex_count: usize,
    sampler:      &mut S,
) -> GraphResult<RoadNetwork> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = RoadNetworkBuilder::new(vertex_count);

    for result in csv_reader.deserialize::<RoadRow>() {
        let row = result.map_err(|e| GraphError::Parse(e.to_string()))?;
        let weight = u32::try_from(row.weight)
            .map_err(|_| GraphError::InvalidWeight(row.weight))?;
        builder.add_road(NodeId(row.a), NodeId(row.b), weight, row.closed, sampler)?;
    }

    Ok(builder.build())
}
