//! Station report extraction.
//!
//! Turns one tick's [`PathSolution`] into an ordered list of per-station
//! results for the renderer.  Unreachability is a first-class outcome here;
//! the only error this module can produce is an internal-consistency
//! failure of the predecessor chain, which aborts the tick.

use ev_core::{NodeId, TrafficCondition};

use crate::engine::{PathSolution, UNREACHABLE};
use crate::network::RoadNetwork;
use crate::stations::StationSet;
use crate::{RouteError, RouteResult};

// ── StationStatus ─────────────────────────────────────────────────────────────

/// Result for one flagged station on one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StationStatus {
    /// No open path from the origin reaches this station.
    Unreachable { station: NodeId },

    /// The station is reachable.
    Reached {
        station:  NodeId,
        /// Total path cost from the origin.
        distance: u32,
        /// Vertex sequence from the origin to the station, inclusive.
        path: Vec<NodeId>,
        /// Condition of the first record stored for the station vertex — an
        /// arbitrary representative of "traffic near the destination", not
        /// the condition of the road the path actually arrives on.  `None`
        /// only when the station has no incident roads at all (an isolated
        /// origin reporting on itself).
        traffic: Option<TrafficCondition>,
    },
}

impl StationStatus {
    pub fn station(&self) -> NodeId {
        match *self {
            StationStatus::Unreachable { station } => station,
            StationStatus::Reached { station, .. } => station,
        }
    }
}

// ── Extraction ────────────────────────────────────────────────────────────────

/// Produce one [`StationStatus`] per flagged vertex, in ascending vertex
/// order.
///
/// Fails only with [`RouteError::CorruptPredecessorChain`] when a reachable
/// station's predecessor links do not lead back to `source` within
/// `vertex_count` steps — a violated engine invariant, never a normal
/// outcome.
pub fn extract(
    network:  &RoadNetwork,
    stations: &StationSet,
    solution: &PathSolution,
    source:   NodeId,
) -> RouteResult<Vec<StationStatus>> {
    debug_assert_eq!(solution.vertex_count(), network.vertex_count());

    let mut out = Vec::with_capacity(stations.count());
    for station in stations.iter() {
        if solution.dist[station.index()] == UNREACHABLE {
            out.push(StationStatus::Unreachable { station });
            continue;
        }

        let path = walk_predecessors(solution, station, source)?;
        let traffic = network.records(station).next().map(|rec| network.traffic(rec));
        out.push(StationStatus::Reached {
            station,
            distance: solution.dist[station.index()],
            path,
            traffic,
        });
    }
    Ok(out)
}

/// Follow predecessor links from `station` back to `source`, then reverse.
///
/// Bounded by `vertex_count` steps: a longer chain (or a dangling
/// predecessor) can only mean the solution is corrupt.
fn walk_predecessors(
    solution: &PathSolution,
    station:  NodeId,
    source:   NodeId,
) -> RouteResult<Vec<NodeId>> {
    let mut path = vec![station];
    let mut cur = station;
    let mut steps = 0usize;

    while cur != source {
        steps += 1;
        if steps > solution.vertex_count() {
            return Err(RouteError::CorruptPredecessorChain { station });
        }
        let prev = solution.pred[cur.index()];
        if prev == NodeId::INVALID {
            return Err(RouteError::CorruptPredecessorChain { station });
        }
        path.push(prev);
        cur = prev;
    }

    path.reverse();
    Ok(path)
}
