//! Shortest-path engine.
//!
//! # Pluggability
//!
//! `ev-sim` calls the engine via the [`PathEngine`] trait so applications
//! can swap in their own implementation without touching the tick loop.
//! [`DijkstraEngine`] is the only one shipped.
//!
//! # Closure semantics
//!
//! Closed roads are not simply ignored during relaxation: when the engine
//! scans a closed record out of a finalized vertex `u`, it resets the
//! neighbour's tentative distance to [`UNREACHABLE`] outright — even if a
//! cheaper distance over an open road was already recorded.  A neighbour is
//! only safe from this reset once it has itself been finalized.  The
//! neighbour's predecessor link is left as-is; a later successful
//! relaxation overwrites it, and report extraction never follows
//! predecessors of unreachable vertices.
//!
//! A stricter engine would treat closed records as absent from relaxation
//! altogether; this one keeps the reset to stay result-compatible with the
//! monitor it replaces (see DESIGN.md).

use ev_core::NodeId;

use crate::network::RoadNetwork;
use crate::{RouteError, RouteResult};

/// Distance sentinel for vertices no open path reaches.
pub const UNREACHABLE: u32 = u32::MAX;

// ── PathSolution ──────────────────────────────────────────────────────────────

/// Single-source shortest-path output: per-vertex distance and predecessor.
///
/// Recomputed from scratch every tick; never carried across ticks.
#[derive(Debug, Clone)]
pub struct PathSolution {
    /// Best known cost to reach each vertex; [`UNREACHABLE`] if none.
    pub dist: Vec<u32>,
    /// Vertex each one was reached from; `NodeId::INVALID` for the source
    /// and for unreached vertices.
    pub pred: Vec<NodeId>,
}

impl PathSolution {
    pub fn vertex_count(&self) -> usize {
        self.dist.len()
    }

    /// Finite distance to `node`, or `None` if unreachable.
    pub fn distance(&self, node: NodeId) -> Option<u32> {
        match self.dist[node.index()] {
            UNREACHABLE => None,
            d => Some(d),
        }
    }

    #[inline]
    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.dist[node.index()] != UNREACHABLE
    }
}

// ── PathEngine trait ──────────────────────────────────────────────────────────

/// Pluggable single-source shortest-path engine.
pub trait PathEngine {
    /// Compute distances and predecessors from `source` to every vertex.
    ///
    /// Must fail fast on an out-of-bounds `source`; for any valid network
    /// the computation itself cannot fail — vertices without an open path
    /// simply come back [`UNREACHABLE`].
    fn shortest_paths(&self, network: &RoadNetwork, source: NodeId) -> RouteResult<PathSolution>;
}

// ── DijkstraEngine ────────────────────────────────────────────────────────────

/// Classic Dijkstra over non-negative weights with linear-scan minimum
/// selection, O(V²).
///
/// The networks this monitor watches are tiny (tens of vertices), so the
/// scan beats a heap on constant factors and keeps the tie-break rule
/// trivially visible: among equally-near unfinalized vertices the lowest
/// index is finalized first.
pub struct DijkstraEngine;

impl PathEngine for DijkstraEngine {
    fn shortest_paths(&self, network: &RoadNetwork, source: NodeId) -> RouteResult<PathSolution> {
        let n = network.vertex_count();
        if source.index() >= n {
            return Err(RouteError::SourceOutOfBounds { source, vertex_count: n });
        }

        let mut dist = vec![UNREACHABLE; n];
        let mut pred = vec![NodeId::INVALID; n];
        let mut finalized = vec![false; n];
        dist[source.index()] = 0;

        // V − 1 rounds: each finalizes one vertex.  Once only unreachable
        // vertices remain, the remaining rounds finalize them with no
        // relaxation effect.
        for _ in 0..n.saturating_sub(1) {
            // min_by_key keeps the first (lowest-index) minimum on ties.
            let Some(u) = (0..n).filter(|&v| !finalized[v]).min_by_key(|&v| dist[v]) else {
                break;
            };
            finalized[u] = true;

            if dist[u] == UNREACHABLE {
                continue;
            }

            for rec in network.records(NodeId(u as u32)) {
                let v = network.dest(rec).index();
                if finalized[v] {
                    continue;
                }
                if network.is_closed(rec) {
                    // Unconditional reset — see module docs on closure
                    // semantics.  Predecessor deliberately untouched.
                    dist[v] = UNREACHABLE;
                } else {
                    let candidate = dist[u].saturating_add(network.weight(rec));
                    if candidate < dist[v] {
                        dist[v] = candidate;
                        pred[v] = NodeId(u as u32);
                    }
                }
            }
        }

        Ok(PathSolution { dist, pred })
    }
}
