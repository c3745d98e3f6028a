//! Road network representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for directed road
//! records.  Given a `NodeId n`, its incident records occupy the slice:
//!
//! ```text
//! rec_dest[ rec_start[n] .. rec_start[n+1] ]
//! ```
//!
//! Record arrays (`rec_dest`, `rec_road`, `rec_traffic`) are sorted by
//! origin vertex and indexed by `RecordId`, so iterating a vertex's records
//! is a contiguous memory scan — ideal for the engine's relaxation loop.
//!
//! # Mirrored records
//!
//! Every physical road between `a` and `b` is stored once as a
//! [`RoadAttrs`] (weight + closure flag) and referenced by **two** directed
//! records, `a → b` and `b → a`.  Weight and closure therefore cannot
//! diverge between the two directions.  Traffic conditions are per-record
//! cells: both directions start from the same draw at construction, but
//! each refresh re-draws them independently and they routinely diverge.

use ev_core::{NodeId, RecordId, RoadId, TrafficCondition, TrafficSampler};

use crate::{GraphError, GraphResult};

// ── RoadAttrs ─────────────────────────────────────────────────────────────────

/// Immutable attributes of one physical road, shared by both of its
/// directed records.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoadAttrs {
    /// Travel cost (distance or time units).
    pub weight: u32,
    /// `true` if the road is impassable in both directions.
    pub closed: bool,
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Undirected multigraph of roads in CSR record format.
///
/// Topology is fixed after [`RoadNetworkBuilder::build`]; the only mutable
/// state is each record's traffic condition.  All index fields are `pub`
/// for direct access on hot paths; do not construct directly.
#[derive(Debug)]
pub struct RoadNetwork {
    // ── CSR record adjacency ──────────────────────────────────────────────
    /// CSR row pointer.  Incident records of vertex `n` are at RecordIds
    /// `rec_start[n] .. rec_start[n+1]`.  Length = `vertex_count + 1`.
    pub rec_start: Vec<u32>,

    // ── Record data (indexed by RecordId) ─────────────────────────────────
    /// Vertex reached by traversing each record.
    pub rec_dest: Vec<NodeId>,

    /// Physical road each record belongs to.  Both directions of a road
    /// reference the same `RoadId`.
    pub rec_road: Vec<RoadId>,

    /// Per-record traffic condition — the only post-build mutable state.
    pub rec_traffic: Vec<TrafficCondition>,

    // ── Road data (indexed by RoadId) ─────────────────────────────────────
    /// Shared immutable weight/closure of each physical road.
    pub roads: Vec<RoadAttrs>,
}

impl RoadNetwork {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.rec_start.len() - 1
    }

    /// Number of directed records (twice the physical road count).
    pub fn record_count(&self) -> usize {
        self.rec_dest.len()
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.vertex_count()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `RecordId`s of all records incident to `vertex`.
    ///
    /// This is a contiguous index range — no heap allocation.  Records
    /// appear in insertion order within a vertex, but callers must not rely
    /// on any particular ordering.
    #[inline]
    pub fn records(&self, vertex: NodeId) -> impl Iterator<Item = RecordId> + '_ {
        let start = self.rec_start[vertex.index()] as usize;
        let end   = self.rec_start[vertex.index() + 1] as usize;
        (start..end).map(|i| RecordId(i as u32))
    }

    /// Number of records incident to `vertex`.
    #[inline]
    pub fn degree(&self, vertex: NodeId) -> usize {
        let start = self.rec_start[vertex.index()] as usize;
        let end   = self.rec_start[vertex.index() + 1] as usize;
        end - start
    }

    // ── Record accessors ──────────────────────────────────────────────────

    /// Vertex reached by traversing `rec`.
    #[inline]
    pub fn dest(&self, rec: RecordId) -> NodeId {
        self.rec_dest[rec.index()]
    }

    /// Physical road `rec` belongs to.
    #[inline]
    pub fn road(&self, rec: RecordId) -> RoadId {
        self.rec_road[rec.index()]
    }

    /// Travel cost of `rec` (shared with its mirror).
    #[inline]
    pub fn weight(&self, rec: RecordId) -> u32 {
        self.roads[self.rec_road[rec.index()].index()].weight
    }

    /// `true` if the road `rec` belongs to is closed (shared with its mirror).
    #[inline]
    pub fn is_closed(&self, rec: RecordId) -> bool {
        self.roads[self.rec_road[rec.index()].index()].closed
    }

    /// Current traffic condition of `rec` (independent of its mirror).
    #[inline]
    pub fn traffic(&self, rec: RecordId) -> TrafficCondition {
        self.rec_traffic[rec.index()]
    }

    /// Overwrite the traffic condition of `rec` only.
    #[inline]
    pub fn set_traffic(&mut self, rec: RecordId, condition: TrafficCondition) {
        self.rec_traffic[rec.index()] = condition;
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] incrementally, then call [`build`](Self::build).
///
/// The vertex count is fixed up front — vertices carry no attributes beyond
/// their index, so there is nothing to add per vertex.  Roads may arrive in
/// any order; `build()` sorts records by origin vertex and constructs the
/// CSR arrays.
///
/// # Example
///
/// ```
/// use ev_core::{NodeId, SequenceSampler, TrafficCondition};
/// use ev_graph::RoadNetworkBuilder;
///
/// let mut sampler = SequenceSampler::constant(TrafficCondition::Low);
/// let mut b = RoadNetworkBuilder::new(3);
/// b.add_road(NodeId(0), NodeId(1), 10, false, &mut sampler).unwrap();
/// b.add_road(NodeId(1), NodeId(2), 20, true, &mut sampler).unwrap();
/// let net = b.build();
/// assert_eq!(net.vertex_count(), 3);
/// assert_eq!(net.record_count(), 4); // two records per road
/// ```
pub struct RoadNetworkBuilder {
    vertex_count: usize,
    roads:        Vec<RoadAttrs>,
    raw_records:  Vec<RawRecord>,
}

struct RawRecord {
    from:    NodeId,
    to:      NodeId,
    road:    RoadId,
    traffic: TrafficCondition,
}

impl RoadNetworkBuilder {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            roads:       Vec::new(),
            raw_records: Vec::new(),
        }
    }

    /// Pre-allocate for the expected number of physical roads.
    pub fn with_capacity(vertex_count: usize, roads: usize) -> Self {
        Self {
            vertex_count,
            roads:       Vec::with_capacity(roads),
            raw_records: Vec::with_capacity(roads * 2),
        }
    }

    /// Add a physical road between `a` and `b`.
    ///
    /// Creates the mirrored record pair `a → b` / `b → a` sharing one
    /// [`RoadAttrs`].  One traffic condition is drawn from `sampler` and
    /// assigned to both records.
    ///
    /// Fails with [`GraphError::InvalidVertex`] if either endpoint is out of
    /// bounds; on failure nothing is added, so the mirror invariant can
    /// never be half-applied.
    pub fn add_road<S: TrafficSampler>(
        &mut self,
        a:       NodeId,
        b:       NodeId,
        weight:  u32,
        closed:  bool,
        sampler: &mut S,
    ) -> GraphResult<()> {
        for node in [a, b] {
            if node.index() >= self.vertex_count {
                return Err(GraphError::InvalidVertex {
                    node,
                    vertex_count: self.vertex_count,
                });
            }
        }

        let road = RoadId(self.roads.len() as u32);
        self.roads.push(RoadAttrs { weight, closed });

        let traffic = sampler.draw();
        self.raw_records.push(RawRecord { from: a, to: b, road, traffic });
        self.raw_records.push(RawRecord { from: b, to: a, road, traffic });
        Ok(())
    }

    pub fn vertex_count(&self) -> usize { self.vertex_count }
    pub fn road_count(&self) -> usize { self.roads.len() }

    /// Consume the builder and produce a [`RoadNetwork`].
    ///
    /// Time complexity: O(R log R) for the record sort, R = record count.
    pub fn build(self) -> RoadNetwork {
        let vertex_count = self.vertex_count;
        let record_count = self.raw_records.len();

        // Stable sort: records keep insertion order within each vertex.
        let mut raw = self.raw_records;
        raw.sort_by_key(|r| r.from.0);

        let rec_dest:    Vec<NodeId>           = raw.iter().map(|r| r.to).collect();
        let rec_road:    Vec<RoadId>           = raw.iter().map(|r| r.road).collect();
        let rec_traffic: Vec<TrafficCondition> = raw.iter().map(|r| r.traffic).collect();

        // Build CSR row pointer (rec_start).
        let mut rec_start = vec![0u32; vertex_count + 1];
        for r in &raw {
            rec_start[r.from.index() + 1] += 1;
        }
        for i in 1..=vertex_count {
            rec_start[i] += rec_start[i - 1];
        }
        debug_assert_eq!(rec_start[vertex_count] as usize, record_count);

        RoadNetwork {
            rec_start,
            rec_dest,
            rec_road,
            rec_traffic,
            roads: self.roads,
        }
    }
}
