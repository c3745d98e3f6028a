//! Charging-station flags.
//!
//! Which vertices host a station is external to the network itself: the
//! graph knows nothing about stations, and the flag set never changes after
//! construction.

use ev_core::NodeId;

use crate::{GraphError, GraphResult};

/// One boolean flag per vertex marking destination vertices of interest.
#[derive(Clone, Debug)]
pub struct StationSet {
    flags: Vec<bool>,
}

impl StationSet {
    /// Build from a raw per-vertex flag vector.
    pub fn from_flags(flags: Vec<bool>) -> Self {
        Self { flags }
    }

    /// Build from an explicit station list over `vertex_count` vertices.
    ///
    /// Fails with [`GraphError::InvalidVertex`] on the first out-of-bounds
    /// entry; nothing is retained on failure.
    pub fn from_nodes(vertex_count: usize, stations: &[NodeId]) -> GraphResult<Self> {
        let mut flags = vec![false; vertex_count];
        for &node in stations {
            if node.index() >= vertex_count {
                return Err(GraphError::InvalidVertex { node, vertex_count });
            }
            flags[node.index()] = true;
        }
        Ok(Self { flags })
    }

    /// Number of vertices the flag vector covers.
    pub fn vertex_count(&self) -> usize {
        self.flags.len()
    }

    /// Number of flagged stations.
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    #[inline]
    pub fn is_station(&self, node: NodeId) -> bool {
        self.flags.get(node.index()).copied().unwrap_or(false)
    }

    /// Flagged vertices in ascending index order — the order station
    /// reports are emitted in.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter(|&(_, &f)| f)
            .map(|(i, _)| NodeId(i as u32))
    }
}
