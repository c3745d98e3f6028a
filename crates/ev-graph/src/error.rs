//! Graph- and routing-subsystem error types.
//!
//! Station unreachability is deliberately NOT represented here: an
//! unreachable station is an expected outcome carried by
//! [`StationStatus::Unreachable`](crate::StationStatus), never an error.

use thiserror::Error;

use ev_core::NodeId;

/// Errors produced while constructing or loading a road network.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex {node} out of bounds for network of {vertex_count} vertices")]
    InvalidVertex { node: NodeId, vertex_count: usize },

    #[error("invalid road weight {0}: must be non-negative and fit u32")]
    InvalidWeight(i64),

    #[error("topology parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Errors produced by the shortest-path engine and report extraction.
///
/// `Display` and `Error` are implemented by hand rather than derived:
/// `thiserror` would treat the `source` field of [`SourceOutOfBounds`]
/// (the source *vertex*) as an error source, which `NodeId` is not.
#[derive(Debug)]
pub enum RouteError {
    SourceOutOfBounds { source: NodeId, vertex_count: usize },

    /// The predecessor chain for a reachable station failed to terminate at
    /// the source within `vertex_count` steps.  This indicates a violated
    /// engine invariant, not a user-facing condition.
    CorruptPredecessorChain { station: NodeId },
}

impl std::fmt::Display for RouteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteError::SourceOutOfBounds { source, vertex_count } => write!(
                f,
                "source vertex {source} out of bounds for network of {vertex_count} vertices"
            ),
            RouteError::CorruptPredecessorChain { station } => write!(
                f,
                "corrupt predecessor chain while reconstructing path to station {station}"
            ),
        }
    }
}

impl std::error::Error for RouteError {}

pub type RouteResult<T> = Result<T, RouteError>;
