use ev_graph::{GraphError, RouteError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("monitor configuration error: {0}")]
    Config(String),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("routing error: {0}")]
    Route(#[from] RouteError),
}

pub type SimResult<T> = Result<T, SimError>;
