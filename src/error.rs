use std::fmt::Debug;

use thiserror::Error;

/// The error type for graph operations.
///
/// There is a single kind of failure: an argument that names a vertex the
/// graph does not contain.  Operations validate their arguments before
/// touching any state, so a returned error always means the graph is
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl GraphError {
    pub(crate) fn missing_vertex<V: Debug>(vertex: &V) -> Self {
        GraphError::InvalidArgument(format!("vertex {vertex:?} does not exist in the graph"))
    }

    pub(crate) fn missing_endpoints<V: Debug>(from: &V, to: &V) -> Self {
        GraphError::InvalidArgument(format!(
            "both vertices must exist in the graph: {from:?}, {to:?}"
        ))
    }
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;
