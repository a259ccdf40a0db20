/*!
# Errors

Errors are reserved for malformed requests. A structure that simply does not exist (no bridge,
no Hamiltonian cycle, ...) is reported as `None` or [`Outcome::Absent`](crate::solve::Outcome),
and a cancelled computation as [`Outcome::Cancelled`](crate::solve::Outcome).
*/

use thiserror::Error;

use crate::{Edge, Node};

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, GraphError>;

/// Reason why an edge request was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeFault {
    /// Both endpoints are the same vertex
    SelfLoop,
    /// The given endpoint is not a vertex of the graph
    MissingEndpoint(Node),
    /// The endpoints are already connected
    Duplicate,
    /// The endpoints are not connected
    Absent,
}

impl std::fmt::Display for EdgeFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeFault::SelfLoop => write!(f, "self-loops are not allowed"),
            EdgeFault::MissingEndpoint(u) => write!(f, "endpoint {u} is not a vertex"),
            EdgeFault::Duplicate => write!(f, "endpoints are already connected"),
            EdgeFault::Absent => write!(f, "endpoints are not connected"),
        }
    }
}

/// All errors surfaced by graph operations and solvers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge could not be added or removed.
    #[error("invalid edge {edge}: {fault}")]
    InvalidEdge {
        /// Requested endpoints.
        edge: Edge,
        /// Why the request was rejected.
        fault: EdgeFault,
    },
    /// A vertex handle does not refer to a live vertex.
    #[error("vertex {0} is not part of the graph")]
    MissingVertex(Node),
    /// Malformed input to an algorithm or enumerator.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A dynamic programming table or auxiliary structure contradicts the graph.
    #[error("inconsistent table: {0}")]
    InconsistentTable(String),
}

impl GraphError {
    pub(crate) fn invalid_edge(u: Node, v: Node, fault: EdgeFault) -> Self {
        GraphError::InvalidEdge {
            edge: Edge(u, v),
            fault,
        }
    }

    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        GraphError::InvalidArgument(msg.into())
    }
}
