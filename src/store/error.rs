//! Error types for graph store and analysis operations.

use std::fmt;

use super::NodeId;

/// Errors that can occur in graph store and analysis operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A self-loop was rejected; the store holds simple graphs only.
    SelfLoop(NodeId),

    /// An edge was not found for a removal or lookup.
    EdgeNotFound {
        /// One endpoint of the missing edge.
        source: NodeId,
        /// The other endpoint of the missing edge.
        target: NodeId,
    },

    /// A node was not found, e.g. an invalid shortest-path source.
    NodeNotFound(NodeId),

    /// An Eulerian circuit was requested on a non-Eulerian graph.
    NotEulerian {
        /// The nodes with odd degree, ascending by identifier.
        odd_nodes: Vec<NodeId>,
    },

    /// An operation required a non-empty graph.
    EmptyGraph,

    /// A serialized graph document could not be loaded.
    Malformed(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfLoop(node) => write!(f, "self-loop rejected on node {node}"),
            Self::EdgeNotFound { source, target } => {
                write!(f, "edge not found: ({source}, {target})")
            }
            Self::NodeNotFound(node) => write!(f, "node not found: {node}"),
            Self::NotEulerian { odd_nodes } => {
                write!(f, "graph is not Eulerian: {} nodes have odd degree", odd_nodes.len())
            }
            Self::EmptyGraph => write!(f, "graph is empty"),
            Self::Malformed(msg) => write!(f, "malformed graph document: {msg}"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Non-fatal conditions surfaced inside result values.
///
/// Warnings signal that a result is valid but qualified: a disconnected
/// graph turns a spanning tree into a forest and makes the Hamiltonian
/// heuristic unreliable. Callers decide whether to display them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// The graph is disconnected; the result covers or approximates
    /// multiple components.
    Disconnected,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disconnected => write!(f, "graph is disconnected"),
        }
    }
}
