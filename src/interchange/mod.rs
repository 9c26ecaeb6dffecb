//! Graph serialization to and from a node/edge interchange document.
//!
//! The document is the boundary between the engine and the host
//! application's file handling: a plain `{nodes, edges}` shape that
//! round-trips through JSON. Loading validates the simple-graph
//! invariants and fails with [`GraphError::Malformed`] on missing
//! fields, self-loops, duplicate pairs, or non-finite weights; the
//! failure is a value for the caller to surface, never fatal.
//!
//! # Example
//!
//! ```
//! use neurographis::interchange;
//! use neurographis::store::Graph;
//!
//! let graph = Graph::sample();
//! let json = interchange::to_json(&graph)?;
//! let restored = interchange::from_json(&json)?;
//! assert_eq!(graph, restored);
//! # Ok::<(), neurographis::GraphError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::store::{Graph, GraphError, GraphResult, NodeId};

/// One edge in the interchange document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// One endpoint's identifier.
    pub source: u64,
    /// The other endpoint's identifier.
    pub target: u64,
    /// The edge weight.
    pub weight: f64,
}

/// The serialized node/edge shape of a graph.
///
/// `nodes` lists every node identifier (so isolated nodes survive a
/// round trip); `edges` lists each undirected edge once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// All node identifiers.
    pub nodes: Vec<u64>,
    /// All undirected edges.
    pub edges: Vec<EdgeRecord>,
}

/// Serialize a graph into an interchange document.
#[must_use]
pub fn to_document(graph: &Graph) -> GraphDocument {
    GraphDocument {
        nodes: graph.nodes().map(NodeId::as_u64).collect(),
        edges: graph
            .edges()
            .map(|e| EdgeRecord {
                source: e.source.as_u64(),
                target: e.target.as_u64(),
                weight: e.weight,
            })
            .collect(),
    }
}

/// Build a graph from an interchange document, validating the
/// simple-graph invariants.
///
/// # Errors
///
/// Returns [`GraphError::Malformed`] on a self-loop, a duplicate
/// unordered pair, or a non-finite weight.
pub fn from_document(document: &GraphDocument) -> GraphResult<Graph> {
    let mut graph = Graph::new();
    for &node in &document.nodes {
        graph.add_node(NodeId::new(node));
    }

    for record in &document.edges {
        if record.source == record.target {
            return Err(GraphError::Malformed(format!(
                "self-loop on node {}",
                record.source
            )));
        }
        if !record.weight.is_finite() {
            return Err(GraphError::Malformed(format!(
                "non-finite weight on edge ({}, {})",
                record.source, record.target
            )));
        }

        let (u, v) = (NodeId::new(record.source), NodeId::new(record.target));
        if graph.has_edge(u, v) {
            return Err(GraphError::Malformed(format!(
                "duplicate edge ({}, {})",
                record.source, record.target
            )));
        }
        graph.add_edge(u, v, record.weight)?;
    }

    Ok(graph)
}

/// Serialize a graph to pretty-printed JSON.
///
/// # Errors
///
/// Returns [`GraphError::Malformed`] if JSON encoding fails.
pub fn to_json(graph: &Graph) -> GraphResult<String> {
    serde_json::to_string_pretty(&to_document(graph))
        .map_err(|e| GraphError::Malformed(e.to_string()))
}

/// Load a graph from JSON text.
///
/// # Errors
///
/// Returns [`GraphError::Malformed`] on invalid JSON, missing required
/// fields, or invariant violations in the document.
pub fn from_json(json: &str) -> GraphResult<Graph> {
    let document: GraphDocument =
        serde_json::from_str(json).map_err(|e| GraphError::Malformed(e.to_string()))?;
    from_document(&document)
}
