//! Eulerian circuit and path analysis.
//!
//! A connected graph has an Eulerian circuit iff every node has even
//! degree, and an Eulerian path (but no circuit) iff exactly two nodes
//! have odd degree. [`classify_eulerian`] applies these rules;
//! [`eulerian_circuit`] extracts a full closed edge traversal with
//! Hierholzer's algorithm when the circuit exists.

use std::collections::{BTreeMap, BTreeSet};

use crate::store::{Edge, Graph, GraphError, GraphResult, NodeId};
use crate::traversal::reachable_from;

/// Eulerian classification of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EulerianClass {
    /// Connected with all degrees even: a closed walk uses every edge
    /// exactly once.
    Circuit,
    /// Connected with exactly two odd-degree nodes: an open walk uses
    /// every edge exactly once, but cannot close.
    PathOnly,
    /// Neither circuit nor path exists.
    None,
}

/// Result of [`classify_eulerian`], with the odd-degree nodes for
/// diagnosis when no Eulerian structure exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EulerianClassification {
    /// The classification.
    pub class: EulerianClass,
    /// Nodes with odd degree, ascending by identifier.
    pub odd_nodes: Vec<NodeId>,
}

/// Classify the Eulerian structure of `graph`.
///
/// Never fails: an empty or edgeless graph classifies as
/// [`EulerianClass::None`], as does any disconnected graph (isolated
/// nodes count as disconnecting, matching the reference behavior).
#[must_use]
pub fn classify_eulerian(graph: &Graph) -> EulerianClassification {
    let odd_nodes: Vec<NodeId> =
        graph.nodes().filter(|&v| graph.degree(v) % 2 == 1).collect();

    let connected = match graph.first_node() {
        None => false,
        Some(start) => reachable_from(graph, start).len() == graph.node_count(),
    };

    let class = if !connected || graph.edge_count() == 0 {
        EulerianClass::None
    } else if odd_nodes.is_empty() {
        EulerianClass::Circuit
    } else if odd_nodes.len() == 2 {
        EulerianClass::PathOnly
    } else {
        EulerianClass::None
    };

    EulerianClassification { class, odd_nodes }
}

/// Extract an Eulerian circuit with Hierholzer's algorithm.
///
/// Returns the edges of a closed walk starting and ending at the
/// lowest node identifier, using every edge exactly once. Each
/// returned [`Edge`] is oriented in walk direction (`source` is
/// visited before `target`).
///
/// # Errors
///
/// - [`GraphError::EmptyGraph`] if the graph has no edges.
/// - [`GraphError::NotEulerian`] (carrying the odd-degree nodes) if
///   the graph is disconnected or any degree is odd.
pub fn eulerian_circuit(graph: &Graph) -> GraphResult<Vec<Edge>> {
    if graph.edge_count() == 0 {
        return Err(GraphError::EmptyGraph);
    }

    let classification = classify_eulerian(graph);
    if classification.class != EulerianClass::Circuit {
        return Err(GraphError::NotEulerian { odd_nodes: classification.odd_nodes });
    }

    tracing::debug!(edges = graph.edge_count(), "extracting eulerian circuit");

    // Mutable copy of the adjacency; edges are consumed as traversed.
    let mut remaining: BTreeMap<NodeId, BTreeSet<NodeId>> = graph
        .nodes()
        .map(|v| (v, graph.neighbors(v).map(|(u, _)| u).collect()))
        .collect();

    let start = graph.first_node().ok_or(GraphError::EmptyGraph)?;
    let mut stack = vec![start];
    let mut walk: Vec<NodeId> = Vec::with_capacity(graph.edge_count() + 1);

    while let Some(&current) = stack.last() {
        let next = remaining.get(&current).and_then(|nbrs| nbrs.iter().next().copied());
        match next {
            Some(next) => {
                if let Some(nbrs) = remaining.get_mut(&current) {
                    nbrs.remove(&next);
                }
                if let Some(nbrs) = remaining.get_mut(&next) {
                    nbrs.remove(&current);
                }
                stack.push(next);
            }
            None => {
                if let Some(finished) = stack.pop() {
                    walk.push(finished);
                }
            }
        }
    }
    walk.reverse();

    let circuit = walk
        .windows(2)
        .map(|pair| Edge {
            source: pair[0],
            target: pair[1],
            // The walk only traverses stored edges.
            weight: graph.weight(pair[0], pair[1]).unwrap_or_default(),
        })
        .collect();

    Ok(circuit)
}
