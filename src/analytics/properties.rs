//! Structural predicates.
//!
//! Pure boolean/derived queries over the graph. These never fail: for
//! any valid graph each predicate has a definitive answer. A graph
//! with at most one node counts as connected.

use std::collections::{HashMap, VecDeque};

use crate::store::{Graph, NodeId};
use crate::traversal::reachable_from;

/// Whether a single traversal reaches every node.
///
/// Isolated nodes disconnect the graph. Graphs with zero or one node
/// are connected.
#[must_use]
pub fn is_connected(graph: &Graph) -> bool {
    match graph.first_node() {
        None => true,
        Some(start) => reachable_from(graph, start).len() == graph.node_count(),
    }
}

/// Whether the graph is 2-colorable, i.e. contains no odd cycle.
///
/// Checked by BFS coloring over every component; the empty graph is
/// bipartite.
#[must_use]
pub fn is_bipartite(graph: &Graph) -> bool {
    // 0/1 coloring assigned as each component is explored.
    let mut color: HashMap<NodeId, u8> = HashMap::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    for start in graph.nodes() {
        if color.contains_key(&start) {
            continue;
        }
        color.insert(start, 0);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let current_color = color[&current];
            for (neighbor, _) in graph.neighbors(current) {
                match color.get(&neighbor) {
                    Some(&c) if c == current_color => return false,
                    Some(_) => {}
                    None => {
                        color.insert(neighbor, 1 - current_color);
                        queue.push_back(neighbor);
                    }
                }
            }
        }
    }

    true
}

/// The common degree if every node has the same degree, `None` for an
/// irregular or empty graph.
#[must_use]
pub fn is_regular(graph: &Graph) -> Option<usize> {
    let mut degrees = graph.nodes().map(|v| graph.degree(v));
    let first = degrees.next()?;
    degrees.all(|d| d == first).then_some(first)
}

/// Whether every pair of distinct nodes is adjacent:
/// `|E| == n(n-1)/2`.
#[must_use]
pub fn is_complete(graph: &Graph) -> bool {
    let n = graph.node_count();
    graph.edge_count() == n * n.saturating_sub(1) / 2
}

/// All four structural predicates evaluated together, mirroring the
/// reference "Graph Properties" report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralSummary {
    /// Result of [`is_connected`].
    pub connected: bool,
    /// Result of [`is_bipartite`].
    pub bipartite: bool,
    /// Result of [`is_regular`]: the common degree when regular.
    pub regular: Option<usize>,
    /// Result of [`is_complete`].
    pub complete: bool,
}

/// Evaluate every structural predicate on `graph`.
#[must_use]
pub fn summarize(graph: &Graph) -> StructuralSummary {
    StructuralSummary {
        connected: is_connected(graph),
        bipartite: is_bipartite(graph),
        regular: is_regular(graph),
        complete: is_complete(graph),
    }
}
