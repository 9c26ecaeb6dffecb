//! Dijkstra's algorithm for single-source weighted shortest paths.
//!
//! [`single_source`] computes, for every node reachable from a source,
//! the minimal total weight and one optimal path. When several optimal
//! paths exist the one returned depends on priority-queue insertion
//! order; it is deterministic for a given graph but not guaranteed
//! lexicographic.
//!
//! # Negative Weights
//!
//! Dijkstra requires non-negative weights. The store accepts negative
//! weights, but this module does not guard against them; results on
//! such graphs are undefined.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap, HashMap};

use crate::store::{Graph, GraphError, GraphResult, NodeId};

/// A weighted path from the source to one target node.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPath {
    /// The nodes in the path, from source to target.
    pub nodes: Vec<NodeId>,
    /// The total weight of the path.
    pub total_weight: f64,
}

impl WeightedPath {
    /// The number of edges in the path.
    #[must_use]
    pub fn length(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Shortest-path tree produced by [`single_source`].
///
/// Holds the minimal distance and a parent pointer for every reachable
/// node; paths are reconstructed on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree {
    source: NodeId,
    /// Minimal distance per reachable node, ordered by identifier.
    distance: BTreeMap<NodeId, f64>,
    /// Predecessor on one optimal path; the source has no entry.
    parent: HashMap<NodeId, NodeId>,
}

impl ShortestPathTree {
    /// The source node of this tree.
    #[must_use]
    pub const fn source(&self) -> NodeId {
        self.source
    }

    /// The minimal total weight from the source to `node`, or `None`
    /// if `node` is unreachable.
    #[must_use]
    pub fn distance_to(&self, node: NodeId) -> Option<f64> {
        self.distance.get(&node).copied()
    }

    /// One optimal path from the source to `node`, or `None` if
    /// `node` is unreachable.
    #[must_use]
    pub fn path_to(&self, node: NodeId) -> Option<WeightedPath> {
        let total_weight = self.distance_to(node)?;

        let mut nodes = vec![node];
        let mut current = node;
        while let Some(&prev) = self.parent.get(&current) {
            nodes.push(prev);
            current = prev;
        }
        nodes.reverse();

        Some(WeightedPath { nodes, total_weight })
    }

    /// Iterate over all reachable nodes, ascending by identifier.
    /// Includes the source at distance 0.
    pub fn reachable(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.distance.keys().copied()
    }
}

/// Entry in the priority queue for Dijkstra's algorithm.
///
/// Ordered by distance (lower distance = higher priority).
#[derive(Debug, Clone, Copy)]
struct DijkstraEntry {
    node: NodeId,
    distance: f64,
}

impl PartialEq for DijkstraEntry {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl Eq for DijkstraEntry {}

impl PartialOrd for DijkstraEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DijkstraEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest distance. Finite
        // weights keep NaN out of the frontier.
        other.distance.partial_cmp(&self.distance).unwrap_or(Ordering::Equal)
    }
}

/// Compute shortest paths from `source` to every reachable node.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`] if `source` is not in the node
/// set. The module is strict: substituting a fallback source and
/// reporting the substitution is the caller's responsibility.
pub fn single_source(graph: &Graph, source: NodeId) -> GraphResult<ShortestPathTree> {
    if !graph.contains_node(source) {
        return Err(GraphError::NodeNotFound(source));
    }

    tracing::debug!(%source, nodes = graph.node_count(), "running dijkstra");

    let mut distance: BTreeMap<NodeId, f64> = BTreeMap::new();
    let mut parent: HashMap<NodeId, NodeId> = HashMap::new();
    let mut frontier: BinaryHeap<DijkstraEntry> = BinaryHeap::new();

    distance.insert(source, 0.0);
    frontier.push(DijkstraEntry { node: source, distance: 0.0 });

    while let Some(DijkstraEntry { node, distance: dist }) = frontier.pop() {
        // Stale entry: a shorter route was already settled.
        if distance.get(&node).is_some_and(|&best| dist > best) {
            continue;
        }

        for (neighbor, weight) in graph.neighbors(node) {
            let candidate = dist + weight;
            let improved = distance.get(&neighbor).map_or(true, |&best| candidate < best);
            if improved {
                distance.insert(neighbor, candidate);
                parent.insert(neighbor, node);
                frontier.push(DijkstraEntry { node: neighbor, distance: candidate });
            }
        }
    }

    Ok(ShortestPathTree { source, distance, parent })
}
