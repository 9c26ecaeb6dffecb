//! The weighted undirected graph container.
//!
//! [`Graph`] is a mutable store for a simple weighted undirected graph:
//! integer-keyed nodes, at most one edge per unordered node pair, a
//! finite weight on every edge, and no self-loops. Adjacency is kept in
//! ordered maps so that node and edge enumeration is deterministic by
//! identifier order, which every analysis module relies on for
//! reproducible output.
//!
//! Analysis modules take `&Graph` and never mutate it. Each mutation
//! bumps an internal version counter used by the layout cache to detect
//! staleness.
//!
//! # Example
//!
//! ```
//! use neurographis::store::{Graph, NodeId};
//!
//! let mut graph = Graph::new();
//! graph.add_edge(NodeId::new(0), NodeId::new(1), 7.0)?;
//! graph.add_edge(NodeId::new(1), NodeId::new(2), 3.5)?;
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.degree(NodeId::new(1)), 2);
//! assert!(graph.has_edge(NodeId::new(1), NodeId::new(0)));
//! # Ok::<(), neurographis::GraphError>(())
//! ```

mod error;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use error::{GraphError, GraphResult, Warning};

/// Unique identifier for a node in the graph.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct NodeId(u64);

impl NodeId {
    /// Create a new `NodeId` from a raw u64 value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An undirected weighted edge.
///
/// When produced by [`Graph::edges`], endpoints are normalized so that
/// `source < target`. Traversal results (e.g. an Eulerian circuit) use
/// `source -> target` as the walk direction instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// One endpoint.
    pub source: NodeId,
    /// The other endpoint.
    pub target: NodeId,
    /// The edge weight.
    pub weight: f64,
}

/// Outcome of an edge insertion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeUpdate {
    /// The edge did not exist and was inserted.
    Inserted,
    /// The edge existed; its weight was replaced.
    Replaced {
        /// The weight that was overwritten.
        previous: f64,
    },
}

/// A mutable weighted undirected simple graph.
///
/// # Invariants
///
/// - No self-loops.
/// - No parallel edges: one weight per unordered node pair.
/// - Both endpoints of every edge are present in the node set.
/// - Adjacency entries are symmetric: `(u, v)` implies `(v, u)` with
///   the same weight.
///
/// Negative weights are accepted by the store but unsupported by
/// Dijkstra shortest paths; see [`crate::traversal::dijkstra`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Graph {
    /// Symmetric adjacency: node -> (neighbor -> weight), both ordered.
    adjacency: BTreeMap<NodeId, BTreeMap<NodeId, f64>>,
    /// Number of undirected edges.
    edge_count: usize,
    /// Bumped on every mutation; keys the layout cache.
    version: u64,
}

impl Graph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the small demonstration graph used by the reference
    /// application: six nodes, eight edges.
    #[must_use]
    pub fn sample() -> Self {
        let mut graph = Self::new();
        let edges = [
            (0, 1, 7.0),
            (0, 2, 9.0),
            (1, 2, 10.0),
            (1, 3, 15.0),
            (2, 3, 11.0),
            (2, 5, 2.0),
            (3, 4, 6.0),
            (4, 5, 9.0),
        ];
        for (u, v, w) in edges {
            // Sample edges are distinct, non-loop pairs; insertion cannot fail.
            let _ = graph.add_edge(NodeId::new(u), NodeId::new(v), w);
        }
        graph
    }

    /// Add a node with no incident edges.
    ///
    /// Returns `true` if the node was newly inserted, `false` if it was
    /// already present (in which case the graph is unchanged).
    pub fn add_node(&mut self, node: NodeId) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, BTreeMap::new());
        self.version += 1;
        true
    }

    /// Insert an edge, creating missing endpoints implicitly.
    ///
    /// If the unordered pair already has an edge, its weight is
    /// replaced and the previous weight is reported via
    /// [`EdgeUpdate::Replaced`] so the caller can surface the overwrite.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::SelfLoop`] if `u == v`.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, weight: f64) -> GraphResult<EdgeUpdate> {
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }

        let previous = self.adjacency.entry(u).or_default().insert(v, weight);
        self.adjacency.entry(v).or_default().insert(u, weight);
        self.version += 1;

        match previous {
            Some(previous) => Ok(EdgeUpdate::Replaced { previous }),
            None => {
                self.edge_count += 1;
                Ok(EdgeUpdate::Inserted)
            }
        }
    }

    /// Remove the edge between `u` and `v`, returning its weight.
    ///
    /// The endpoints remain in the node set, possibly isolated.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if no such edge exists.
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId) -> GraphResult<f64> {
        let weight = self
            .adjacency
            .get_mut(&u)
            .and_then(|neighbors| neighbors.remove(&v))
            .ok_or(GraphError::EdgeNotFound { source: u, target: v })?;
        if let Some(neighbors) = self.adjacency.get_mut(&v) {
            neighbors.remove(&u);
        }
        self.edge_count -= 1;
        self.version += 1;
        Ok(weight)
    }

    /// Remove every edge. Nodes persist as isolated (reference behavior).
    pub fn clear_edges(&mut self) {
        for neighbors in self.adjacency.values_mut() {
            neighbors.clear();
        }
        self.edge_count = 0;
        self.version += 1;
    }

    /// Iterate over all nodes, ascending by identifier.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Iterate over all undirected edges exactly once, with endpoints
    /// normalized to `source < target`, ascending by `(source, target)`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().flat_map(|(&u, neighbors)| {
            neighbors
                .iter()
                .filter(move |&(&v, _)| u < v)
                .map(move |(&v, &weight)| Edge { source: u, target: v, weight })
        })
    }

    /// Iterate over the neighbors of `node` with edge weights,
    /// ascending by neighbor identifier. Empty if `node` is absent.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.adjacency
            .get(&node)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(|(&v, &w)| (v, w)))
    }

    /// The degree of `node`, or 0 if the node is absent.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency.get(&node).map_or(0, BTreeMap::len)
    }

    /// Whether an edge exists between `u` and `v`.
    #[must_use]
    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.adjacency.get(&u).is_some_and(|neighbors| neighbors.contains_key(&v))
    }

    /// The weight of the edge between `u` and `v`, if present.
    #[must_use]
    pub fn weight(&self, u: NodeId, v: NodeId) -> Option<f64> {
        self.adjacency.get(&u).and_then(|neighbors| neighbors.get(&v)).copied()
    }

    /// Whether `node` is in the node set.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// The mutation counter. Any mutation changes this value; cached
    /// derived data (layouts) compares versions to detect staleness.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// The lowest node identifier, if the graph is non-empty.
    ///
    /// Used as the implicit start node by Prim's algorithm and the
    /// Hamiltonian heuristic.
    #[must_use]
    pub fn first_node(&self) -> Option<NodeId> {
        self.adjacency.keys().next().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: u64) -> NodeId {
        NodeId::new(id)
    }

    #[test]
    fn add_edge_creates_endpoints() {
        let mut graph = Graph::new();
        assert_eq!(graph.add_edge(n(1), n(2), 4.0), Ok(EdgeUpdate::Inserted));

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge(n(1), n(2)));
        assert!(graph.has_edge(n(2), n(1)));
        assert_eq!(graph.weight(n(2), n(1)), Some(4.0));
    }

    #[test]
    fn add_edge_overwrite_reports_previous_weight() {
        let mut graph = Graph::new();
        graph.add_edge(n(1), n(2), 4.0).expect("insert");
        let update = graph.add_edge(n(2), n(1), 9.0).expect("overwrite");

        assert_eq!(update, EdgeUpdate::Replaced { previous: 4.0 });
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.weight(n(1), n(2)), Some(9.0));
    }

    #[test]
    fn self_loop_rejected() {
        let mut graph = Graph::new();
        assert_eq!(graph.add_edge(n(3), n(3), 1.0), Err(GraphError::SelfLoop(n(3))));
        assert!(graph.is_empty());
    }

    #[test]
    fn remove_edge_keeps_nodes() {
        let mut graph = Graph::new();
        graph.add_edge(n(1), n(2), 4.0).expect("insert");
        assert_eq!(graph.remove_edge(n(2), n(1)), Ok(4.0));

        assert_eq!(graph.edge_count(), 0);
        assert!(graph.contains_node(n(1)));
        assert!(graph.contains_node(n(2)));
        assert_eq!(
            graph.remove_edge(n(1), n(2)),
            Err(GraphError::EdgeNotFound { source: n(1), target: n(2) })
        );
    }

    #[test]
    fn clear_edges_keeps_nodes_isolated() {
        let mut graph = Graph::sample();
        graph.clear_edges();

        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.node_count(), 6);
        assert!(graph.nodes().all(|v| graph.degree(v) == 0));
    }

    #[test]
    fn edges_enumerate_once_normalized_ascending() {
        let graph = Graph::sample();
        let edges: Vec<_> = graph.edges().collect();

        assert_eq!(edges.len(), 8);
        assert!(edges.iter().all(|e| e.source < e.target));
        let pairs: Vec<_> = edges.iter().map(|e| (e.source, e.target)).collect();
        let mut sorted = pairs.clone();
        sorted.sort();
        assert_eq!(pairs, sorted);
    }

    #[test]
    fn version_bumps_on_every_mutation() {
        let mut graph = Graph::new();
        let v0 = graph.version();
        graph.add_node(n(1));
        graph.add_edge(n(1), n(2), 1.0).expect("insert");
        graph.remove_edge(n(1), n(2)).expect("remove");
        graph.clear_edges();
        assert_eq!(graph.version(), v0 + 4);

        // Re-adding an existing node is not a mutation.
        let v = graph.version();
        assert!(!graph.add_node(n(1)));
        assert_eq!(graph.version(), v);
    }

    #[test]
    fn sample_graph_shape() {
        let graph = Graph::sample();
        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.edge_count(), 8);
        assert_eq!(graph.degree(n(2)), 4);
        assert_eq!(graph.weight(n(2), n(5)), Some(2.0));
    }
}
