//! Approximate Hamiltonian path via a traveling-salesman heuristic.
//!
//! [`approximate_hamiltonian_path`] runs nearest-neighbor over the
//! shortest-path metric closure: starting at the lowest node
//! identifier, it repeatedly moves to the unvisited node with the
//! smallest shortest-path distance from the current one. This is a
//! heuristic, not a solver: the tour can be suboptimal, and on a
//! disconnected graph some hops have no path at all, in which case the
//! result carries [`Warning::Disconnected`] and its weight is
//! unreliable. Callers must present the result as approximate.

use std::collections::BTreeSet;

use crate::store::{Graph, GraphError, GraphResult, NodeId, Warning};
use crate::traversal::{single_source, ShortestPathTree};

/// An approximate Hamiltonian tour.
#[derive(Debug, Clone, PartialEq)]
pub struct HamiltonianTour {
    /// Visiting order: every node exactly once.
    pub nodes: Vec<NodeId>,
    /// Sum of shortest-path distances between consecutive visits.
    /// Unreliable when `warnings` contains [`Warning::Disconnected`].
    pub total_weight: f64,
    /// Non-fatal qualifications of the tour.
    pub warnings: Vec<Warning>,
}

/// Approximate a Hamiltonian path visiting every node.
///
/// # Errors
///
/// Returns [`GraphError::EmptyGraph`] on a graph with no nodes.
pub fn approximate_hamiltonian_path(graph: &Graph) -> GraphResult<HamiltonianTour> {
    let start = graph.first_node().ok_or(GraphError::EmptyGraph)?;

    tracing::debug!(nodes = graph.node_count(), "approximating hamiltonian path");

    let mut unvisited: BTreeSet<NodeId> = graph.nodes().collect();
    unvisited.remove(&start);

    let mut tour = vec![start];
    let mut total_weight = 0.0;
    let mut disconnected = false;
    // Shortest-path tree from the current node; recomputed per hop.
    let mut tree: ShortestPathTree = single_source(graph, start)?;

    while !unvisited.is_empty() {
        // Nearest unvisited node by shortest-path distance; BTreeSet
        // iteration order breaks distance ties toward the lower id.
        let mut nearest: Option<(NodeId, f64)> = None;
        for &candidate in &unvisited {
            if let Some(distance) = tree.distance_to(candidate) {
                let closer = nearest.map_or(true, |(_, best)| distance < best);
                if closer {
                    nearest = Some((candidate, distance));
                }
            }
        }

        let next = match nearest {
            Some((node, distance)) => {
                total_weight += distance;
                node
            }
            None => {
                // No unvisited node is reachable from here; jump to the
                // lowest remaining id and flag the tour.
                disconnected = true;
                *unvisited.iter().next().ok_or(GraphError::EmptyGraph)?
            }
        };

        unvisited.remove(&next);
        tour.push(next);
        if !unvisited.is_empty() {
            tree = single_source(graph, next)?;
        }
    }

    let warnings = if disconnected { vec![Warning::Disconnected] } else { Vec::new() };
    Ok(HamiltonianTour { nodes: tour, total_weight, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: u64) -> NodeId {
        NodeId::new(id)
    }

    #[test]
    fn empty_graph_is_an_error() {
        assert_eq!(approximate_hamiltonian_path(&Graph::new()), Err(GraphError::EmptyGraph));
    }

    #[test]
    fn single_node_tour_is_trivial() {
        let mut graph = Graph::new();
        graph.add_node(n(3));
        let tour = approximate_hamiltonian_path(&graph).expect("non-empty");
        assert_eq!(tour.nodes, vec![n(3)]);
        assert_eq!(tour.total_weight, 0.0);
        assert!(tour.warnings.is_empty());
    }

    #[test]
    fn tour_visits_every_node_once() {
        let graph = Graph::sample();
        let tour = approximate_hamiltonian_path(&graph).expect("non-empty");

        assert_eq!(tour.nodes.len(), graph.node_count());
        let mut sorted = tour.nodes.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), graph.node_count());
        assert!(tour.warnings.is_empty());
        assert!(tour.total_weight > 0.0);
    }

    #[test]
    fn path_graph_tour_is_exact() {
        // On a path 0-1-2-3 the nearest-neighbor tour is the path itself.
        let mut graph = Graph::new();
        graph.add_edge(n(0), n(1), 1.0).expect("insert");
        graph.add_edge(n(1), n(2), 1.0).expect("insert");
        graph.add_edge(n(2), n(3), 1.0).expect("insert");

        let tour = approximate_hamiltonian_path(&graph).expect("non-empty");
        assert_eq!(tour.nodes, vec![n(0), n(1), n(2), n(3)]);
        assert_eq!(tour.total_weight, 3.0);
    }

    #[test]
    fn disconnected_graph_is_flagged() {
        let mut graph = Graph::new();
        graph.add_edge(n(0), n(1), 1.0).expect("insert");
        graph.add_edge(n(5), n(6), 1.0).expect("insert");

        let tour = approximate_hamiltonian_path(&graph).expect("non-empty");
        assert_eq!(tour.nodes.len(), 4);
        assert_eq!(tour.warnings, vec![Warning::Disconnected]);
    }
}
