//! Integration tests for Eulerian analysis, the Hamiltonian heuristic,
//! and structural predicates on various graph topologies.

use std::collections::HashSet;

use neurographis::analytics::{
    approximate_hamiltonian_path, classify_eulerian, eulerian_circuit, is_bipartite, is_complete,
    is_connected, is_regular, summarize, EulerianClass,
};
use neurographis::store::{Graph, GraphError, NodeId, Warning};

fn n(id: u64) -> NodeId {
    NodeId::new(id)
}

/// Cycle graph: 0 - 1 - ... - (len-1) - 0.
fn cycle_graph(len: u64) -> Graph {
    let mut graph = Graph::new();
    for i in 0..len {
        graph.add_edge(n(i), n((i + 1) % len), 1.0).expect("insert");
    }
    graph
}

/// Complete graph on `len` nodes with unit weights.
fn complete_graph(len: u64) -> Graph {
    let mut graph = Graph::new();
    for u in 0..len {
        for v in (u + 1)..len {
            graph.add_edge(n(u), n(v), 1.0).expect("insert");
        }
    }
    graph
}

// ============================================================================
// Eulerian analysis
// ============================================================================

#[test]
fn every_cycle_has_an_eulerian_circuit() {
    for len in [3, 4, 5, 8] {
        let graph = cycle_graph(len);
        assert_eq!(classify_eulerian(&graph).class, EulerianClass::Circuit);

        let circuit = eulerian_circuit(&graph).expect("cycle is Eulerian");
        assert_eq!(circuit.len(), len as usize);
        assert_eq!(circuit[0].source, circuit[circuit.len() - 1].target);
    }
}

#[test]
fn circuit_existence_implies_circuit_classification() {
    // K5: all degrees 4, connected; circuit must exist and classify must agree.
    let graph = complete_graph(5);
    let classification = classify_eulerian(&graph);
    let circuit = eulerian_circuit(&graph);

    assert_eq!(classification.class, EulerianClass::Circuit);
    let circuit = circuit.expect("classification promised a circuit");

    // Every edge exactly once.
    let mut used: HashSet<(NodeId, NodeId)> = HashSet::new();
    for edge in &circuit {
        let key =
            if edge.source < edge.target { (edge.source, edge.target) } else { (edge.target, edge.source) };
        assert!(used.insert(key), "edge traversed twice");
    }
    assert_eq!(used.len(), graph.edge_count());
}

#[test]
fn k4_has_no_eulerian_structure() {
    // K4: four nodes of degree 3.
    let graph = complete_graph(4);
    let classification = classify_eulerian(&graph);

    assert_eq!(classification.class, EulerianClass::None);
    assert_eq!(classification.odd_nodes, vec![n(0), n(1), n(2), n(3)]);

    assert_eq!(
        eulerian_circuit(&graph),
        Err(GraphError::NotEulerian { odd_nodes: vec![n(0), n(1), n(2), n(3)] })
    );
}

#[test]
fn two_odd_nodes_classify_as_path_only() {
    let mut graph = cycle_graph(4);
    graph.add_edge(n(0), n(2), 1.0).expect("insert"); // chord: 0 and 2 become odd

    let classification = classify_eulerian(&graph);
    assert_eq!(classification.class, EulerianClass::PathOnly);
    assert_eq!(classification.odd_nodes, vec![n(0), n(2)]);
}

// ============================================================================
// Hamiltonian heuristic
// ============================================================================

#[test]
fn heuristic_tour_visits_each_node_exactly_once() {
    let graph = Graph::sample();
    let tour = approximate_hamiltonian_path(&graph).expect("non-empty");

    let unique: HashSet<NodeId> = tour.nodes.iter().copied().collect();
    assert_eq!(unique.len(), graph.node_count());
    assert_eq!(tour.nodes.len(), graph.node_count());
    assert!(tour.warnings.is_empty());
}

#[test]
fn heuristic_on_complete_graph_uses_direct_edges() {
    // Unit-weight K4: any order is optimal, weight must be exactly 3.
    let graph = complete_graph(4);
    let tour = approximate_hamiltonian_path(&graph).expect("non-empty");
    assert_eq!(tour.total_weight, 3.0);
}

#[test]
fn heuristic_flags_disconnected_input() {
    let mut graph = cycle_graph(3);
    graph.add_edge(n(10), n(11), 1.0).expect("insert");

    let tour = approximate_hamiltonian_path(&graph).expect("non-empty");
    assert_eq!(tour.warnings, vec![Warning::Disconnected]);
    assert_eq!(tour.nodes.len(), 5);
}

#[test]
fn heuristic_requires_nodes() {
    assert_eq!(approximate_hamiltonian_path(&Graph::new()), Err(GraphError::EmptyGraph));
}

// ============================================================================
// Structural predicates
// ============================================================================

#[test]
fn triangle_is_odd_cycle_not_bipartite() {
    assert!(!is_bipartite(&cycle_graph(3)));
}

#[test]
fn four_cycle_is_regular_bipartite_incomplete() {
    let graph = cycle_graph(4);
    assert!(is_connected(&graph));
    assert!(is_bipartite(&graph));
    assert_eq!(is_regular(&graph), Some(2));
    assert!(!is_complete(&graph));
}

#[test]
fn complete_graph_is_complete_and_regular() {
    let graph = complete_graph(5);
    assert!(is_complete(&graph));
    assert_eq!(is_regular(&graph), Some(4));
}

#[test]
fn sample_graph_summary() {
    let summary = summarize(&Graph::sample());
    assert!(summary.connected);
    assert!(!summary.bipartite); // contains triangle 0-1-2
    assert_eq!(summary.regular, None);
    assert!(!summary.complete);
}

#[test]
fn predicates_never_fail_on_degenerate_graphs() {
    let empty = Graph::new();
    assert!(is_connected(&empty));
    assert!(is_bipartite(&empty));
    assert_eq!(is_regular(&empty), None);
    assert!(is_complete(&empty));

    let mut single = Graph::new();
    single.add_node(n(1));
    assert!(is_connected(&single));
    assert!(is_bipartite(&single));
    assert_eq!(is_regular(&single), Some(0));
    assert!(is_complete(&single));
}
