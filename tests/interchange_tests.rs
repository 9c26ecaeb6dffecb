//! Integration tests for graph document serialization, including a
//! round-trip property test.

use neurographis::interchange::{from_document, from_json, to_document, to_json, EdgeRecord, GraphDocument};
use neurographis::store::{Graph, GraphError, NodeId};
use proptest::prelude::*;

fn n(id: u64) -> NodeId {
    NodeId::new(id)
}

#[test]
fn document_shape_matches_graph() {
    let graph = Graph::sample();
    let document = to_document(&graph);

    assert_eq!(document.nodes, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(document.edges.len(), 8);
    assert!(document.edges.contains(&EdgeRecord { source: 2, target: 5, weight: 2.0 }));
}

#[test]
fn json_round_trip_is_identity() {
    let mut graph = Graph::sample();
    graph.add_node(n(9)); // isolated

    let json = to_json(&graph).expect("encode");
    let restored = from_json(&json).expect("decode");

    assert_eq!(restored, graph);
    assert_eq!(restored.node_count(), 7);
    assert_eq!(restored.edge_count(), 8);
}

#[test]
fn load_failure_is_a_value_not_a_panic() {
    for bad in [
        "",
        "[]",
        r#"{"edges": []}"#,
        r#"{"nodes": "oops", "edges": []}"#,
        r#"{"nodes": [0], "edges": [{"source": 0}]}"#,
    ] {
        assert!(
            matches!(from_json(bad), Err(GraphError::Malformed(_))),
            "input {bad:?} should be malformed"
        );
    }
}

#[test]
fn document_validation_rejects_invariant_violations() {
    let self_loop = GraphDocument {
        nodes: vec![3],
        edges: vec![EdgeRecord { source: 3, target: 3, weight: 1.0 }],
    };
    assert!(from_document(&self_loop).is_err());

    let duplicate = GraphDocument {
        nodes: vec![1, 2],
        edges: vec![
            EdgeRecord { source: 1, target: 2, weight: 1.0 },
            EdgeRecord { source: 1, target: 2, weight: 4.0 },
        ],
    };
    assert!(from_document(&duplicate).is_err());
}

proptest! {
    #[test]
    fn round_trip_preserves_any_simple_graph(
        triples in prop::collection::vec((0u64..16, 0u64..16, 0.1f64..100.0), 0..40)
    ) {
        let mut graph = Graph::new();
        for (u, v, w) in triples {
            if u != v {
                let _ = graph.add_edge(NodeId::new(u), NodeId::new(v), w);
            }
        }

        let json = to_json(&graph).expect("encode");
        let restored = from_json(&json).expect("decode");
        prop_assert_eq!(restored, graph);
    }
}
