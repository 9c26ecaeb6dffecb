//! Breadth-first reachability.

use std::collections::{HashSet, VecDeque};

use crate::store::{Graph, NodeId};

/// Collect every node reachable from `start`, including `start` itself.
///
/// Returns an empty set if `start` is not in the graph.
#[must_use]
pub fn reachable_from(graph: &Graph, start: NodeId) -> HashSet<NodeId> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    if !graph.contains_node(start) {
        return visited;
    }

    let mut queue: VecDeque<NodeId> = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for (neighbor, _) in graph.neighbors(current) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    visited
}
