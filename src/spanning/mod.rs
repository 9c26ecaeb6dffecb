//! Minimum spanning tree construction.
//!
//! [`minimum_spanning_tree`] builds an MST with either Kruskal's or
//! Prim's algorithm. On a disconnected graph both strategies produce a
//! minimum spanning *forest* covering every component (Prim restarts in
//! each unvisited component), so their total weights agree on any
//! input; the result then carries [`Warning::Disconnected`]. Edge sets
//! may still differ between the two strategies under weight ties.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::store::{Edge, Graph, GraphError, GraphResult, NodeId, Warning};

/// Which MST algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MstStrategy {
    /// Sort all edges ascending by weight, reject cycle-forming edges
    /// with a union-find structure.
    Kruskal,
    /// Grow a tree from the lowest node identifier, always taking the
    /// minimum-weight edge crossing the frontier.
    Prim,
}

/// Result of a minimum spanning tree computation.
#[derive(Debug, Clone, PartialEq)]
pub struct MstResult {
    /// The tree (or forest) edges, endpoints normalized `source < target`,
    /// in the order the algorithm accepted them.
    pub edges: Vec<Edge>,
    /// Sum of the accepted edge weights.
    pub total_weight: f64,
    /// Non-fatal qualifications, e.g. [`Warning::Disconnected`] when
    /// the result is a forest rather than a single tree.
    pub warnings: Vec<Warning>,
}

impl MstResult {
    /// Whether the result spans the whole graph as a single tree.
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        !self.warnings.contains(&Warning::Disconnected)
    }
}

/// Union-Find data structure with path compression and union by rank.
///
/// Detects cycle-forming edges in near-constant time per operation.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self { parent: (0..n).collect(), rank: vec![0; n] }
    }

    /// Find the root of the set containing x, with path compression.
    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    /// Union the sets containing x and y, using union by rank.
    /// Returns `false` if they were already in the same set.
    fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }
        match self.rank[root_x].cmp(&self.rank[root_y]) {
            Ordering::Less => self.parent[root_x] = root_y,
            Ordering::Greater => self.parent[root_y] = root_x,
            Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        true
    }
}

/// Build a minimum spanning tree (or forest) of `graph`.
///
/// # Errors
///
/// Returns [`GraphError::EmptyGraph`] if the graph has no nodes.
pub fn minimum_spanning_tree(graph: &Graph, strategy: MstStrategy) -> GraphResult<MstResult> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }

    tracing::debug!(
        ?strategy,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "building minimum spanning tree"
    );

    let edges = match strategy {
        MstStrategy::Kruskal => kruskal(graph),
        MstStrategy::Prim => prim(graph),
    };

    let total_weight = edges.iter().map(|e| e.weight).sum();
    // A forest over n nodes with c components has n - c edges.
    let mut warnings = Vec::new();
    if edges.len() + 1 != graph.node_count() {
        warnings.push(Warning::Disconnected);
    }

    Ok(MstResult { edges, total_weight, warnings })
}

/// Kruskal: ascending weight order, ties broken by edge enumeration
/// order (the sort is stable).
fn kruskal(graph: &Graph) -> Vec<Edge> {
    let index: HashMap<NodeId, usize> =
        graph.nodes().enumerate().map(|(i, v)| (v, i)).collect();
    let mut uf = UnionFind::new(index.len());

    let mut candidates: Vec<Edge> = graph.edges().collect();
    candidates.sort_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(Ordering::Equal));

    let mut accepted = Vec::with_capacity(index.len().saturating_sub(1));
    for edge in candidates {
        if uf.union(index[&edge.source], index[&edge.target]) {
            accepted.push(edge);
        }
    }
    accepted
}

/// Entry in Prim's frontier heap.
///
/// Ordered by weight ascending, then discovery order, so weight ties
/// resolve deterministically in favor of the earlier-discovered edge.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PrimEntry {
    weight: f64,
    discovery: usize,
    from: NodeId,
    to: NodeId,
}

impl Eq for PrimEntry {}

impl PartialOrd for PrimEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PrimEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.discovery.cmp(&self.discovery))
    }
}

/// Prim: grow from the lowest node identifier; restart in each
/// unvisited component so a disconnected graph yields a full forest.
fn prim(graph: &Graph) -> Vec<Edge> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut accepted = Vec::with_capacity(graph.node_count().saturating_sub(1));
    let mut discovery = 0usize;

    for start in graph.nodes() {
        if visited.contains(&start) {
            continue;
        }

        let mut frontier: BinaryHeap<PrimEntry> = BinaryHeap::new();
        visited.insert(start);
        for (neighbor, weight) in graph.neighbors(start) {
            frontier.push(PrimEntry { weight, discovery, from: start, to: neighbor });
            discovery += 1;
        }

        while let Some(PrimEntry { weight, from, to, .. }) = frontier.pop() {
            if !visited.insert(to) {
                continue;
            }
            let (source, target) = if from < to { (from, to) } else { (to, from) };
            accepted.push(Edge { source, target, weight });

            for (neighbor, weight) in graph.neighbors(to) {
                if !visited.contains(&neighbor) {
                    frontier.push(PrimEntry { weight, discovery, from: to, to: neighbor });
                    discovery += 1;
                }
            }
        }
    }

    accepted
}
