//! Dense matrix representations of the graph.
//!
//! All matrices index nodes ascending by identifier ([`node_order`]
//! exposes the row labeling) and are dense `f64` arrays sized by the
//! node count (and edge count for the incidence matrix). The engine
//! returns raw numeric arrays; formatting and rounding for display are
//! the caller's concern.

pub mod spectrum;

use ndarray::Array2;

use crate::store::{Graph, NodeId};

pub use spectrum::{algebraic_connectivity, laplacian_spectrum, symmetric_eigenvalues, EPSILON};

/// The node ordering used for matrix rows and columns: ascending by
/// identifier.
#[must_use]
pub fn node_order(graph: &Graph) -> Vec<NodeId> {
    graph.nodes().collect()
}

/// The weighted adjacency matrix: `A[i][j]` is the edge weight between
/// the i-th and j-th nodes, 0 when no edge exists. Symmetric, since
/// the graph is undirected.
#[must_use]
pub fn adjacency_matrix(graph: &Graph) -> Array2<f64> {
    let order = node_order(graph);
    let index = |node| {
        // node_order is sorted, so binary search always succeeds for
        // stored nodes.
        order.binary_search(&node).unwrap_or(usize::MAX)
    };

    let n = order.len();
    let mut a = Array2::zeros((n, n));
    for edge in graph.edges() {
        let (i, j) = (index(edge.source), index(edge.target));
        a[[i, j]] = edge.weight;
        a[[j, i]] = edge.weight;
    }
    a
}

/// The oriented incidence matrix: `I[i][k]` is +1 when the i-th node
/// is the tail of the k-th edge, -1 when it is the head, 0 otherwise.
///
/// The graph is undirected; orientation follows edge enumeration order
/// (the lower-identifier endpoint is the tail), which is a labeling
/// convention rather than a graph-theoretic direction.
#[must_use]
pub fn incidence_matrix(graph: &Graph) -> Array2<f64> {
    let order = node_order(graph);
    let index = |node| order.binary_search(&node).unwrap_or(usize::MAX);

    let n = order.len();
    let m = graph.edge_count();
    let mut inc = Array2::zeros((n, m));
    for (k, edge) in graph.edges().enumerate() {
        inc[[index(edge.source), k]] = 1.0;
        inc[[index(edge.target), k]] = -1.0;
    }
    inc
}

/// The graph Laplacian `L = D - A`, where `D` is the diagonal matrix
/// of weighted degrees (row sums of `A`).
///
/// Using weighted degrees makes every row of `L` sum to zero for any
/// weighting, the property the spectral results below rely on.
#[must_use]
pub fn laplacian_matrix(graph: &Graph) -> Array2<f64> {
    let mut l = adjacency_matrix(graph);
    let n = l.nrows();
    for i in 0..n {
        let weighted_degree: f64 = l.row(i).sum();
        for j in 0..n {
            l[[i, j]] = -l[[i, j]];
        }
        l[[i, i]] = weighted_degree;
    }
    l
}
