//! Laplacian spectrum and algebraic connectivity.
//!
//! Eigenvalues are computed with the cyclic Jacobi rotation method,
//! which is exact-enough and robust for the symmetric matrices this
//! engine produces and for the graph sizes it targets (tens to low
//! hundreds of nodes). Like the Hamiltonian heuristic, this is a
//! superlinear-cost operation; it is not meant for large graphs.

use ndarray::Array2;

use crate::matrix::laplacian_matrix;
use crate::store::Graph;

/// Tolerance for treating an eigenvalue as zero.
///
/// Spectral comparisons ("is the algebraic connectivity zero?") must
/// use this epsilon rather than exact equality; rounding for display
/// is left to the caller.
pub const EPSILON: f64 = 1e-9;

/// Sweeps after which Jacobi iteration gives up. Convergence for the
/// matrices at hand takes far fewer.
const MAX_SWEEPS: usize = 100;

/// Eigenvalues of a symmetric matrix, ascending.
///
/// The input must be symmetric; only the symmetric part drives the
/// rotations, so asymmetry silently produces nonsense.
#[must_use]
pub fn symmetric_eigenvalues(mut a: Array2<f64>) -> Vec<f64> {
    let n = a.nrows();
    if n == 0 {
        return Vec::new();
    }

    let scale: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt().max(1.0);

    for _ in 0..MAX_SWEEPS {
        let off: f64 = off_diagonal_norm(&a);
        if off < (EPSILON * scale).powi(2) {
            break;
        }

        for p in 0..n {
            for q in (p + 1)..n {
                rotate(&mut a, p, q);
            }
        }
    }

    let mut eigenvalues: Vec<f64> = (0..n).map(|i| a[[i, i]]).collect();
    eigenvalues.sort_by(|x, y| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal));
    eigenvalues
}

/// Sum of squares of the off-diagonal entries.
fn off_diagonal_norm(a: &Array2<f64>) -> f64 {
    let n = a.nrows();
    let mut sum = 0.0;
    for i in 0..n {
        for j in 0..n {
            if i != j {
                sum += a[[i, j]] * a[[i, j]];
            }
        }
    }
    sum
}

/// One Jacobi rotation annihilating `a[[p, q]]`.
fn rotate(a: &mut Array2<f64>, p: usize, q: usize) {
    let apq = a[[p, q]];
    if apq.abs() < f64::MIN_POSITIVE {
        return;
    }

    let theta = (a[[q, q]] - a[[p, p]]) / (2.0 * apq);
    // Smaller-magnitude root of t^2 + 2*theta*t - 1 = 0 for stability.
    let t = theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt());
    let c = 1.0 / (t * t + 1.0).sqrt();
    let s = t * c;

    let n = a.nrows();
    for k in 0..n {
        let akp = a[[k, p]];
        let akq = a[[k, q]];
        a[[k, p]] = c * akp - s * akq;
        a[[k, q]] = s * akp + c * akq;
    }
    for k in 0..n {
        let apk = a[[p, k]];
        let aqk = a[[q, k]];
        a[[p, k]] = c * apk - s * aqk;
        a[[q, k]] = s * apk + c * aqk;
    }
}

/// Eigenvalues of the graph Laplacian, ascending.
///
/// The smallest is always 0 (within [`EPSILON`]); the multiplicity of
/// zero equals the number of connected components.
#[must_use]
pub fn laplacian_spectrum(graph: &Graph) -> Vec<f64> {
    symmetric_eigenvalues(laplacian_matrix(graph))
}

/// The algebraic connectivity: the second-smallest Laplacian
/// eigenvalue.
///
/// Strictly positive for a connected graph, zero (within [`EPSILON`])
/// for a disconnected one. `None` when the graph has fewer than two
/// nodes.
#[must_use]
pub fn algebraic_connectivity(graph: &Graph) -> Option<f64> {
    laplacian_spectrum(graph).get(1).copied()
}
