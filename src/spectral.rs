//! Spectral engine: extreme eigenvalues of A, L and Q
//!
//! For a weighted graph with adjacency A and weighted-degree diagonal D,
//! the engine reports the minimum and maximum eigenvalue of A, of the
//! Laplacian L = D - A and of the signless Laplacian Q = D + A. All
//! three matrices are symmetric, so the eigenvalues are real. Only the
//! extremes are reported; the conjectures never look at the interior of
//! the spectrum. Values are rounded to [`SPECTRAL_DECIMALS`] digits so
//! that solver noise does not leak into comparisons against exact
//! combinatorial quantities.

use crate::graph::Graph;
use crate::types::{SpectralRange, SpectralTriple, SPECTRAL_DECIMALS};
use nalgebra::{DMatrix, SymmetricEigen};

/// Round to a fixed number of decimal digits
pub fn round_decimals(x: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (x * factor).round() / factor
}

/// Weighted adjacency matrix of `g`
fn adjacency(g: &Graph) -> DMatrix<f64> {
    let n = g.node_count();
    let mut a = DMatrix::zeros(n, n);
    for e in g.edges() {
        a[(e.u, e.v)] = e.weight;
        a[(e.v, e.u)] = e.weight;
    }
    a
}

fn extremes(matrix: DMatrix<f64>) -> SpectralRange {
    let eigen = SymmetricEigen::new(matrix);
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &value in eigen.eigenvalues.iter() {
        min = min.min(value);
        max = max.max(value);
    }
    SpectralRange {
        min: round_decimals(min, SPECTRAL_DECIMALS),
        max: round_decimals(max, SPECTRAL_DECIMALS),
    }
}

/// Extreme eigenvalues of the A, L and Q matrices of `g`.
///
/// A graph with no edges (including the empty graph) has all-zero
/// matrices and reports zero for all six quantities.
pub fn extreme_eigenvalues(g: &Graph) -> SpectralTriple {
    if g.edge_count() == 0 {
        return SpectralTriple::ZERO;
    }
    let n = g.node_count();
    let a = adjacency(g);
    let mut l = DMatrix::zeros(n, n);
    let mut q = DMatrix::zeros(n, n);
    for i in 0..n {
        let degree = g.weighted_degree(i);
        for j in 0..n {
            l[(i, j)] = -a[(i, j)];
            q[(i, j)] = a[(i, j)];
        }
        l[(i, i)] += degree;
        q[(i, i)] += degree;
    }
    SpectralTriple {
        a: extremes(a),
        l: extremes(l),
        q: extremes(q),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_round_decimals() {
        assert_eq!(round_decimals(1.23456789, 6), 1.234568);
        assert_eq!(round_decimals(-0.0000004, 6), -0.0);
        assert_eq!(round_decimals(2.5, 0), 3.0);
    }

    #[test]
    fn test_triangle_spectrum() {
        // C3: A has eigenvalues {2, -1, -1}; L = 2I - A gives {0, 3, 3};
        // Q = 2I + A gives {4, 1, 1}.
        let g = Graph::from_weighted_edges(3, &[(0, 1, 1.0), (0, 2, 1.0), (1, 2, 1.0)]).unwrap();
        let spec = extreme_eigenvalues(&g);
        assert!(close(spec.a.max, 2.0), "A max {}", spec.a.max);
        assert!(close(spec.a.min, -1.0));
        assert!(close(spec.l.min, 0.0));
        assert!(close(spec.l.max, 3.0));
        assert!(close(spec.q.min, 1.0));
        assert!(close(spec.q.max, 4.0));
    }

    #[test]
    fn test_single_edge_spectrum() {
        // K2: A eigenvalues {1, -1}, L {0, 2}, Q {0, 2}.
        let g = Graph::from_weighted_edges(2, &[(0, 1, 1.0)]).unwrap();
        let spec = extreme_eigenvalues(&g);
        assert!(close(spec.a.min, -1.0) && close(spec.a.max, 1.0));
        assert!(close(spec.l.min, 0.0) && close(spec.l.max, 2.0));
        assert!(close(spec.q.min, 0.0) && close(spec.q.max, 2.0));
    }

    #[test]
    fn test_weights_scale_spectrum() {
        let g = Graph::from_weighted_edges(2, &[(0, 1, 2.5)]).unwrap();
        let spec = extreme_eigenvalues(&g);
        assert!(close(spec.a.max, 2.5));
        assert!(close(spec.l.max, 5.0));
        assert!(close(spec.q.max, 5.0));
    }

    #[test]
    fn test_edgeless_graph_is_all_zero() {
        assert_eq!(extreme_eigenvalues(&Graph::new(5)), SpectralTriple::ZERO);
        assert_eq!(extreme_eigenvalues(&Graph::new(0)), SpectralTriple::ZERO);
    }
}
