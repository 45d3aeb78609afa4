//! Combinatorial invariant engine
//!
//! Exact computations only: total weight, maximum-weight matching
//! (unrestricted and edge-count-bounded) and exhaustive maximum cut /
//! k-cut. No approximation heuristics anywhere; the intended corpus
//! keeps graphs small enough for the combinatorial enumerations.

mod blossom;
pub mod cut;
pub mod matching;

pub use cut::{cut_value, max_cut, max_k_cut, MAX_CUT_NODES};
pub use matching::{max_matching, max_matching_at_most_k, Matching, MAX_MATCHING_NODES};

use crate::graph::Graph;

/// Sum of all edge weights; O(|E|)
pub fn weight_sum(g: &Graph) -> f64 {
    g.edges().iter().map(|e| e.weight).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_sum() {
        let g = Graph::from_weighted_edges(3, &[(0, 1, 1.5), (1, 2, 2.5)]).unwrap();
        assert_eq!(weight_sum(&g), 4.0);
        assert_eq!(weight_sum(&Graph::new(5)), 0.0);
    }
}
