//! k-token graph construction
//!
//! The k-token graph of G has one node per k-element subset of G's
//! nodes; two subsets are adjacent iff their symmetric difference is a
//! single pair {u, v} with (u, v) an edge of G, and the token edge
//! inherits that edge's weight. Token graphs are rebuilt from scratch for
//! every (G, k) pair and never cached; callers must not assume reuse.

use crate::errors::{InvariantError, Result};
use crate::graph::model::Graph;
use crate::graph::subsets::{binomial, SubsetIter};
use rustc_hash::FxHashMap;

/// Largest token graph the spectral engine will diagonalize
pub const MAX_TOKEN_NODES: usize = 4096;

/// Build the k-token graph of `g`.
///
/// Token nodes are the C(n, k) subsets in lexicographic order, so the
/// k = 1 token graph is G itself up to node order.
pub fn token_graph(g: &Graph, k: usize) -> Result<Graph> {
    let n = g.node_count();
    if k > n {
        return Err(InvariantError::infeasible(format!(
            "token graph needs k <= n, got k={k} with n={n}"
        )));
    }
    let token_count = binomial(n, k);
    if token_count > MAX_TOKEN_NODES {
        return Err(InvariantError::unsupported_scale(
            "token graph",
            token_count,
            MAX_TOKEN_NODES,
        ));
    }

    let subsets: Vec<Vec<usize>> = SubsetIter::new(n, k).collect();
    let mut index: FxHashMap<Vec<usize>, usize> =
        FxHashMap::with_capacity_and_hasher(token_count, Default::default());
    for (i, subset) in subsets.iter().enumerate() {
        index.insert(subset.clone(), i);
    }

    let mut tokens = Graph::new(token_count);
    for (si, subset) in subsets.iter().enumerate() {
        for &u in subset {
            for (v, weight) in g.neighbors(u) {
                if subset.binary_search(&v).is_ok() {
                    continue;
                }
                // Substitute u -> v; the neighbor subset stays sorted.
                let mut neighbor: Vec<usize> =
                    subset.iter().copied().filter(|&x| x != u).collect();
                let pos = neighbor.partition_point(|&x| x < v);
                neighbor.insert(pos, v);
                let ti = index[&neighbor];
                if si < ti {
                    tokens.add_edge(si, ti, weight)?;
                }
            }
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::from_weighted_edges(3, &[(0, 1, 1.0), (0, 2, 1.0), (1, 2, 1.0)]).unwrap()
    }

    #[test]
    fn test_one_token_graph_matches_base() {
        let g = Graph::from_weighted_edges(4, &[(0, 1, 2.0), (1, 2, 0.5), (2, 3, 1.5)]).unwrap();
        let t = token_graph(&g, 1).unwrap();
        assert_eq!(t.node_count(), g.node_count());
        assert_eq!(t.edge_count(), g.edge_count());
        // Subsets {i} enumerate in node order, so weights line up directly.
        assert_eq!(t.weight(0, 1), Some(2.0));
        assert_eq!(t.weight(1, 2), Some(0.5));
        assert_eq!(t.weight(2, 3), Some(1.5));
    }

    #[test]
    fn test_triangle_two_token_graph() {
        // F_2(C3) is again a triangle: each 2-subset pair differs by one
        // substitution along an edge.
        let t = token_graph(&triangle(), 2).unwrap();
        assert_eq!(t.node_count(), 3);
        assert_eq!(t.edge_count(), 3);
    }

    #[test]
    fn test_k4_two_token_graph_is_octahedron() {
        let edges: Vec<(usize, usize, f64)> = (0..4)
            .flat_map(|u| ((u + 1)..4).map(move |v| (u, v, 1.0)))
            .collect();
        let g = Graph::from_weighted_edges(4, &edges).unwrap();
        let t = token_graph(&g, 2).unwrap();
        // 6 token nodes, every pair adjacent except complementary subsets.
        assert_eq!(t.node_count(), 6);
        assert_eq!(t.edge_count(), 12);
        for i in 0..6 {
            assert_eq!(t.neighbors(i).count(), 4);
        }
    }

    #[test]
    fn test_edgeless_token_graph() {
        let g = Graph::new(4);
        let t = token_graph(&g, 2).unwrap();
        assert_eq!(t.node_count(), 6);
        assert_eq!(t.edge_count(), 0);
    }

    #[test]
    fn test_k_larger_than_n_rejected() {
        assert!(token_graph(&triangle(), 4).is_err());
    }
}
