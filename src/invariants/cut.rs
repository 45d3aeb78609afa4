//! Exhaustive maximum cut and maximum k-cut
//!
//! Cuts are symmetric under complementation, so the unrestricted search
//! only enumerates subset sizes 1..⌊n/2⌋. Complexity is C(n, k) per
//! size; graphs beyond [`MAX_CUT_NODES`] are rejected loudly instead of
//! silently truncating the enumeration.

use crate::errors::{InvariantError, Result};
use crate::graph::{Graph, SubsetIter};

/// Largest node count the exhaustive cut enumeration accepts
pub const MAX_CUT_NODES: usize = 30;

/// Total weight of edges crossing the bipartition (side, complement)
pub fn cut_value(g: &Graph, side: &[usize]) -> f64 {
    let mut mask = vec![false; g.node_count()];
    for &v in side {
        mask[v] = true;
    }
    g.edges()
        .iter()
        .filter(|e| mask[e.u] != mask[e.v])
        .map(|e| e.weight)
        .sum()
}

fn cut_value_mask(g: &Graph, mask: u64) -> f64 {
    g.edges()
        .iter()
        .filter(|e| (mask >> e.u ^ mask >> e.v) & 1 == 1)
        .map(|e| e.weight)
        .sum()
}

fn check_scale(g: &Graph) -> Result<()> {
    if g.node_count() > MAX_CUT_NODES {
        return Err(InvariantError::unsupported_scale(
            "cut enumeration",
            g.node_count(),
            MAX_CUT_NODES,
        ));
    }
    Ok(())
}

/// Maximum cut value over all bipartitions.
///
/// Returns 0 for graphs with fewer than two nodes.
pub fn max_cut(g: &Graph) -> Result<f64> {
    let n = g.node_count();
    if n < 2 {
        return Ok(0.0);
    }
    check_scale(g)?;
    let mut best = 0.0_f64;
    for size in 1..=(n / 2) {
        for subset in SubsetIter::new(n, size) {
            let mask = subset.iter().fold(0u64, |m, &v| m | (1 << v));
            let value = cut_value_mask(g, mask);
            if value > best {
                best = value;
            }
        }
    }
    Ok(best)
}

/// Maximum cut value over bipartitions where one side has exactly k nodes
pub fn max_k_cut(g: &Graph, k: usize) -> Result<f64> {
    let n = g.node_count();
    if k > n {
        return Err(InvariantError::infeasible(format!(
            "k-cut needs k <= n, got k={k} with n={n}"
        )));
    }
    check_scale(g)?;
    let mut best = f64::NEG_INFINITY;
    for subset in SubsetIter::new(n, k) {
        let mask = subset.iter().fold(0u64, |m, &v| m | (1 << v));
        let value = cut_value_mask(g, mask);
        if value > best {
            best = value;
        }
    }
    Ok(best)
}
