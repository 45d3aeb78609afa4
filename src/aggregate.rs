//! Invariant aggregation: one graph in, one complete record out
//!
//! The graph-level quantities W, C and M are computed once; then for
//! every k in 1..=⌊n/2⌋ the bounded matching, the exact-k cut and the
//! spectral extremes of the k-token graph are attached. Token graphs are
//! built on demand and dropped as soon as their spectrum is extracted.

use crate::codec;
use crate::errors::Result;
use crate::graph::{token_graph, Graph};
use crate::invariants::{max_cut, max_k_cut, max_matching, max_matching_at_most_k, weight_sum};
use crate::spectral::extreme_eigenvalues;
use crate::types::{ConjectureRecord, GraphInvariants, PerKInvariants};

/// Compute every invariant of `g` and assemble the full record.
///
/// Graphs with fewer than two nodes get an empty `k_data`. The record
/// comes back with `failing_conjectures` empty; verification is a
/// separate pass.
pub fn compute_all(g: &Graph) -> Result<ConjectureRecord> {
    let graph_invariants = GraphInvariants {
        w: weight_sum(g),
        c: max_cut(g)?,
        m: max_matching(g).weight,
    };

    let max_k = g.node_count() / 2;
    let mut k_data = Vec::with_capacity(max_k);
    for k in 1..=max_k {
        // An edgeless graph has no matching to bound; report zero rather
        // than surfacing the engine's infeasibility error.
        let m_le_k = if g.edge_count() == 0 {
            0.0
        } else {
            max_matching_at_most_k(g, k)?.weight
        };
        let c_k = max_k_cut(g, k)?;
        let spec = extreme_eigenvalues(&token_graph(g, k)?);
        k_data.push(PerKInvariants { m_le_k, c_k, spec });
    }

    Ok(ConjectureRecord {
        graph: codec::to_node_link(g),
        graph_invariants,
        k_data,
        failing_conjectures: Vec::new(),
    })
}
