//! Maximum-weight matching, unrestricted and bounded to at most k edges
//!
//! The unrestricted optimum comes from the blossom solver. The bounded
//! variant first tries the monotonicity shortcut (an unrestricted
//! optimum that already fits the edge budget cannot be improved), then
//! falls back to an exact branch-and-bound over edges sorted by
//! descending weight, pruned with a prefix-sum optimistic bound. The
//! search is driven by an explicit stack; completeness of the branch
//! space, not tightness of the bound, is what correctness rests on.

use crate::errors::{InvariantError, Result};
use crate::graph::Graph;
use crate::invariants::blossom;

/// Node-count cap for the bounded search (node occupancy is a bitmask)
pub const MAX_MATCHING_NODES: usize = 64;

/// A matching: its total weight and the chosen edges (as node pairs)
#[derive(Debug, Clone, PartialEq)]
pub struct Matching {
    pub weight: f64,
    pub edges: Vec<(usize, usize)>,
}

impl Matching {
    /// The empty matching
    pub fn empty() -> Self {
        Self {
            weight: 0.0,
            edges: Vec::new(),
        }
    }

    /// Number of edges in the matching
    pub fn cardinality(&self) -> usize {
        self.edges.len()
    }
}

/// Exact maximum-weight matching over all cardinalities
pub fn max_matching(g: &Graph) -> Matching {
    let edge_list: Vec<(usize, usize, f64)> =
        g.edges().iter().map(|e| (e.u, e.v, e.weight)).collect();
    let mate = blossom::max_weight_matching(g.node_count(), &edge_list);
    let mut edges = Vec::new();
    let mut weight = 0.0;
    for (v, &m) in mate.iter().enumerate() {
        if m >= 0 && v < m as usize {
            let m = m as usize;
            edges.push((v, m));
            weight += g.weight(v, m).unwrap_or(0.0);
        }
    }
    Matching { weight, edges }
}

/// Exact maximum-weight matching using at most k edges.
///
/// Degenerate cases: k = 0 returns the empty matching; a graph with no
/// edges and k > 0 is an infeasible request.
pub fn max_matching_at_most_k(g: &Graph, k: usize) -> Result<Matching> {
    if k == 0 {
        return Ok(Matching::empty());
    }
    if g.edge_count() == 0 {
        return Err(InvariantError::infeasible(format!(
            "matching with up to {k} edges requested on an edgeless graph"
        )));
    }
    if g.node_count() > MAX_MATCHING_NODES {
        return Err(InvariantError::unsupported_scale(
            "bounded matching",
            g.node_count(),
            MAX_MATCHING_NODES,
        ));
    }

    let unrestricted = max_matching(g);
    if unrestricted.cardinality() <= k {
        // Optimal by monotonicity: discarding edges never helps.
        return Ok(unrestricted);
    }
    Ok(branch_and_bound(g, k))
}

/// Search frame: the next edge to decide plus the partial solution state
struct Frame {
    next: usize,
    used: u64,
    weight: f64,
    chosen: Vec<usize>,
}

fn branch_and_bound(g: &Graph, k: usize) -> Matching {
    let edges = g.edges();
    let m = edges.len();

    // Decision order: descending weight, index as deterministic tie-break.
    let mut order: Vec<usize> = (0..m).collect();
    order.sort_by(|&a, &b| {
        edges[b]
            .weight
            .partial_cmp(&edges[a].weight)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });

    // prefix[i] = total weight of the i heaviest edges; positives is the
    // count of strictly positive weights, so the optimistic gain from
    // position i is prefix[min(i + budget, positives).max(i)] - prefix[i].
    let mut prefix = vec![0.0; m + 1];
    for (i, &e) in order.iter().enumerate() {
        prefix[i + 1] = prefix[i] + edges[e].weight;
    }
    let positives = order
        .iter()
        .take_while(|&&e| edges[e].weight > 0.0)
        .count();

    let mut best_weight = f64::NEG_INFINITY;
    let mut best: Vec<usize> = Vec::new();

    let mut stack = vec![Frame {
        next: 0,
        used: 0,
        weight: 0.0,
        chosen: Vec::new(),
    }];
    while let Some(frame) = stack.pop() {
        if frame.chosen.len() == k || frame.next == m {
            if frame.weight > best_weight {
                best_weight = frame.weight;
                best = frame.chosen;
            }
            continue;
        }

        // Optimistic bound: current weight plus the best achievable from
        // the remaining heaviest edges within the budget.
        let budget = k - frame.chosen.len();
        let reach = (frame.next + budget).min(positives.max(frame.next)).min(m);
        let bound = frame.weight + (prefix[reach] - prefix[frame.next]);
        if bound <= best_weight {
            continue;
        }

        let edge_idx = order[frame.next];
        let e = &edges[edge_idx];
        let mask = (1u64 << e.u) | (1u64 << e.v);

        // Skip branch first so the include branch is explored first.
        stack.push(Frame {
            next: frame.next + 1,
            used: frame.used,
            weight: frame.weight,
            chosen: frame.chosen.clone(),
        });
        if frame.used & mask == 0 {
            let mut chosen = frame.chosen;
            chosen.push(edge_idx);
            stack.push(Frame {
                next: frame.next + 1,
                used: frame.used | mask,
                weight: frame.weight + e.weight,
                chosen,
            });
        }
    }

    let weight = if best_weight.is_finite() { best_weight } else { 0.0 };
    Matching {
        weight,
        edges: best.into_iter().map(|i| (edges[i].u, edges[i].v)).collect(),
    }
}
