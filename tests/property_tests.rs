//! Randomized cross-checks of the engines against brute-force oracles
//!
//! Graphs stay small enough for exhaustive oracles, and weights are
//! dyadic (multiples of 1/4) so floating-point sums are exact and the
//! oracle comparison can be tight.

use proptest::prelude::*;
use token_spectra::graph::Edge;
use token_spectra::{
    compute_all, extreme_eigenvalues, max_cut, max_k_cut, max_matching, max_matching_at_most_k,
    token_graph, ConjectureRecord, Graph, RatioAccumulator, VerifyOutcome,
};

fn arb_graph(max_n: usize) -> impl Strategy<Value = Graph> {
    (2..=max_n).prop_flat_map(|n| {
        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|u| ((u + 1)..n).map(move |v| (u, v)))
            .collect();
        let slots = pairs.len();
        proptest::collection::vec(proptest::option::of(1u32..=16), slots).prop_map(
            move |weights| {
                let edges: Vec<(usize, usize, f64)> = pairs
                    .iter()
                    .zip(weights)
                    .filter_map(|(&(u, v), w)| w.map(|w| (u, v, f64::from(w) / 4.0)))
                    .collect();
                Graph::from_weighted_edges(n, &edges).unwrap()
            },
        )
    })
}

fn brute_force_matching(edges: &[Edge], used: u64, budget: usize) -> f64 {
    match edges.split_first() {
        None => 0.0,
        Some((e, rest)) => {
            let skip = brute_force_matching(rest, used, budget);
            let mask = (1u64 << e.u) | (1u64 << e.v);
            if budget > 0 && used & mask == 0 {
                let take = e.weight + brute_force_matching(rest, used | mask, budget - 1);
                skip.max(take)
            } else {
                skip
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn matching_agrees_with_brute_force(g in arb_graph(7)) {
        let expected = brute_force_matching(g.edges(), 0, g.edges().len());
        let m = max_matching(&g);
        prop_assert!((m.weight - expected).abs() < 1e-9,
            "blossom {} vs brute force {expected}", m.weight);
    }

    #[test]
    fn bounded_matching_agrees_with_brute_force(g in arb_graph(7)) {
        prop_assume!(g.edge_count() > 0);
        let mut prev = 0.0;
        for k in 0..=g.node_count() / 2 + 1 {
            let expected = brute_force_matching(g.edges(), 0, k);
            let m = max_matching_at_most_k(&g, k).unwrap();
            prop_assert!((m.weight - expected).abs() < 1e-9, "k={k}");
            prop_assert!(m.cardinality() <= k);
            // Weight is monotone in the edge budget.
            prop_assert!(m.weight >= prev - 1e-9);
            prev = m.weight;
        }
        prop_assert!((prev - max_matching(&g).weight).abs() < 1e-9);
    }

    #[test]
    fn max_cut_is_best_over_all_sizes(g in arb_graph(8)) {
        let overall = max_cut(&g).unwrap();
        let best_by_size = (0..=g.node_count())
            .map(|k| max_k_cut(&g, k).unwrap())
            .fold(f64::NEG_INFINITY, f64::max);
        prop_assert!((overall - best_by_size).abs() < 1e-9);
        prop_assert!(overall >= 0.0);
    }

    #[test]
    fn one_token_graph_is_isomorphic_to_base(g in arb_graph(7)) {
        let t = token_graph(&g, 1).unwrap();
        prop_assert_eq!(t.node_count(), g.node_count());
        prop_assert_eq!(t.edge_count(), g.edge_count());
        prop_assert_eq!(extreme_eigenvalues(&t), extreme_eigenvalues(&g));
    }

    #[test]
    fn token_graph_edge_weights_come_from_base(g in arb_graph(6), k in 1usize..=3) {
        prop_assume!(k <= g.node_count());
        let t = token_graph(&g, k).unwrap();
        let base_weights: Vec<f64> = {
            let mut w: Vec<f64> = g.edges().iter().map(|e| e.weight).collect();
            w.sort_by(|a, b| a.partial_cmp(b).unwrap());
            w.dedup();
            w
        };
        for e in t.edges() {
            prop_assert!(base_weights.iter().any(|&w| (w - e.weight).abs() < 1e-12));
        }
    }

    #[test]
    fn record_round_trips_through_json(g in arb_graph(6)) {
        let record = compute_all(&g).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let back: ConjectureRecord = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, record);
    }

    #[test]
    fn verification_always_completes(g in arb_graph(6)) {
        let record = compute_all(&g).unwrap();
        let outcome = token_spectra::verify_record(&record).unwrap();
        // Ratio checks are present exactly when the record is nontrivial.
        if g.edge_count() > 0 && record.max_k() > 0 {
            prop_assert!(outcome.qmc_ratio.is_some());
            prop_assert!(outcome.xy_ratio.is_some());
        }
    }

    #[test]
    fn accumulator_merge_matches_sequential_observation(
        ratios in proptest::collection::vec(
            (proptest::option::of(0.1f64..2.0), proptest::option::of(0.1f64..2.0)),
            0..12,
        ),
        split in 0usize..12,
    ) {
        let outcomes: Vec<VerifyOutcome> = ratios
            .into_iter()
            .map(|(qmc_ratio, xy_ratio)| VerifyOutcome {
                failures: Vec::new(),
                qmc_ratio,
                xy_ratio,
            })
            .collect();
        let split = split.min(outcomes.len());

        let mut sequential = RatioAccumulator::new();
        for o in &outcomes {
            sequential.observe(o);
        }

        let mut left = RatioAccumulator::new();
        for o in &outcomes[..split] {
            left.observe(o);
        }
        let mut right = RatioAccumulator::new();
        for o in &outcomes[split..] {
            right.observe(o);
        }
        left.merge(&right);
        prop_assert_eq!(left, sequential);
    }
}
