//! Conjecture clauses and the per-record verifier
//!
//! Every clause compares exact combinatorial quantities against rounded
//! spectral extremes, so all comparisons carry an additive slack of
//! [`TOL`] in the direction that avoids false alarms. A violated clause
//! is data (a failure message on the record), never an error; the only
//! error a verifier can raise is structural, when the per-k table does
//! not cover 1..⌊n/2⌋.

use crate::errors::{InvariantError, Result};
use crate::types::{ConjectureRecord, TOL};
use std::collections::BTreeMap;
use std::fmt;

/// The individual inequalities checked per record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConjectureClause {
    /// `Lk_max <= (W + C)/2 + M_k`
    LaplacianCutBound,
    /// `Lk_max <= W + M_k`
    LaplacianWeightBound,
    /// `Qk_max <= W + M_k`
    SignlessWeightBound,
    /// `-Ak_min <= C/2 + M_k/2`
    AdjacencyCutBound,
    /// `Ak_max <= W/2 + M_k/2`
    AdjacencyWeightBound,
    /// `Lk_max` non-decreasing in k
    LaplacianMonotone,
    /// `Qk_max` non-decreasing in k
    SignlessMonotone,
    /// `Ak_max` non-decreasing in k
    AdjacencyMonotone,
    /// `max((3M + W)/2, C) / L_max >= 3/4`
    QmcRatio,
    /// `(max(M, C) + nA_max) / (A_max + nA_max) >= 3/4`
    XyRatio,
}

impl ConjectureClause {
    /// The inequality in the notation the records use
    pub fn description(self) -> &'static str {
        match self {
            Self::LaplacianCutBound => "Lk_max <= (W+C)/2 + M_k",
            Self::LaplacianWeightBound => "Lk_max <= W + M_k",
            Self::SignlessWeightBound => "Qk_max <= W + M_k",
            Self::AdjacencyCutBound => "-Ak_min <= C/2 + M_k/2",
            Self::AdjacencyWeightBound => "Ak_max <= W/2 + M_k/2",
            Self::LaplacianMonotone => "Lk_max non-decreasing in k",
            Self::SignlessMonotone => "Qk_max non-decreasing in k",
            Self::AdjacencyMonotone => "Ak_max non-decreasing in k",
            Self::QmcRatio => "max((3M+W)/2, C) / L_max >= 3/4",
            Self::XyRatio => "(max(M,C) + nA_max) / (A_max + nA_max) >= 3/4",
        }
    }
}

/// One violated clause, located at a k level or at the graph level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConjectureFailure {
    pub clause: ConjectureClause,
    /// `None` for the graph-level ratio clauses
    pub k: Option<usize>,
}

impl fmt::Display for ConjectureFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.k {
            Some(k) => write!(f, "{} failed at k={k}", self.clause.description()),
            None => write!(f, "{} failed at graph level", self.clause.description()),
        }
    }
}

/// Verification result for one record
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyOutcome {
    pub failures: Vec<ConjectureFailure>,
    /// QMC ratio, `None` when the check was skipped (`L_max <= TOL`)
    pub qmc_ratio: Option<f64>,
    /// XY ratio, `None` when the spread is degenerate
    pub xy_ratio: Option<f64>,
}

impl VerifyOutcome {
    /// Whether every clause held
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failure messages in record form
    pub fn messages(&self) -> Vec<String> {
        self.failures.iter().map(|f| f.to_string()).collect()
    }
}

/// Check every conjecture clause against one record.
///
/// Fails with `MalformedRecord` when `k_data` does not cover exactly
/// 1..⌊n/2⌋ for the record's graph; otherwise always completes, however
/// many clauses are violated.
pub fn verify_record(record: &ConjectureRecord) -> Result<VerifyOutcome> {
    let expected_k = record.graph.node_count() / 2;
    if record.k_data.len() != expected_k {
        return Err(InvariantError::malformed(format!(
            "k_data covers {} levels, expected {expected_k} for {} nodes",
            record.k_data.len(),
            record.graph.node_count()
        )));
    }

    let inv = &record.graph_invariants;
    let (w, c) = (inv.w, inv.c);
    let mut failures = Vec::new();

    let mut prev: Option<(f64, f64, f64)> = None;
    for (i, data) in record.k_data.iter().enumerate() {
        let k = i + 1;
        let mk = data.m_le_k;
        let (a, l, q) = (data.spec.a, data.spec.l, data.spec.q);

        let mut check = |clause, lhs: f64, rhs: f64| {
            if lhs > rhs + TOL {
                failures.push(ConjectureFailure {
                    clause,
                    k: Some(k),
                });
            }
        };
        check(ConjectureClause::LaplacianCutBound, l.max, (w + c) / 2.0 + mk);
        check(ConjectureClause::LaplacianWeightBound, l.max, w + mk);
        check(ConjectureClause::SignlessWeightBound, q.max, w + mk);
        check(ConjectureClause::AdjacencyCutBound, -a.min, c / 2.0 + mk / 2.0);
        check(ConjectureClause::AdjacencyWeightBound, a.max, w / 2.0 + mk / 2.0);

        if let Some((pl, pq, pa)) = prev {
            check(ConjectureClause::LaplacianMonotone, pl, l.max);
            check(ConjectureClause::SignlessMonotone, pq, q.max);
            check(ConjectureClause::AdjacencyMonotone, pa, a.max);
        }
        prev = Some((l.max, q.max, a.max));
    }

    // Graph-level ratio clauses over the k-aggregates.
    let mut qmc_ratio = None;
    let mut xy_ratio = None;
    if !record.k_data.is_empty() {
        let l_max = record
            .k_data
            .iter()
            .fold(f64::NEG_INFINITY, |m, d| m.max(d.spec.l.max));
        let a_max = record
            .k_data
            .iter()
            .fold(f64::NEG_INFINITY, |m, d| m.max(d.spec.a.max));
        let na_max = record
            .k_data
            .iter()
            .fold(f64::NEG_INFINITY, |m, d| m.max(-d.spec.a.min));
        let m = inv.m;

        if l_max > TOL {
            let ratio = ((3.0 * m + w) / 2.0).max(c) / l_max;
            if ratio < 0.75 - TOL {
                failures.push(ConjectureFailure {
                    clause: ConjectureClause::QmcRatio,
                    k: None,
                });
            }
            qmc_ratio = Some(ratio);
        }

        let spread = a_max + na_max;
        if spread > TOL {
            let ratio = (m.max(c) + na_max) / spread;
            if ratio < 0.75 - TOL {
                failures.push(ConjectureFailure {
                    clause: ConjectureClause::XyRatio,
                    k: None,
                });
            }
            xy_ratio = Some(ratio);
        }
    }

    Ok(VerifyOutcome {
        failures,
        qmc_ratio,
        xy_ratio,
    })
}

/// Verify a record and write the failure messages back onto it
pub fn verify_and_tag(record: &mut ConjectureRecord) -> Result<VerifyOutcome> {
    let outcome = verify_record(record)?;
    record.failing_conjectures = outcome.messages();
    Ok(outcome)
}

/// Running minimum of each named ratio across a corpus.
///
/// Workers keep their own accumulator and the driver merges them by
/// pointwise minimum, so the result is order-independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioAccumulator {
    qmc: f64,
    xy: f64,
}

impl RatioAccumulator {
    pub fn new() -> Self {
        Self {
            qmc: f64::INFINITY,
            xy: f64::INFINITY,
        }
    }

    /// Fold one record's outcome into the running minima
    pub fn observe(&mut self, outcome: &VerifyOutcome) {
        if let Some(r) = outcome.qmc_ratio {
            self.qmc = self.qmc.min(r);
        }
        if let Some(r) = outcome.xy_ratio {
            self.xy = self.xy.min(r);
        }
    }

    /// Combine two accumulators by pointwise minimum
    pub fn merge(&mut self, other: &Self) {
        self.qmc = self.qmc.min(other.qmc);
        self.xy = self.xy.min(other.xy);
    }

    /// Flat name → worst-observed-value map; ratios never observed are
    /// left out instead of serializing an infinity.
    pub fn to_stats(&self) -> BTreeMap<String, f64> {
        let mut stats = BTreeMap::new();
        if self.qmc.is_finite() {
            stats.insert("qmc_ratio".to_string(), self.qmc);
        }
        if self.xy.is_finite() {
            stats.insert("xy_ratio".to_string(), self.xy);
        }
        stats
    }
}

impl Default for RatioAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::compute_all;
    use crate::graph::Graph;

    fn triangle_record() -> ConjectureRecord {
        let g = Graph::from_weighted_edges(3, &[(0, 1, 1.0), (0, 2, 1.0), (1, 2, 1.0)]).unwrap();
        compute_all(&g).unwrap()
    }

    fn k4_record() -> ConjectureRecord {
        let edges: Vec<(usize, usize, f64)> = (0..4)
            .flat_map(|u| ((u + 1)..4).map(move |v| (u, v, 1.0)))
            .collect();
        compute_all(&Graph::from_weighted_edges(4, &edges).unwrap()).unwrap()
    }

    #[test]
    fn test_triangle_passes_with_unit_ratios() {
        let outcome = verify_record(&triangle_record()).unwrap();
        assert!(outcome.passed(), "failures: {:?}", outcome.failures);
        // QMC: max((3+3)/2, 2) / 3 = 1; XY: (2 + 1) / (2 + 1) = 1.
        assert!((outcome.qmc_ratio.unwrap() - 1.0).abs() < 1e-6);
        assert!((outcome.xy_ratio.unwrap() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_k4_passes() {
        let outcome = verify_record(&k4_record()).unwrap();
        assert!(outcome.passed(), "failures: {:?}", outcome.failures);
    }

    #[test]
    fn test_injected_monotonicity_violation() {
        let mut record = k4_record();
        record.k_data[1].spec.l.max = 1.0;
        let outcome = verify_record(&record).unwrap();
        let monotone: Vec<_> = outcome
            .failures
            .iter()
            .filter(|f| f.clause == ConjectureClause::LaplacianMonotone)
            .collect();
        assert_eq!(monotone.len(), 1);
        assert_eq!(monotone[0].k, Some(2));
        assert_eq!(
            monotone[0].to_string(),
            "Lk_max non-decreasing in k failed at k=2"
        );
    }

    #[test]
    fn test_injected_bound_violation() {
        let mut record = triangle_record();
        record.k_data[0].spec.q.max = 100.0;
        let outcome = verify_record(&record).unwrap();
        assert!(outcome
            .failures
            .iter()
            .any(|f| f.clause == ConjectureClause::SignlessWeightBound && f.k == Some(1)));
    }

    #[test]
    fn test_verify_and_tag_writes_messages() {
        let mut record = triangle_record();
        record.k_data[0].spec.l.max = 100.0;
        let outcome = verify_and_tag(&mut record).unwrap();
        assert!(!outcome.passed());
        assert!(record.is_failing());
        assert_eq!(record.failing_conjectures, outcome.messages());
        assert!(record.failing_conjectures[0].contains("failed at k=1"));
    }

    #[test]
    fn test_incomplete_k_data_is_malformed() {
        let mut record = k4_record();
        record.k_data.pop();
        assert!(matches!(
            verify_record(&record),
            Err(InvariantError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_empty_k_data_skips_ratios() {
        let record = compute_all(&Graph::new(1)).unwrap();
        let outcome = verify_record(&record).unwrap();
        assert!(outcome.passed());
        assert_eq!(outcome.qmc_ratio, None);
        assert_eq!(outcome.xy_ratio, None);
    }

    #[test]
    fn test_tolerance_absorbs_rounding() {
        // Push the Laplacian max just past the bound, within TOL.
        let mut record = triangle_record();
        let bound = (record.graph_invariants.w + record.graph_invariants.c) / 2.0
            + record.k_data[0].m_le_k;
        record.k_data[0].spec.l.max = bound + TOL / 2.0;
        assert!(verify_record(&record).unwrap().passed());

        record.k_data[0].spec.l.max = bound + TOL * 10.0;
        assert!(!verify_record(&record).unwrap().passed());
    }

    #[test]
    fn test_accumulator_tracks_minimum_and_merges() {
        let outcome_a = VerifyOutcome {
            failures: Vec::new(),
            qmc_ratio: Some(0.9),
            xy_ratio: Some(1.2),
        };
        let outcome_b = VerifyOutcome {
            failures: Vec::new(),
            qmc_ratio: Some(0.8),
            xy_ratio: None,
        };

        let mut seq = RatioAccumulator::new();
        seq.observe(&outcome_a);
        seq.observe(&outcome_b);

        let mut left = RatioAccumulator::new();
        left.observe(&outcome_a);
        let mut right = RatioAccumulator::new();
        right.observe(&outcome_b);
        left.merge(&right);

        assert_eq!(left, seq);
        let stats = seq.to_stats();
        assert_eq!(stats.get("qmc_ratio"), Some(&0.8));
        assert_eq!(stats.get("xy_ratio"), Some(&1.2));
    }

    #[test]
    fn test_empty_accumulator_serializes_empty() {
        assert!(RatioAccumulator::new().to_stats().is_empty());
    }
}
