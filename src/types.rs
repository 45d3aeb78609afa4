//! Core data model for token_spectra
//!
//! Defines the invariant records exchanged between the combinatorial
//! engine, the spectral engine, the aggregator and the conjecture
//! verifier, together with their wire representation.
//!
//! On the wire (node-link jsonl corpora) the per-k data is a map keyed by
//! stringified k, matching the corpus format. In memory it is a plain
//! `Vec` indexed by k - 1, which gives compile-time field validation and
//! removes the integer-vs-string key ambiguity of the map form.

use crate::codec::NodeLinkGraph;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Numeric tolerance used as additive slack on both sides of every
/// conjecture inequality, absorbing eigensolver rounding.
///
/// Changing this changes which near-boundary records are flagged.
pub const TOL: f64 = 1e-8;

/// Decimal digits that spectral extremes are rounded to before being
/// compared against exact combinatorial quantities.
pub const SPECTRAL_DECIMALS: i32 = 6;

/// Minimum and maximum eigenvalue of one symmetric matrix
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectralRange {
    pub min: f64,
    pub max: f64,
}

impl SpectralRange {
    /// The all-zero range reported for matrices of an edgeless graph
    pub const ZERO: Self = Self { min: 0.0, max: 0.0 };
}

/// Eigenvalue extremes of the adjacency (A), Laplacian (L = D - A) and
/// signless Laplacian (Q = D + A) matrices of one graph
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectralTriple {
    #[serde(rename = "A")]
    pub a: SpectralRange,
    #[serde(rename = "L")]
    pub l: SpectralRange,
    #[serde(rename = "Q")]
    pub q: SpectralRange,
}

impl SpectralTriple {
    /// Triple reported for a graph with no edges
    pub const ZERO: Self = Self {
        a: SpectralRange::ZERO,
        l: SpectralRange::ZERO,
        q: SpectralRange::ZERO,
    };
}

/// Graph-level, k-independent invariants, computed once per graph
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphInvariants {
    /// Sum of all edge weights
    #[serde(rename = "W")]
    pub w: f64,
    /// Maximum cut value over all bipartitions
    #[serde(rename = "C")]
    pub c: f64,
    /// Maximum-weight matching value, unrestricted cardinality
    #[serde(rename = "M")]
    pub m: f64,
}

/// Invariants attached to one k in 1..=⌊n/2⌋
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerKInvariants {
    /// Maximum-weight matching using at most k edges
    #[serde(rename = "M_le_k")]
    pub m_le_k: f64,
    /// Maximum cut over bipartitions where one side has exactly k nodes
    #[serde(rename = "C_k")]
    pub c_k: f64,
    /// Eigenvalue extremes of the k-token graph's A, L and Q matrices
    pub spec: SpectralTriple,
}

/// The complete output unit: one graph with all of its invariants.
///
/// Constructed once by the aggregator, consumed exactly once by the
/// verifier, then discarded or persisted (if any conjecture failed) with
/// the attached failure messages.
#[derive(Debug, Clone, PartialEq)]
pub struct ConjectureRecord {
    /// Node-link view of the graph (topology, weights, opaque metadata)
    pub graph: NodeLinkGraph,
    /// W, C, M
    pub graph_invariants: GraphInvariants,
    /// `k_data[i]` holds the invariants for k = i + 1
    pub k_data: Vec<PerKInvariants>,
    /// Human-readable messages for every violated conjecture clause;
    /// empty for passing records
    pub failing_conjectures: Vec<String>,
}

impl ConjectureRecord {
    /// Largest k covered by this record (0 when `k_data` is empty)
    pub fn max_k(&self) -> usize {
        self.k_data.len()
    }

    /// Whether any conjecture clause failed for this record
    pub fn is_failing(&self) -> bool {
        !self.failing_conjectures.is_empty()
    }

    /// Per-k invariants for a given k (1-based)
    pub fn at_k(&self, k: usize) -> Option<&PerKInvariants> {
        if k == 0 {
            return None;
        }
        self.k_data.get(k - 1)
    }
}

/// Wire layout: `k_data` keyed by stringified k, `failing_conjectures`
/// omitted when empty.
#[derive(Serialize, Deserialize)]
struct RecordWire {
    graph: NodeLinkGraph,
    graph_invariants: GraphInvariants,
    k_data: BTreeMap<String, PerKInvariants>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    failing_conjectures: Vec<String>,
}

impl Serialize for ConjectureRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let k_data = self
            .k_data
            .iter()
            .enumerate()
            .map(|(i, inv)| ((i + 1).to_string(), inv.clone()))
            .collect();
        RecordWire {
            graph: self.graph.clone(),
            graph_invariants: self.graph_invariants,
            k_data,
            failing_conjectures: self.failing_conjectures.clone(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ConjectureRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let wire = RecordWire::deserialize(deserializer)?;
        let max_k = wire.k_data.len();
        let mut k_data: Vec<Option<PerKInvariants>> = vec![None; max_k];
        for (key, inv) in wire.k_data {
            let k: usize = key
                .parse()
                .map_err(|_| D::Error::custom(format!("non-integer k_data key `{key}`")))?;
            if k == 0 || k > max_k {
                return Err(D::Error::custom(format!(
                    "k_data keys must cover 1..={max_k}, got {k}"
                )));
            }
            k_data[k - 1] = Some(inv);
        }
        let k_data = k_data
            .into_iter()
            .enumerate()
            .map(|(i, inv)| inv.ok_or_else(|| D::Error::custom(format!("missing k_data[{}]", i + 1))))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self {
            graph: wire.graph,
            graph_invariants: wire.graph_invariants,
            k_data,
            failing_conjectures: wire.failing_conjectures,
        })
    }
}
