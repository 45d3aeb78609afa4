//! token-spectra: combinatorial and spectral invariants of weighted
//! graphs and their k-token graphs, with conjecture verification over
//! record corpora.
//!
//! The pipeline has three stages. The invariant engines compute exact
//! combinatorial quantities (total weight, maximum cut, maximum-weight
//! matchings bounded and unbounded) and the extreme eigenvalues of the
//! adjacency, Laplacian and signless Laplacian matrices of every k-token
//! graph. The aggregator assembles one [`ConjectureRecord`] per graph.
//! The verifier checks a family of spectral-vs-combinatorial inequality
//! clauses per record and tracks the worst graph-level ratios across a
//! corpus.
//!
//! ```
//! use token_spectra::{compute_all, verify_record, Graph};
//!
//! let g = Graph::from_weighted_edges(3, &[(0, 1, 1.0), (0, 2, 1.0), (1, 2, 1.0)])?;
//! let record = compute_all(&g)?;
//! let outcome = verify_record(&record)?;
//! assert!(outcome.passed());
//! # Ok::<(), token_spectra::InvariantError>(())
//! ```

pub mod aggregate;
pub mod codec;
pub mod conjectures;
pub mod corpus;
pub mod errors;
pub mod graph;
pub mod invariants;
pub mod spectral;
pub mod types;

pub use aggregate::compute_all;
pub use codec::{decode_graph6, parse_node_link, to_node_link, NodeLinkGraph};
pub use conjectures::{
    verify_and_tag, verify_record, ConjectureClause, ConjectureFailure, RatioAccumulator,
    VerifyOutcome,
};
pub use corpus::{discover_record_files, verify_corpus, CorpusSummary, Graph6Stream, RecordStream};
pub use errors::{InvariantError, Result};
pub use graph::{token_graph, Graph};
pub use invariants::{max_cut, max_k_cut, max_matching, max_matching_at_most_k, Matching};
pub use spectral::extreme_eigenvalues;
pub use types::{
    ConjectureRecord, GraphInvariants, PerKInvariants, SpectralRange, SpectralTriple, TOL,
};
