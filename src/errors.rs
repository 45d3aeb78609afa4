//! Error types for token_spectra
//!
//! This module defines the error types used throughout the library.
//! Conjecture failures are deliberately NOT errors: a violated conjecture
//! is an informative finding carried inside a record, while the variants
//! below cover structural and feasibility problems that prevent a
//! computation from producing a record at all.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, InvariantError>;

/// Main error type for token_spectra
#[derive(Error, Debug, Clone)]
pub enum InvariantError {
    /// A record or graph document is missing required structure
    /// (e.g. absent `nodes`, `graph_invariants`, or a `k_data` entry)
    #[error("Malformed record: {message}")]
    MalformedRecord { message: String },

    /// A constraint cannot be satisfied on this input
    /// (e.g. a matching with k > 0 edges requested on an edgeless graph)
    #[error("Infeasible constraint: {message}")]
    InfeasibleConstraint { message: String },

    /// The input is too large for exhaustive enumeration to complete
    /// in bounded time; callers are responsible for bounding input size
    #[error("Unsupported scale: {what} has size {size}, limit is {limit}")]
    UnsupportedScale {
        what: &'static str,
        size: usize,
        limit: usize,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// I/O error while reading or writing corpus files
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl InvariantError {
    /// Create a malformed record error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            message: message.into(),
        }
    }

    /// Create an infeasible constraint error
    pub fn infeasible(message: impl Into<String>) -> Self {
        Self::InfeasibleConstraint {
            message: message.into(),
        }
    }

    /// Create an unsupported scale error
    pub fn unsupported_scale(what: &'static str, size: usize, limit: usize) -> Self {
        Self::UnsupportedScale { what, size, limit }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check whether this error should abort only the current record
    /// rather than the whole corpus run
    pub fn is_record_local(&self) -> bool {
        matches!(
            self,
            Self::MalformedRecord { .. } | Self::Serialization { .. }
        )
    }
}

impl From<serde_json::Error> for InvariantError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<std::io::Error> for InvariantError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}
