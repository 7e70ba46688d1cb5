//! Error taxonomy for coverage analysis.
//!
//! The analysis itself never fails: unknown identifiers degrade to
//! "no annotation found" and edges to literals are skipped by type
//! inspection. Errors only arise from misuse during input construction.

/// Errors raised while building analysis inputs.
#[derive(Debug, thiserror::Error)]
pub enum CoverageError {
    #[error("identifier {id} already registered with label {existing:?}, rejected {rejected:?}")]
    DuplicateIdentifier {
        id: String,
        existing: String,
        rejected: String,
    },

    #[error("triple subject must be a named or anonymous node, got literal {term}")]
    InvalidSubject { term: String },
}

/// Result alias used across the coverage crates.
pub type CoverageResult<T> = Result<T, CoverageError>;
