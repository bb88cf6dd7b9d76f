//! Error types for the query crate.

use thiserror::Error;

/// Errors that can occur when building filters.
///
/// Matching itself never fails: a filter that cannot be evaluated against a
/// value (type mismatch, missing field) simply does not match.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Invalid regular expression pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// Operator is not valid for the given operand type.
    #[error("operator '{op}' cannot be used with a {operand} operand")]
    InvalidOperator {
        op: &'static str,
        operand: &'static str,
    },
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
