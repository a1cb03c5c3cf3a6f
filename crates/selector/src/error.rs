//! Error types for the selector crate.

use thiserror::Error;

use crate::op::Op;

/// Errors returned by the selection operations.
///
/// The or-default operations never return [`SelectError::NotFound`]; they
/// still return [`SelectError::MultipleMatches`] when uniqueness is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The predicate matched no element where at least one was required.
    #[error("no element satisfies the predicate")]
    NotFound,

    /// The predicate matched more than one element where exactly one was required.
    #[error("more than one element satisfies the predicate")]
    MultipleMatches,
}

/// Errors that can occur when building a [`Query`](crate::Query).
#[derive(Debug, Error)]
pub enum QueryError {
    /// Invalid regular expression pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// Operator does not apply to the kind of value it compares against.
    #[error("operator '{op}' is not valid for {value_type} values (field '{field}')")]
    InvalidOperatorForType {
        field: String,
        op: Op,
        value_type: &'static str,
    },
}

/// Result type for selection operations.
pub type Result<T> = std::result::Result<T, SelectError>;
