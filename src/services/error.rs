//! Error types for query operations.

use crate::db::repository::RepositoryError;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Error type for the query core.
///
/// `Validation` covers caller-correctable parameter problems, `Integrity`
/// covers references to records absent from the dataset (upstream data
/// corruption, never silently dropped), and `NotFound` covers a queried
/// entity that does not exist.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Malformed or contradictory query parameters.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A record references a related record missing from the dataset.
    #[error("Integrity error: {0}")]
    Integrity(String),

    /// The queried entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failure in the underlying repository.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl QueryError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an integrity error.
    pub fn integrity(message: impl Into<String>) -> Self {
        Self::Integrity(message.into())
    }

    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}
