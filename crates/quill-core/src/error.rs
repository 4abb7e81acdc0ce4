//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Repository-level errors.
///
/// `Unavailable` covers connection and pool failures, `Constraint` covers
/// rejected writes (missing required fields, invalid enum values), and
/// `NotFound` is the read-path miss. None of these are retried here; retry
/// policy belongs to the caller.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Record not found")]
    NotFound,
}

impl From<DomainError> for RepoError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => RepoError::Constraint(msg),
        }
    }
}
