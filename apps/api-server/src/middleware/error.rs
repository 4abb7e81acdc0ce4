//! Error handling middleware - RFC 7807 compliant responses.
//!
//! The mapping is deliberately narrow: a repository miss becomes 404 and
//! every other store failure becomes a generic 500. Internal error text
//! (SQL, pool state) is logged here and never reaches the client.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use quill_shared::ErrorResponse;
use std::fmt;

use quill_core::error::{DomainError, RepoError};

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Constraint(String),
    Storage(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {msg}"),
            AppError::Constraint(msg) => write!(f, "Constraint violation: {msg}"),
            AppError::Storage(msg) => write!(f, "Storage error: {msg}"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Constraint(_) | AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::Constraint(detail) => {
                tracing::error!("constraint violation: {detail}");
                ErrorResponse::internal_error()
            }
            AppError::Storage(detail) => {
                tracing::error!("storage error: {detail}");
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Post not found".to_string()),
            RepoError::Constraint(msg) => AppError::Constraint(msg),
            RepoError::Unavailable(msg) | RepoError::Query(msg) => AppError::Storage(msg),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Constraint(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
