//! Error handling - maps failures to JSON message responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use quill_core::error::{DomainError, RepoError};
use quill_shared::ErrorResponse;
use std::fmt;

/// Application-level error type returned by handlers.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    /// The message is returned to the caller; never put internal detail here.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(msg) => ErrorResponse::not_found(msg),
            AppError::BadRequest(msg) => ErrorResponse::bad_request(msg),
            AppError::Internal(msg) => ErrorResponse::internal_error(msg),
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, .. } => {
                AppError::NotFound(format!("{} not found", entity_type))
            }
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::InvalidId(raw) => {
                AppError::BadRequest(format!("Invalid post id: {}", raw))
            }
            DomainError::GenerationFailed => {
                AppError::Internal("Blog generation failed".to_string())
            }
            DomainError::Storage(e) => e.into(),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Read(msg) | RepoError::Write(msg) => {
                tracing::error!("Post store I/O error: {}", msg);
                AppError::Internal("Storage error".to_string())
            }
            RepoError::Corrupt(msg) => {
                tracing::error!("Post store is corrupt: {}", msg);
                AppError::Internal("Storage error".to_string())
            }
            RepoError::IdsExhausted => {
                tracing::error!("Post store has no ids left to assign");
                AppError::Internal("Storage error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
