//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostId;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity_type} with id {id} not found")]
    NotFound {
        entity_type: &'static str,
        id: PostId,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid post id: {0}")]
    InvalidId(String),

    #[error("Blog generation failed")]
    GenerationFailed,

    #[error(transparent)]
    Storage(#[from] RepoError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Failed to read store: {0}")]
    Read(String),

    #[error("Failed to write store: {0}")]
    Write(String),

    #[error("Store contents are not a valid post collection: {0}")]
    Corrupt(String),

    #[error("Post ids are exhausted")]
    IdsExhausted,

    #[error("Entity not found")]
    NotFound,
}
