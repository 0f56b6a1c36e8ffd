//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("{0} already exists")]
    Conflict(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Store-level errors surfaced by the key/value collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend failure: {0}")]
    Backend(String),
}
