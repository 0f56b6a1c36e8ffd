//! Error handling middleware - maps domain failures to `{error, message}`
//! responses with the matching status codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use scribe_shared::ErrorBody;
use std::fmt;

use scribe_core::error::{DomainError, StoreError};

/// Application-level error type mapped onto the wire taxonomy.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound(detail) => ErrorBody::not_found(detail),
            AppError::BadRequest(detail) => ErrorBody::bad_request(detail),
            AppError::Conflict(detail) => ErrorBody::conflict(detail),
            AppError::Internal(detail) => {
                // Log internal errors; the wire body stays generic
                tracing::error!("Internal error: {}", detail);
                ErrorBody::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity } => AppError::NotFound(format!("{entity} not found")),
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Conflict(what) => AppError::Conflict(format!("{what} already exists")),
            DomainError::Store(err) => AppError::from(err),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Backend(msg) => {
                tracing::error!("Store backend error: {}", msg);
                AppError::Internal("Store operation failed".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
