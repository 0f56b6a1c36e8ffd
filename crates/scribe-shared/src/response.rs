//! Error body for the HTTP surface.

use serde::{Deserialize, Serialize};

/// Wire form of every failure: an error kind plus a human-readable
/// message. The server maps the kind to the matching status code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("Bad Request", message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new("Unauthorized", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("Not Found", message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new("Conflict", message)
    }

    pub fn internal_error() -> Self {
        Self::new("Internal Server Error", "Something went wrong")
    }
}
