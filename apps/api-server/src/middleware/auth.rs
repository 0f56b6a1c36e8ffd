//! Admin authentication extractor.

use std::future::{Ready, ready};
use std::sync::Arc;

use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, dev::Payload, http::header};

use scribe_core::ports::AdminTokenVerifier;
use scribe_shared::ErrorBody;

/// Marker extractor proving the request carried a valid admin token.
///
/// Use this in handlers to gate the admin surface:
/// ```ignore
/// async fn protected_route(_admin: AdminIdentity) -> impl Responder {
///     ...
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AdminIdentity;

/// Error type for authentication failures.
#[derive(Debug)]
pub enum AuthenticationError {
    MissingHeader,
    InvalidToken,
    Misconfigured,
}

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthenticationError::MissingHeader => {
                write!(f, "missing or invalid authorization header")
            }
            AuthenticationError::InvalidToken => write!(f, "invalid admin token"),
            AuthenticationError::Misconfigured => write!(f, "admin token verifier unavailable"),
        }
    }
}

impl ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match self {
            AuthenticationError::Misconfigured => {
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => actix_web::http::StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AuthenticationError::MissingHeader => {
                ErrorBody::unauthorized("Missing or invalid authorization header")
            }
            AuthenticationError::InvalidToken => ErrorBody::unauthorized("Invalid admin token"),
            AuthenticationError::Misconfigured => ErrorBody::internal_error(),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl FromRequest for AdminIdentity {
    type Error = AuthenticationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // Get the verifier from app data
        let verifier = match req.app_data::<actix_web::web::Data<Arc<dyn AdminTokenVerifier>>>() {
            Some(verifier) => verifier,
            None => {
                tracing::error!("AdminTokenVerifier not found in app data");
                return ready(Err(AuthenticationError::Misconfigured));
            }
        };

        // Extract Bearer token from Authorization header
        let auth_header = match req.headers().get(header::AUTHORIZATION) {
            Some(value) => value,
            None => return ready(Err(AuthenticationError::MissingHeader)),
        };

        let auth_str = match auth_header.to_str() {
            Ok(s) => s,
            Err(_) => return ready(Err(AuthenticationError::MissingHeader)),
        };

        // Parse "Bearer <token>"
        let token = match auth_str.strip_prefix("Bearer ") {
            Some(t) => t,
            None => return ready(Err(AuthenticationError::MissingHeader)),
        };

        if verifier.verify(token) {
            ready(Ok(AdminIdentity))
        } else {
            ready(Err(AuthenticationError::InvalidToken))
        }
    }
}
