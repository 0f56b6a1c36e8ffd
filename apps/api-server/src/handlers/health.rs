//! Health check endpoints.

use actix_web::HttpResponse;
use serde::Serialize;

use crate::middleware::auth::AdminIdentity;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
}

/// Health check endpoint - returns server status.
///
/// GET /api/public/health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        admin: None,
    })
}

/// Authenticated health check - also proves the caller's token works.
///
/// GET /api/admin/health
pub async fn admin_health_check(_admin: AdminIdentity) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        admin: Some(true),
    })
}
