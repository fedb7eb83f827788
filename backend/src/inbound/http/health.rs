//! Health probe and API description endpoints.
//!
//! Neither endpoint touches the user store.

use actix_web::{HttpResponse, get, http::header, web};
use serde_json::json;

use crate::inbound::http::state::HttpState;

/// Service name reported by the health probe.
pub const SERVICE_NAME: &str = "User REST API";

/// Liveness probe reporting the current Unix time in seconds.
#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    responses(
        (status = 200, description = "Service is alive with the current Unix time", body = serde_json::Value)
    )
)]
#[get("/health")]
pub async fn health(state: web::Data<HttpState>) -> HttpResponse {
    let timestamp = state.clock.utc().timestamp();
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(json!({
            "status": "healthy",
            "timestamp": timestamp,
            "service": SERVICE_NAME,
        }))
}

/// Describe the service and list its endpoints.
#[utoipa::path(
    get,
    path = "/api",
    tags = ["health"],
    responses((status = 200, description = "Service description", body = serde_json::Value))
)]
#[get("/api")]
pub async fn api_info() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Welcome to the User REST API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "GET /health": "Health check",
            "GET /api/users": "Get all users",
            "GET /api/users/:id": "Get user by ID",
            "POST /api/users": "Create new user",
            "PUT /api/users/:id": "Update user",
            "DELETE /api/users/:id": "Delete user",
        },
    }))
}
