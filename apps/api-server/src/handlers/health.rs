//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub store: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Liveness plus post-store readiness.
///
/// GET /api/health
///
/// The store check is a point lookup for id 0, which the id sequence never
/// assigns, so it proves the database answers without touching post data.
/// The endpoint itself always answers 200; a broken store is reported in
/// the body as `degraded`.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let store = match state.posts.find_by_id(0).await {
        Ok(_) => "reachable",
        Err(err) => {
            tracing::warn!("health check could not reach the store: {err}");
            "unreachable"
        }
    };

    let response = HealthResponse {
        status: if store == "reachable" {
            "ok"
        } else {
            "degraded"
        },
        store,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}
