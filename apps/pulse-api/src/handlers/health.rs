//! Liveness and store connectivity probes.

use actix_web::{HttpResponse, web};

use pulse_shared::dto::{HealthResponse, MessageResponse};

use crate::state::AppState;

/// GET /
pub async fn liveness() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new(
        "Pulse social analytics API is running",
    ))
}

/// GET /health
///
/// Reports store reachability in the body. The status code stays 200 even
/// when the store is down; the degradation is data, not a fault.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let response = match state.store.ping().await {
        Ok(()) => HealthResponse {
            status: "healthy",
            database: "connected",
            timestamp: Some(chrono::Utc::now().to_rfc3339()),
            error: None,
        },
        // The degraded body carries the probe error instead of a timestamp.
        Err(e) => HealthResponse {
            status: "unhealthy",
            database: "disconnected",
            timestamp: None,
            error: Some(e.to_string()),
        },
    };

    HttpResponse::Ok().json(response)
}
