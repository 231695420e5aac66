//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use std::time::Instant;

use crate::api::dto::health::{HealthChecks, HealthResponse, UpstreamCheck};
use crate::state::AppState;

/// Returns service health status with an upstream check.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Backendless answered a one-record list request
/// - **503 Service Unavailable**: Backendless unreachable or rejecting requests
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let backendless = check_backendless(&state).await;
    let healthy = backendless.is_ok();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { backendless },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_backendless(state: &AppState) -> UpstreamCheck {
    let started = Instant::now();
    let reachable = state.user_service.health_check().await;
    let latency_ms = started.elapsed().as_millis() as u64;

    if reachable {
        UpstreamCheck {
            status: "ok".to_string(),
            latency_ms,
            message: format!("Backendless answered in {latency_ms} ms"),
        }
    } else {
        UpstreamCheck {
            status: "error".to_string(),
            latency_ms,
            message: format!("Backendless request failed after {latency_ms} ms"),
        }
    }
}
