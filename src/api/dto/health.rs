//! DTOs for the health endpoint.

use serde::Serialize;

/// Proxy health, including the result of one upstream round trip.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub backendless: UpstreamCheck,
}

/// Outcome of the one-record list request sent to Backendless.
#[derive(Debug, Serialize)]
pub struct UpstreamCheck {
    pub status: String,
    pub latency_ms: u64,
    pub message: String,
}

impl UpstreamCheck {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
