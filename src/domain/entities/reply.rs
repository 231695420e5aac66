//! Successful response relayed from the data service.

use axum::http::StatusCode;
use serde_json::Value;

/// A successful upstream response: status and parsed JSON body.
///
/// The body is never interpreted by the proxy.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Value,
}

impl UpstreamReply {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    /// Shorthand for a `200 OK` reply.
    pub fn ok(body: Value) -> Self {
        Self::new(StatusCode::OK, body)
    }
}
