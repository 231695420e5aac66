//! Application error type and its HTTP representation.
//!
//! Local failures (bad input, internal faults) are rendered as
//! `{"error": {"code", "message", "details"}}`. Failures reported by the
//! Backendless data service are rendered as the proxy envelope
//! `{"error": true, "status": <code>, "backendless": <body>}` with the
//! upstream status code mirrored.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Message used when a failed upstream response carried no body at all.
pub const DEFAULT_BACKEND_MESSAGE: &str = "Backendless error";

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Serialize)]
struct EnvelopeBody {
    error: bool,
    status: u16,
    backendless: Value,
}

/// Body of a failed upstream response.
///
/// Either the service answered with JSON, which is relayed untouched, or it
/// answered with something else, which is wrapped as a message.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendError {
    Parsed(Value),
    Raw(String),
}

impl BackendError {
    /// Classifies a raw upstream body.
    pub fn from_body(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Self::Parsed(value),
            Err(_) => Self::Raw(text.to_string()),
        }
    }

    /// Converts into the value placed under the envelope's `backendless` key.
    pub fn into_payload(self) -> Value {
        match self {
            Self::Parsed(value) => value,
            Self::Raw(text) if text.is_empty() => json!({ "message": DEFAULT_BACKEND_MESSAGE }),
            Self::Raw(text) => json!({ "message": text }),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("Backendless responded with status {status}")]
    Upstream {
        status: StatusCode,
        body: BackendError,
    },

    #[error("Backendless unreachable: {message}")]
    UpstreamUnavailable { status: StatusCode, message: String },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn upstream(status: StatusCode, body: BackendError) -> Self {
        Self::Upstream { status, body }
    }

    /// Transport-level failure; timeouts map to 504, everything else to 502.
    pub fn unavailable(timed_out: bool, message: impl Into<String>) -> Self {
        let status = if timed_out {
            StatusCode::GATEWAY_TIMEOUT
        } else {
            StatusCode::BAD_GATEWAY
        };
        Self::UpstreamUnavailable {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error is rendered with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Upstream { status, .. } => *status,
            AppError::UpstreamUnavailable { status, .. } => *status,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::Validation { message, details } => {
                local_error(status, "validation_error", message, details)
            }
            AppError::Internal { message, details } => {
                local_error(status, "internal_error", message, details)
            }
            AppError::Upstream { body, .. } => envelope(status, body.into_payload()),
            AppError::UpstreamUnavailable { message, .. } => {
                envelope(status, json!({ "message": message }))
            }
        }
    }
}

fn local_error(status: StatusCode, code: &'static str, message: String, details: Value) -> Response {
    let body = ErrorBody {
        error: ErrorInfo {
            code,
            message,
            details,
        },
    };

    (status, Json(body)).into_response()
}

fn envelope(status: StatusCode, backendless: Value) -> Response {
    let body = EnvelopeBody {
        error: true,
        status: status.as_u16(),
        backendless,
    };

    (status, Json(body)).into_response()
}
