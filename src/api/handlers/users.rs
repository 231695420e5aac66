//! Handlers for the Users endpoints.
//!
//! Each handler forwards exactly one request to Backendless and relays the
//! reply. Failures are rendered by [`AppError`]'s `IntoResponse`.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::api::dto::users::{DeleteUserResponse, ListUsersParams};
use crate::domain::entities::UpstreamReply;
use crate::error::AppError;
use crate::state::AppState;

type ReplyResult = Result<(StatusCode, Json<Value>), AppError>;

fn relay(reply: UpstreamReply) -> (StatusCode, Json<Value>) {
    (reply.status, Json(reply.body))
}

/// Parses a request body as JSON regardless of its `Content-Type`.
fn parse_json_body(body: &Bytes) -> Result<Value, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        AppError::bad_request("Invalid JSON body", json!({ "reason": e.to_string() }))
    })
}

/// Lists users.
///
/// # Endpoint
///
/// `GET /users`
///
/// # Query Parameters
///
/// - `pageSize` (optional): Page size (default: 50)
/// - `offset` (optional): Records to skip (default: 0)
/// - `where` (optional): Backendless where clause, e.g. `username='leo'`
/// - `sortBy` (optional): Sort expression, e.g. `created desc`
///
/// A repeated parameter keeps its first value.
///
/// # Errors
///
/// Returns 400 if `pageSize` or `offset` is not an integer. Range checks are
/// left to Backendless.
pub async fn list_users_handler(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> ReplyResult {
    let params = ListUsersParams::from_query(raw.as_deref()).map_err(|e| {
        AppError::bad_request("Invalid query parameters", json!({ "reason": e.to_string() }))
    })?;

    let reply = state.user_service.list_users(params.into()).await?;
    Ok(relay(reply))
}

/// Fetches a user by `objectId`.
///
/// # Endpoint
///
/// `GET /users/{id}`
pub async fn get_user_handler(
    Path(object_id): Path<String>,
    State(state): State<AppState>,
) -> ReplyResult {
    let reply = state.user_service.get_user(&object_id).await?;
    Ok(relay(reply))
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Request Body
///
/// ```json
/// {
///   "email": "a@x.com",
///   "username": "a",
///   "First Name": "Ada",
///   "Last Name": "Lovelace",
///   "ID": 1,
///   "password": "secret"
/// }
/// ```
///
/// Fields outside this set are dropped before forwarding.
///
/// # Errors
///
/// Returns 400 if the body is not JSON or `email`/`username` is missing.
pub async fn create_user_handler(State(state): State<AppState>, body: Bytes) -> ReplyResult {
    let body = parse_json_body(&body)?;

    let reply = state.user_service.create_user(body).await?;
    Ok(relay(reply))
}

/// Updates a user. Serves both `PUT` and `PATCH`.
///
/// # Endpoint
///
/// `PUT /users/{id}`, `PATCH /users/{id}`
///
/// # Errors
///
/// Returns 400 if the body is not JSON or contains no writable field.
pub async fn update_user_handler(
    Path(object_id): Path<String>,
    State(state): State<AppState>,
    body: Bytes,
) -> ReplyResult {
    let body = parse_json_body(&body)?;

    let reply = state.user_service.update_user(&object_id, body).await?;
    Ok(relay(reply))
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /users/{id}`
///
/// # Response
///
/// ```json
/// { "deleted": true, "objectId": "<id>" }
/// ```
pub async fn delete_user_handler(
    Path(object_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteUserResponse>, AppError> {
    state.user_service.delete_user(&object_id).await?;

    Ok(Json(DeleteUserResponse {
        deleted: true,
        object_id,
    }))
}

/// Exact-match lookup by email.
///
/// # Endpoint
///
/// `GET /users/by-email/{email}`
pub async fn find_by_email_handler(
    Path(email): Path<String>,
    State(state): State<AppState>,
) -> ReplyResult {
    let reply = state.user_service.find_by_email(&email).await?;
    Ok(relay(reply))
}

/// Exact-match lookup by username.
///
/// # Endpoint
///
/// `GET /users/by-username/{username}`
pub async fn find_by_username_handler(
    Path(username): Path<String>,
    State(state): State<AppState>,
) -> ReplyResult {
    let reply = state.user_service.find_by_username(&username).await?;
    Ok(relay(reply))
}
