//! User proxy service.

use crate::domain::entities::{UpstreamReply, UserPayload, UserQuery};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use axum::http::StatusCode;
use serde_json::{Map, Value, json};
use std::sync::Arc;

/// Service forwarding user operations to the data service.
///
/// Applies allow-list filtering and presence checks before anything leaves
/// the process; everything else is decided upstream.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists users with the given pagination, filter and sort.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when the data service rejects the query.
    pub async fn list_users(&self, query: UserQuery) -> Result<UpstreamReply, AppError> {
        self.repository.list(&query).await
    }

    /// Retrieves one user by `objectId`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] with the upstream status (typically 404)
    /// when the record cannot be fetched.
    pub async fn get_user(&self, object_id: &str) -> Result<UpstreamReply, AppError> {
        self.repository.find_by_id(object_id).await
    }

    /// Creates a user from an arbitrary JSON body.
    ///
    /// Unknown fields are dropped. The reply status is always `201 Created`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the body is not an object or lacks
    /// `email` or `username` after filtering.
    pub async fn create_user(&self, body: Value) -> Result<UpstreamReply, AppError> {
        let payload = UserPayload::filter(into_object(body)?);

        let missing = payload.missing_for_create();
        if !missing.is_empty() {
            return Err(AppError::bad_request(
                "Fields 'email' and 'username' are required",
                json!({ "missing": missing }),
            ));
        }

        let reply = self.repository.create(payload).await?;
        Ok(UpstreamReply::new(StatusCode::CREATED, reply.body))
    }

    /// Updates a user from an arbitrary JSON body.
    ///
    /// Used for both full and partial updates. The reply status is always
    /// `200 OK`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the body is not an object or no
    /// writable field remains after filtering.
    pub async fn update_user(&self, object_id: &str, body: Value) -> Result<UpstreamReply, AppError> {
        let payload = UserPayload::filter(into_object(body)?);

        if payload.is_empty() {
            return Err(AppError::bad_request(
                "No updatable fields provided",
                json!({ "allowed": crate::domain::entities::USER_FIELDS }),
            ));
        }

        let reply = self.repository.update(object_id, payload).await?;
        Ok(UpstreamReply::ok(reply.body))
    }

    /// Deletes a user by `objectId`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] unless the data service answers 200 or 204.
    pub async fn delete_user(&self, object_id: &str) -> Result<(), AppError> {
        self.repository.delete(object_id).await
    }

    /// Exact-match lookup on `email`.
    pub async fn find_by_email(&self, email: &str) -> Result<UpstreamReply, AppError> {
        self.repository
            .list(&UserQuery::exact_match("email", email))
            .await
    }

    /// Exact-match lookup on `username`.
    pub async fn find_by_username(&self, username: &str) -> Result<UpstreamReply, AppError> {
        self.repository
            .list(&UserQuery::exact_match("username", username))
            .await
    }

    /// Reports whether the data service is reachable.
    pub async fn health_check(&self) -> bool {
        self.repository.health_check().await
    }
}

/// Accepts a JSON object; `null` counts as an empty object.
fn into_object(body: Value) -> Result<Map<String, Value>, AppError> {
    match body {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        _ => Err(AppError::bad_request(
            "JSON body must be an object",
            json!({}),
        )),
    }
}
