//! Repository trait for the remote Users table.

use crate::domain::entities::{UpstreamReply, UserPayload, UserQuery};
use crate::error::AppError;
use async_trait::async_trait;

/// Gateway to the data service holding user records.
///
/// Every method issues exactly one upstream request. A non-success upstream
/// status is reported as [`AppError::Upstream`]; a transport failure as
/// [`AppError::UpstreamUnavailable`].
///
/// # Implementations
///
/// - [`crate::infrastructure::backendless::BackendlessUserRepository`] - Backendless REST API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists records matching the query (`GET <endpoint>?<query>`).
    async fn list(&self, query: &UserQuery) -> Result<UpstreamReply, AppError>;

    /// Fetches one record (`GET <endpoint>/<id>`).
    async fn find_by_id(&self, object_id: &str) -> Result<UpstreamReply, AppError>;

    /// Creates a record (`POST <endpoint>`).
    async fn create(&self, payload: UserPayload) -> Result<UpstreamReply, AppError>;

    /// Updates a record (`PUT <endpoint>/<id>`).
    async fn update(&self, object_id: &str, payload: UserPayload)
    -> Result<UpstreamReply, AppError>;

    /// Deletes a record (`DELETE <endpoint>/<id>`).
    ///
    /// Succeeds only on upstream `200` or `204`; the upstream body is discarded.
    async fn delete(&self, object_id: &str) -> Result<(), AppError>;

    /// Checks that the data service answers a minimal list request.
    async fn health_check(&self) -> bool;
}
