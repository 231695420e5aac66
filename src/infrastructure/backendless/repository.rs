//! Backendless REST implementation of [`UserRepository`].

use crate::config::{Config, Credentials};
use crate::domain::entities::{UpstreamReply, UserPayload, UserQuery};
use crate::domain::repositories::UserRepository;
use crate::error::{AppError, BackendError};
use anyhow::{Context, Result};
use async_trait::async_trait;
use axum::http::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, Response};
use serde_json::{Value, json};
use url::Url;

pub const APPLICATION_ID_HEADER: &str = "X-Backendless-Application-Id";
pub const API_KEY_HEADER: &str = "X-Backendless-API-Key";

/// Users table accessed through the Backendless data API.
///
/// Holds one pooled [`Client`] whose default headers carry the content type
/// and, when configured, both credentials. Cheap to share behind an `Arc`.
pub struct BackendlessUserRepository {
    client: Client,
    base_url: Url,
}

impl BackendlessUserRepository {
    /// Builds the repository from startup configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a credential is not a valid header value or the
    /// HTTP client cannot be initialised.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Self::client_builder(config)?
            .build()
            .context("Failed to build Backendless HTTP client")?;

        Ok(Self::from_client(client, config.base_url.clone()))
    }

    /// Client builder preloaded with the content type and credential headers.
    ///
    /// # Errors
    ///
    /// Returns an error if a credential is not a valid header value.
    pub fn client_builder(config: &Config) -> Result<ClientBuilder> {
        let headers = default_headers(config.credentials.as_ref())?;
        Ok(Client::builder().default_headers(headers))
    }

    /// Wraps an already configured client.
    pub fn from_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Collection URL with the query encoded as `application/x-www-form-urlencoded`.
    pub fn list_url(&self, query: &UserQuery) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().extend_pairs(query.to_pairs());
        url
    }

    /// Record URL with `object_id` appended as one percent-encoded segment.
    pub fn record_url(&self, object_id: &str) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::internal(
                    "Backendless base URL cannot take path segments",
                    json!({ "base_url": self.base_url.as_str() }),
                )
            })?
            .pop_if_empty()
            .push(object_id);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, AppError> {
        request.send().await.map_err(|e| {
            tracing::error!(error = %e, "Backendless request failed");
            AppError::unavailable(e.is_timeout(), e.without_url().to_string())
        })
    }

    async fn call(
        &self,
        method: Method,
        url: Url,
        payload: Option<&UserPayload>,
    ) -> Result<UpstreamReply, AppError> {
        tracing::debug!(%method, url = %url, "Forwarding to Backendless");

        let mut request = self.client.request(method, url);
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = self.send(request).await?;
        let status = response.status();
        let text = read_body(response).await?;

        if !status.is_success() {
            return Err(upstream_failure(status, &text));
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(body) => Ok(UpstreamReply::new(status, body)),
            Err(e) => {
                tracing::warn!(%status, error = %e, "Backendless returned a non-JSON success body");
                Err(AppError::upstream(
                    StatusCode::BAD_GATEWAY,
                    BackendError::Raw(text),
                ))
            }
        }
    }
}

#[async_trait]
impl UserRepository for BackendlessUserRepository {
    async fn list(&self, query: &UserQuery) -> Result<UpstreamReply, AppError> {
        self.call(Method::GET, self.list_url(query), None).await
    }

    async fn find_by_id(&self, object_id: &str) -> Result<UpstreamReply, AppError> {
        let url = self.record_url(object_id)?;
        self.call(Method::GET, url, None).await
    }

    async fn create(&self, payload: UserPayload) -> Result<UpstreamReply, AppError> {
        self.call(Method::POST, self.base_url.clone(), Some(&payload))
            .await
    }

    async fn update(
        &self,
        object_id: &str,
        payload: UserPayload,
    ) -> Result<UpstreamReply, AppError> {
        let url = self.record_url(object_id)?;
        self.call(Method::PUT, url, Some(&payload)).await
    }

    async fn delete(&self, object_id: &str) -> Result<(), AppError> {
        let url = self.record_url(object_id)?;
        tracing::debug!(url = %url, "Forwarding delete to Backendless");

        let response = self.send(self.client.delete(url)).await?;
        let status = response.status();

        if status == StatusCode::OK || status == StatusCode::NO_CONTENT {
            return Ok(());
        }

        let text = read_body(response).await?;
        Err(upstream_failure(status, &text))
    }

    async fn health_check(&self) -> bool {
        let url = self.list_url(&UserQuery::new(1, 0));
        match self.client.get(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!(error = %e, "Backendless health check failed");
                false
            }
        }
    }
}

/// Content type plus both credential headers when configured.
fn default_headers(credentials: Option<&Credentials>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(credentials) = credentials {
        let mut app_id = HeaderValue::from_str(&credentials.application_id)
            .context("BACKENDLESS_APP_ID is not a valid header value")?;
        let mut api_key = HeaderValue::from_str(&credentials.api_key)
            .context("BACKENDLESS_API_KEY is not a valid header value")?;
        app_id.set_sensitive(true);
        api_key.set_sensitive(true);

        headers.insert(HeaderName::from_static("x-backendless-application-id"), app_id);
        headers.insert(HeaderName::from_static("x-backendless-api-key"), api_key);
    }

    Ok(headers)
}

async fn read_body(response: Response) -> Result<String, AppError> {
    response.text().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to read Backendless response body");
        AppError::unavailable(e.is_timeout(), e.without_url().to_string())
    })
}

fn upstream_failure(status: StatusCode, text: &str) -> AppError {
    tracing::warn!(%status, "Backendless returned an error");
    AppError::upstream(status, BackendError::from_body(text))
}
