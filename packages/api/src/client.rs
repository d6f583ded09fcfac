//! # Preferences API client
//!
//! [`ApiClient`] is the only place that talks to the backend and the only
//! place that classifies failures. Every call:
//!
//! 1. attaches `Content-Type: application/json` and the `X-CSRFToken` header
//!    from [`ApiConfig`];
//! 2. sends the request through its [`Transport`];
//! 3. turns a transport failure, a non-2xx status or an undecodable body into
//!    an [`ApiError`], logging it with `tracing::error!` before returning it.
//!
//! Nothing is retried. Callers get exactly one `Result` per call.

use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ApiConfig;
use crate::models::{
    Preference, PreferenceListQuery, PreferenceListResponse, Profile, UpdatingPreference,
};
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::ApiError;

/// Append the defined fields of `query` to `endpoint`'s query string.
///
/// Existing parameters on `endpoint` are kept. When `query` defines nothing
/// the URL is returned untouched.
pub fn append_query(mut endpoint: Url, query: &PreferenceListQuery) -> Url {
    let pairs = query.pairs();
    if !pairs.is_empty() {
        endpoint.query_pairs_mut().extend_pairs(pairs);
    }
    endpoint
}

/// Client for the preferences REST API.
#[derive(Debug, Clone)]
pub struct ApiClient<T: Transport> {
    transport: T,
    config: ApiConfig,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Content-Type", "application/json".to_string()),
            ("X-CSRFToken", self.config.csrf_token().to_string()),
        ]
    }

    /// Send a request and reject anything but a 2xx response.
    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<String>,
    ) -> Result<ApiResponse, ApiError> {
        tracing::debug!(%method, %url, "API request");
        let request = ApiRequest {
            method,
            url,
            headers: self.headers(),
            body,
        };

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("API fetch error: {}", e);
                return Err(e);
            }
        };

        if !response.is_success() {
            let body = serde_json::from_str(&response.body).unwrap_or(serde_json::Value::Null);
            tracing::error!(status = response.status, %body, "API error response");
            return Err(ApiError::Status {
                status: response.status,
                body,
            });
        }

        Ok(response)
    }

    /// Perform a request and decode the JSON response body.
    ///
    /// A `DELETE` never has its body read: it decodes as JSON `null`, so use
    /// `()` or an `Option` for `R` (or just call [`delete`](Self::delete)).
    pub async fn fetch<R: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<serde_json::Value>,
    ) -> Result<R, ApiError> {
        let response = self.send(method, url, body.map(|b| b.to_string())).await?;
        let text = if method == Method::Delete {
            "null"
        } else {
            response.body.as_str()
        };

        serde_json::from_str(text).map_err(|e| {
            let err = ApiError::from(e);
            tracing::error!("API fetch error: {}", err);
            err
        })
    }

    /// Delete the resource at `url`. Succeeds with no content.
    pub async fn delete(&self, url: Url) -> Result<(), ApiError> {
        self.send(Method::Delete, url, None).await.map(|_| ())
    }

    /// Fetch the current session's profile.
    pub async fn profile_get(&self) -> Result<Profile, ApiError> {
        self.fetch(Method::Get, self.config.profile_url().clone(), None)
            .await
    }

    /// Fetch the first page of preferences matching `query`.
    pub async fn preference_list(
        &self,
        query: &PreferenceListQuery,
    ) -> Result<PreferenceListResponse, ApiError> {
        let url = append_query(self.config.preference_list_url().clone(), query);
        self.fetch(Method::Get, url, None).await
    }

    /// Fetch the page a `next`/`previous` cursor points at.
    ///
    /// The cursor already encodes the original filter and is requested as-is.
    /// A host-relative cursor is resolved against the API's origin.
    pub async fn preference_list_page(
        &self,
        cursor: &str,
    ) -> Result<PreferenceListResponse, ApiError> {
        let url = self.config.base_url().join(cursor).map_err(|e| {
            tracing::error!(cursor, "API fetch error: bad page cursor: {}", e);
            ApiError::from(e)
        })?;
        self.fetch(Method::Get, url, None).await
    }

    /// Record a new preference for the signed-in user. The server replies
    /// with the stored record.
    pub async fn preference_update(
        &self,
        preference: &UpdatingPreference,
    ) -> Result<Preference, ApiError> {
        let body = serde_json::to_value(preference)?;
        self.fetch(
            Method::Post,
            self.config.preference_list_url().clone(),
            Some(body),
        )
        .await
    }
}
