//! Grocery store API client.
//!
//! # Architecture
//!
//! - Central outbound gateway for every server call; one `reqwest` client
//!   behind an `Arc`, cheaply cloneable
//! - The server is the source of truth - cart mutations return the full
//!   updated snapshot, and the client never patches state locally
//! - Catalog reads (products, categories) are cached in-memory via `moka`
//!   with a 5-minute TTL; admin catalog mutations invalidate the cache
//! - A 401 from any endpoint tears down the session and fires the
//!   session-expired hook exactly once, then propagates the failure
//!
//! # Example
//!
//! ```rust,ignore
//! use greenbasket_client::{ApiClient, ClientConfig, FileStorage, SessionStore};
//!
//! let config = ClientConfig::from_env()?;
//! let session = SessionStore::load(FileStorage::new(config.session_file.clone()));
//! let api = ApiClient::new(&config, session.clone());
//!
//! let products = api.products().await?;
//! let cart = api.add_cart_item(products[0].id, Decimal::ONE).await?;
//! ```

mod admin;
mod ai;
mod auth;
mod cache;
mod cart;
mod products;
mod recipes;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::SessionStore;

use cache::CacheValue;

/// Catalog cache time-to-live.
const CACHE_TTL: Duration = Duration::from_secs(300);
const CACHE_CAPACITY: u64 = 1000;

/// Hook invoked after a 401 has torn down the session. The view layer
/// uses it to route the user back to the login flow; the transport layer
/// itself performs no navigation.
pub type SessionExpiredHook = Arc<dyn Fn() + Send + Sync>;

/// Client for the grocery store REST API.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
    session: SessionStore,
    cache: Cache<String, CacheValue>,
    on_session_expired: SessionExpiredHook,
}

impl ApiClient {
    /// Create a new API client with a no-op session-expired hook.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be constructed.
    #[must_use]
    pub fn new(config: &ClientConfig, session: SessionStore) -> Self {
        Self::with_expired_hook(config, session, Arc::new(|| {}))
    }

    /// Create a new API client with a session-expired hook.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be constructed.
    #[must_use]
    pub fn with_expired_hook(
        config: &ClientConfig,
        session: SessionStore,
        on_session_expired: SessionExpiredHook,
    ) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to build HTTP client");

        let cache = Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.api_url.trim_end_matches('/').to_string(),
                session,
                cache,
                on_session_expired,
            }),
        }
    }

    /// The session store this client reads tokens from and tears down
    /// on authentication failure.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    // =========================================================================
    // Request plumbing
    // =========================================================================

    /// Send a prepared request and apply the uniform result policy.
    ///
    /// Attaches `Authorization: Bearer <token>` when the session holds a
    /// token. A 401 response clears the session, fires the
    /// session-expired hook, and still propagates the failure to the
    /// caller. Other non-2xx statuses surface the server's
    /// `{"error": "..."}` message.
    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let request = match self.inner.session.token() {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            let message = error_body(response).await;
            self.inner.session.force_logout();
            (self.inner.on_session_expired)();
            return Err(ApiError::Unauthorized { message });
        }

        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Api {
                status,
                message: extract_error_message(&body, status),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse API response"
            );
            ApiError::Parse(e)
        })
    }

    pub(super) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.inner.client.get(self.url(path))).await
    }

    pub(super) async fn get_with_query<T: DeserializeOwned, Q: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        self.send(self.inner.client.get(self.url(path)).query(query))
            .await
    }

    pub(super) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(self.inner.client.post(self.url(path)).json(body))
            .await
    }

    pub(super) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(self.inner.client.put(self.url(path)).json(body))
            .await
    }

    pub(super) async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(self.inner.client.patch(self.url(path)).json(body))
            .await
    }

    pub(super) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.inner.client.delete(self.url(path))).await
    }

    // =========================================================================
    // Cache Management
    // =========================================================================

    /// Invalidate all cached catalog data. Called after admin catalog
    /// mutations so subsequent reads see fresh data.
    pub async fn invalidate_catalog(&self) {
        self.inner.cache.invalidate_all();
        self.inner.cache.run_pending_tasks().await;
    }
}

/// Drain an error response into the server's message.
async fn error_body(response: reqwest::Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) => extract_error_message(&body, status),
        Err(_) => fallback_message(status),
    }
}

/// Pull the `{"error": "..."}` text out of an error body, falling back to
/// the status reason when the body is not the expected shape.
fn extract_error_message(body: &str, status: StatusCode) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or_else(|| fallback_message(status))
}

fn fallback_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Request failed")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message_from_body() {
        let message = extract_error_message(
            r#"{"error":"Invalid or expired token"}"#,
            StatusCode::UNAUTHORIZED,
        );
        assert_eq!(message, "Invalid or expired token");
    }

    #[test]
    fn test_extract_error_message_fallback() {
        let message = extract_error_message("<html>oops</html>", StatusCode::BAD_GATEWAY);
        assert_eq!(message, "Bad Gateway");

        let message = extract_error_message(r#"{"detail":"other shape"}"#, StatusCode::NOT_FOUND);
        assert_eq!(message, "Not Found");
    }
}
