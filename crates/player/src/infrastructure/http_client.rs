//! HTTP client for the game backend REST API
//!
//! Implements [`RawApiPort`] on top of reqwest. Every request carries
//! `Content-Type: application/json` and, when the credential store has one,
//! `Authorization: Bearer <token>`. There is no retry and no timeout.

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;

use crate::ports::outbound::{ApiError, CredentialPort, RawApiPort, FALLBACK_ERROR_MESSAGE};

/// Default backend address used when no override is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// reqwest-backed adapter for the backend API
#[derive(Clone)]
pub struct ApiAdapter {
    client: Client,
    base_url: String,
    credentials: Arc<dyn CredentialPort>,
}

impl ApiAdapter {
    pub fn new(base_url: &str, credentials: Arc<dyn CredentialPort>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json");

        match self.credentials.bearer_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder, path: &str) -> Result<Value, ApiError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(path, error = %e, "Request could not be sent");
            ApiError::request_failed(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_message(&body);
            tracing::warn!(path, status = %status, "Request failed: {}", message);
            return Err(ApiError::RequestFailed(message));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

/// Pull a user-facing message out of an error response body
///
/// A string `detail` is used verbatim. A list `detail` (request validation
/// errors) is flattened to its `msg` entries. Anything else yields the
/// fallback message.
pub fn extract_error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return FALLBACK_ERROR_MESSAGE.to_string();
    };

    match value.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
        Some(Value::Array(items)) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                FALLBACK_ERROR_MESSAGE.to_string()
            } else {
                messages.join("; ")
            }
        }
        _ => FALLBACK_ERROR_MESSAGE.to_string(),
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        tracing::debug!(path, "GET");
        self.send(self.request(Method::GET, path), path).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        tracing::debug!(path, "POST");
        self.send(self.request(Method::POST, path).json(body), path)
            .await
    }

    async fn post_empty_json(&self, path: &str) -> Result<Value, ApiError> {
        tracing::debug!(path, "POST (empty)");
        self.send(self.request(Method::POST, path), path).await
    }
}
