//! API Port - Typed REST access to the game backend
//!
//! Every backend failure collapses into [`ApiError::RequestFailed`], carrying
//! the server's `detail` text or [`FALLBACK_ERROR_MESSAGE`]. The remaining
//! variants cover local JSON mapping problems.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Message used when the server gives no usable `detail`
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network failure or non-2xx response
    #[error("{0}")]
    RequestFailed(String),

    /// Response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Request body could not be encoded
    #[error("Failed to serialize request: {0}")]
    SerializeError(String),
}

impl ApiError {
    pub fn request_failed(message: impl Into<String>) -> Self {
        Self::RequestFailed(message.into())
    }

    /// Text shown to the user
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait ApiPort: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError>;

    async fn post<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>;

    /// POST without a request body
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError>;
}
