//! Raw API Port - Object-safe HTTP boundary
//!
//! `ApiPort` is generic over response/request types which makes it not
//! object-safe. The composition root needs an abstraction that can be stored
//! behind `Arc<dyn ...>`.
//!
//! `RawApiPort` is the object-safe boundary implemented by adapters.
//! The application layer provides a typed wrapper that implements `ApiPort` on top.

use serde_json::Value;

use super::ApiError;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    /// POST without a request body, returning the JSON response
    async fn post_empty_json(&self, path: &str) -> Result<Value, ApiError>;
}
