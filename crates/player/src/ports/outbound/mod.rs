//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with external systems without
//! depending on concrete implementations.

pub mod api_port;
pub mod credential_port;
pub mod platform;
pub mod raw_api_port;

pub use api_port::{ApiError, ApiPort, FALLBACK_ERROR_MESSAGE};
pub use credential_port::CredentialPort;
pub use platform::{storage_keys, DocumentProvider, StorageProvider};
pub use raw_api_port::RawApiPort;

#[cfg(any(test, feature = "testing"))]
pub use credential_port::MockCredentialPort;
#[cfg(any(test, feature = "testing"))]
pub use raw_api_port::MockRawApiPort;
