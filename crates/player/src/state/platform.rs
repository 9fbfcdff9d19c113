//! Platform DI Container
//!
//! `Platform` aggregates the platform-specific service implementations behind
//! port traits so the UI and the composition root can pass one value around.
//!
//! Usage:
//! - Created by `create_platform()` in `infrastructure/platform/{desktop,wasm}.rs`
//! - Injected into Dioxus context by the runner
//! - Accessed in UI via `use_platform()`

use std::path::PathBuf;
use std::sync::Arc;

use crate::ports::outbound::{DocumentProvider, StorageProvider};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    storage: Arc<dyn StorageProviderDyn>,
    document: Arc<dyn DocumentProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait StorageProviderDyn: Send + Sync {
    fn save(&self, key: &str, value: &str);
    fn load(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

trait DocumentProviderDyn: Send + Sync {
    fn set_page_title(&self, title: &str);
}

impl<T: StorageProvider + Send + Sync> StorageProviderDyn for T {
    fn save(&self, key: &str, value: &str) {
        StorageProvider::save(self, key, value)
    }
    fn load(&self, key: &str) -> Option<String> {
        StorageProvider::load(self, key)
    }
    fn remove(&self, key: &str) {
        StorageProvider::remove(self, key)
    }
}

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
}

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<S, D>(storage: S, document: D) -> Self
    where
        S: StorageProvider + Send + Sync,
        D: DocumentProvider + Send + Sync,
    {
        Self {
            storage: Arc::new(storage),
            document: Arc::new(document),
        }
    }

    /// Save a string value with the given key
    pub fn storage_save(&self, key: &str, value: &str) {
        self.storage.save(key, value)
    }

    /// Load a string value by key, returns None if not found
    pub fn storage_load(&self, key: &str) -> Option<String> {
        self.storage.load(key)
    }

    /// Remove a value by key
    pub fn storage_remove(&self, key: &str) {
        self.storage.remove(key)
    }

    /// Get a StorageProvider adapter for use with application services
    ///
    /// ```ignore
    /// let tokens = TokenStore::load(platform.storage_adapter());
    /// ```
    pub fn storage_adapter(&self) -> PlatformStorageAdapter {
        PlatformStorageAdapter {
            platform: self.clone(),
        }
    }

    /// Set the browser page title (no-op on desktop)
    pub fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }
}

/// Options the composition root passes to `create_platform()`
#[derive(Clone, Debug, Default)]
pub struct PlatformOptions {
    /// Overrides the desktop storage file location
    pub storage_path: Option<PathBuf>,
}

// =============================================================================
// Storage adapter for application services
// =============================================================================

/// Adapter that lets application services use Platform's storage
/// through the `StorageProvider` port trait.
#[derive(Clone)]
pub struct PlatformStorageAdapter {
    platform: Platform,
}

impl StorageProvider for PlatformStorageAdapter {
    fn save(&self, key: &str, value: &str) {
        self.platform.storage_save(key, value)
    }

    fn load(&self, key: &str) -> Option<String> {
        self.platform.storage_load(key)
    }

    fn remove(&self, key: &str) {
        self.platform.storage_remove(key)
    }
}
