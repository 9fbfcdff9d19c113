//! WASM platform implementations
//!
//! Browser builds keep the token in `window.localStorage`, the same place
//! earlier web builds used.

use crate::ports::outbound::platform::{DocumentProvider, StorageProvider};
use crate::state::{Platform, PlatformOptions};

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// localStorage-backed storage provider
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match local_storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    tracing::error!("Failed to write {} to localStorage", key);
                }
            }
            None => tracing::error!("localStorage unavailable"),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            if storage.remove_item(key).is_err() {
                tracing::error!("Failed to remove {} from localStorage", key);
            }
        }
    }
}

/// Sets `document.title`
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// Create platform services for the browser
///
/// Storage location is fixed by the browser; the path override is ignored.
pub fn create_platform(_options: &PlatformOptions) -> Platform {
    Platform::new(WasmStorageProvider, WasmDocumentProvider)
}
