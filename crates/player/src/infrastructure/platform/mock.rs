//! In-memory platform for tests

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ports::outbound::platform::{DocumentProvider, StorageProvider};
use crate::state::Platform;

/// Storage that lives only as long as its clones
#[derive(Clone, Default)]
pub struct MemoryStorageProvider {
    data: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorageProvider {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.save(key, value);
        storage
    }
}

impl StorageProvider for MemoryStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut guard) = self.data.write() {
            guard.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.data.read().ok().and_then(|guard| guard.get(key).cloned())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut guard) = self.data.write() {
            guard.remove(key);
        }
    }
}

/// Records the last page title
#[derive(Clone, Default)]
pub struct RecordingDocumentProvider {
    title: Arc<RwLock<Option<String>>>,
}

impl RecordingDocumentProvider {
    pub fn title(&self) -> Option<String> {
        self.title.read().ok().and_then(|guard| guard.clone())
    }
}

impl DocumentProvider for RecordingDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Ok(mut guard) = self.title.write() {
            *guard = Some(title.to_string());
        }
    }
}

/// Platform backed entirely by memory
pub fn create_mock_platform() -> (Platform, MemoryStorageProvider, RecordingDocumentProvider) {
    let storage = MemoryStorageProvider::default();
    let document = RecordingDocumentProvider::default();
    let platform = Platform::new(storage.clone(), document.clone());
    (platform, storage, document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_delegates_to_providers() {
        let (platform, storage, document) = create_mock_platform();

        platform.storage_save("token", "t-1");
        assert_eq!(storage.load("token").as_deref(), Some("t-1"));

        platform.storage_remove("token");
        assert_eq!(platform.storage_load("token"), None);

        platform.set_page_title("Life Sim Game");
        assert_eq!(document.title().as_deref(), Some("Life Sim Game"));
    }
}
