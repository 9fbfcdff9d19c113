//! Bearer token persistence
//!
//! The token lives in platform storage under [`storage_keys::TOKEN`] and is
//! cached in memory after the first read, so the HTTP adapter can consult it
//! on every request without touching disk or localStorage.

use std::sync::RwLock;

use crate::ports::outbound::{storage_keys, CredentialPort, StorageProvider};

pub struct TokenStore<S: StorageProvider> {
    storage: S,
    cached: RwLock<Option<String>>,
}

impl<S: StorageProvider> TokenStore<S> {
    /// Create the store, reading any token persisted by a previous run
    pub fn load(storage: S) -> Self {
        let cached = storage
            .load(storage_keys::TOKEN)
            .filter(|token| !token.is_empty());
        if cached.is_some() {
            tracing::debug!("Restored persisted token");
        }
        Self {
            storage,
            cached: RwLock::new(cached),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.cached.read().ok().and_then(|guard| guard.clone())
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    pub fn set_token(&self, token: &str) {
        self.storage.save(storage_keys::TOKEN, token);
        if let Ok(mut guard) = self.cached.write() {
            *guard = Some(token.to_string());
        }
    }

    pub fn clear(&self) {
        self.storage.remove(storage_keys::TOKEN);
        if let Ok(mut guard) = self.cached.write() {
            *guard = None;
        }
    }
}

impl<S: StorageProvider + Send + Sync> CredentialPort for TokenStore<S> {
    fn bearer_token(&self) -> Option<String> {
        self.token()
    }

    fn store_token(&self, token: &str) {
        self.set_token(token)
    }

    fn clear_token(&self) {
        self.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::MemoryStorageProvider;

    #[test]
    fn starts_empty_without_persisted_token() {
        let store = TokenStore::load(MemoryStorageProvider::default());
        assert!(!store.has_token());
        assert_eq!(store.bearer_token(), None);
    }

    #[test]
    fn restores_persisted_token() {
        let storage = MemoryStorageProvider::with_entry(storage_keys::TOKEN, "tok-1");
        let store = TokenStore::load(storage);
        assert_eq!(store.token().as_deref(), Some("tok-1"));
    }

    #[test]
    fn set_token_writes_through() {
        let storage = MemoryStorageProvider::default();
        let store = TokenStore::load(storage.clone());

        store.set_token("tok-2");

        assert_eq!(store.token().as_deref(), Some("tok-2"));
        assert_eq!(storage.load(storage_keys::TOKEN).as_deref(), Some("tok-2"));
        // A fresh store on the same storage sees it too
        assert!(TokenStore::load(storage).has_token());
    }

    #[test]
    fn clear_removes_memory_and_storage() {
        let storage = MemoryStorageProvider::with_entry(storage_keys::TOKEN, "tok-3");
        let store = TokenStore::load(storage.clone());

        store.clear_token();

        assert!(!store.has_token());
        assert_eq!(storage.load(storage_keys::TOKEN), None);
    }

    #[test]
    fn empty_persisted_value_counts_as_absent() {
        let storage = MemoryStorageProvider::with_entry(storage_keys::TOKEN, "");
        assert!(!TokenStore::load(storage).has_token());
    }
}
