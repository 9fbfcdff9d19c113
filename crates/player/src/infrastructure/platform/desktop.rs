//! Desktop platform: a JSON file for storage, no page title.

use crate::ports::outbound::platform::{DocumentProvider, StorageProvider};
use crate::state::{Platform, PlatformOptions};
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Desktop storage provider with file-based persistence
///
/// Stores key-value pairs in a JSON file at:
/// - Linux: ~/.config/lifesim/player/storage.json
/// - macOS: ~/Library/Application Support/io.lifesim.player/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\lifesim\player\config\storage.json
#[derive(Clone)]
pub struct DesktopStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopStorageProvider {
    /// Create a storage provider at the platform config location
    pub fn new() -> Self {
        let storage_path = if let Some(dirs) = ProjectDirs::from("io", "lifesim", "player") {
            dirs.config_dir().join("storage.json")
        } else {
            // No home directory; keep the file next to the process.
            PathBuf::from("lifesim_storage.json")
        };

        Self::at_path(storage_path)
    }

    /// Create a storage provider backed by a specific file
    ///
    /// Loads existing data from the file if it exists.
    pub fn at_path(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();
        let cache = read_storage_file(&storage_path);

        tracing::debug!(path = ?storage_path, "Desktop storage opened");

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    /// Apply `change` to the cache, then write the whole map back out.
    fn update(&self, change: impl FnOnce(&mut HashMap<String, String>)) {
        let snapshot = {
            let Ok(mut entries) = self.cache.write() else {
                tracing::error!(path = ?self.storage_path, "Storage cache lock poisoned");
                return;
            };
            change(&mut entries);
            entries.clone()
        };
        write_storage_file(&self.storage_path, &snapshot);
    }
}

fn write_storage_file(path: &Path, entries: &HashMap<String, String>) {
    let dir = path.parent().filter(|dir| !dir.as_os_str().is_empty());
    if let Some(dir) = dir {
        if let Err(e) = fs::create_dir_all(dir) {
            tracing::error!(?dir, error = %e, "Could not create storage directory");
            return;
        }
    }

    let data = match serde_json::to_string_pretty(entries) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!(error = %e, "Could not encode storage entries");
            return;
        }
    };

    if let Err(e) = fs::write(path, data) {
        tracing::error!(?path, error = %e, "Could not write storage file");
    }
}

fn read_storage_file(path: &Path) -> HashMap<String, String> {
    if !path.exists() {
        return HashMap::new();
    }

    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!(?path, error = %e, "Storage file is not valid JSON, starting empty");
                HashMap::new()
            }
        },
        Err(e) => {
            tracing::warn!(?path, error = %e, "Storage file unreadable, starting empty");
            HashMap::new()
        }
    }
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        });
    }

    fn load(&self, key: &str) -> Option<String> {
        self.cache
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn remove(&self, key: &str) {
        self.update(|entries| {
            entries.remove(key);
        });
    }
}

/// Desktop document provider (no-op for page title)
#[derive(Clone, Default)]
pub struct DesktopDocumentProvider;

impl DocumentProvider for DesktopDocumentProvider {
    fn set_page_title(&self, _title: &str) {
        // Window title is managed by Dioxus desktop
    }
}

/// Create platform services for desktop
pub fn create_platform(options: &PlatformOptions) -> Platform {
    let storage = match &options.storage_path {
        Some(path) => DesktopStorageProvider::at_path(path.clone()),
        None => DesktopStorageProvider::new(),
    };

    Platform::new(storage, DesktopDocumentProvider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::storage_keys;

    #[test]
    fn values_survive_a_reload() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("storage.json");

        let storage = DesktopStorageProvider::at_path(&path);
        storage.save(storage_keys::TOKEN, "abc");
        assert!(path.exists());

        let reloaded = DesktopStorageProvider::at_path(&path);
        assert_eq!(reloaded.load(storage_keys::TOKEN).as_deref(), Some("abc"));
    }

    #[test]
    fn remove_is_persisted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");

        let storage = DesktopStorageProvider::at_path(&path);
        storage.save(storage_keys::TOKEN, "abc");
        storage.remove(storage_keys::TOKEN);

        let reloaded = DesktopStorageProvider::at_path(&path);
        assert_eq!(reloaded.load(storage_keys::TOKEN), None);
    }

    #[test]
    fn writes_keep_other_entries() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");

        let storage = DesktopStorageProvider::at_path(&path);
        storage.save("theme", "dark");
        storage.save(storage_keys::TOKEN, "abc");
        storage.remove(storage_keys::TOKEN);

        let on_disk: HashMap<String, String> =
            serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("json");
        assert_eq!(on_disk.get("theme").map(String::as_str), Some("dark"));
        assert!(!on_disk.contains_key(storage_keys::TOKEN));
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").expect("write");

        let storage = DesktopStorageProvider::at_path(&path);
        assert_eq!(storage.load(storage_keys::TOKEN), None);
    }

    #[test]
    fn create_platform_honours_storage_override() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("override.json");
        let platform = create_platform(&PlatformOptions {
            storage_path: Some(path.clone()),
        });

        platform.storage_save("k", "v");
        assert!(path.exists());
    }
}
