//! Durable key/value preferences (interface language, theme).
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

/// Storage key holding the interface locale code.
pub const LOCALE_KEY: &str = "app-language";
/// Storage key holding the colour theme.
pub const THEME_KEY: &str = "app-theme";

const FILE_NAME: &str = "preferences.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("preferences io error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("preferences encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Persisted string settings. Reads never fail: a missing or unreadable
/// value is reported as `None`.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// JSON object on disk, rewritten on every `set`.
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open `<dir>/preferences.json`. An absent or corrupt file starts empty.
    pub fn open(dir: &Path) -> Self {
        let path = dir.join(FILE_NAME);
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str::<BTreeMap<String, String>>(&raw).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "ignoring corrupt preferences file");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "preferences file unreadable");
                BTreeMap::new()
            }
        };
        Self { path, entries: Mutex::new(entries) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io { path: self.path.clone(), source };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let raw = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, raw).map_err(io_err)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }
}

/// Process-local store for tests and for running without a writable data dir.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.entries.lock().insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path());
        assert_eq!(store.get(LOCALE_KEY), None);
        store.set(LOCALE_KEY, "ru").unwrap();
        store.set(THEME_KEY, "dark").unwrap();

        let reopened = FileStore::open(dir.path());
        assert_eq!(reopened.get(LOCALE_KEY).as_deref(), Some("ru"));
        assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn file_store_creates_missing_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStore::open(&nested);
        store.set(LOCALE_KEY, "he").unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FILE_NAME), "{{{ not json").unwrap();
        let store = FileStore::open(dir.path());
        assert_eq!(store.get(LOCALE_KEY), None);
        store.set(LOCALE_KEY, "en").unwrap();
        assert_eq!(FileStore::open(dir.path()).get(LOCALE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn memory_store_seeded() {
        let store = MemoryStore::with(LOCALE_KEY, "he");
        assert_eq!(store.get(LOCALE_KEY).as_deref(), Some("he"));
        assert_eq!(store.get(THEME_KEY), None);
    }
}
