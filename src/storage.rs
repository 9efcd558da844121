//! Local key/value store, persisted as a single JSON object on disk.
//!
//! Persistence is best-effort: read or write failures are logged and the
//! in-memory map stays authoritative, so the worst failure mode is stale or
//! default UI state on the next launch.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use parking_lot::RwLock;
use thiserror::Error;

/// Keys written by the application.
pub mod keys {
    /// `"dark"` or `"light"`, written when the theme is toggled.
    pub const THEME: &str = "theme";
    /// Stringified integer pixels, written on every panel resize.
    pub const PANEL_HEIGHT: &str = "panel:h";
    /// Stringified integer pixels, written on every sidebar resize.
    pub const SIDEBAR_WIDTH: &str = "sidebar:w";
    /// JSON array of `{to, label, pinned?}`, written on every tab change.
    pub const OPEN_TABS: &str = "tabs:open";
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access storage file: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// String → string store backed by a JSON file.
#[derive(Debug, Default)]
pub struct Storage {
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl Storage {
    /// Open the store at `path`, falling back to an empty map when the file
    /// is absent, unreadable, or corrupt.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Falling back to empty storage");
                BTreeMap::new()
            }
        };
        Self {
            path: Some(path),
            entries,
        }
    }

    /// A store that never touches the filesystem.
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Insert and persist. The write is best-effort; failures keep the
    /// in-memory value and are only logged.
    pub fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn flush(&self) {
        let Some(ref path) = self.path else {
            return;
        };
        if let Err(e) = write_entries(path, &self.entries) {
            tracing::error!(path = %path.display(), %e, "Failed to save storage");
        }
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

fn write_entries(path: &Path, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(entries)?)?;
    Ok(())
}

/// Storage file location: local data directory, with a home-directory
/// fallback when that cannot be resolved.
fn default_path() -> PathBuf {
    const FILENAME: &str = "storage.json";
    if let Some(mut path) = dirs::data_local_dir() {
        path.push("folio");
        path.push(FILENAME);
        return path;
    }
    if let Some(mut path) = dirs::home_dir() {
        path.push(".folio");
        path.push(FILENAME);
        return path;
    }
    PathBuf::from(FILENAME)
}

/// Process-wide store instance.
pub static STORE: LazyLock<RwLock<Storage>> =
    LazyLock::new(|| RwLock::new(Storage::open(default_path())));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_get_set() {
        let mut storage = Storage::in_memory();
        assert_eq!(storage.get(keys::THEME), None);

        storage.set(keys::THEME, "light");
        assert_eq!(storage.get(keys::THEME), Some("light"));

        storage.set(keys::THEME, "dark");
        assert_eq!(storage.get(keys::THEME), Some("dark"));
    }

    #[test]
    fn test_roundtrip_through_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");

        {
            let mut storage = Storage::open(&path);
            storage.set("panel:h", "192");
            storage.set("sidebar:w", "256");
        }

        let storage = Storage::open(&path);
        assert_eq!(storage.get("panel:h"), Some("192"));
        assert_eq!(storage.get("sidebar:w"), Some("256"));
    }

    #[test]
    fn test_corrupt_file_falls_back_to_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");
        fs::write(&path, "{not json").expect("write corrupt file");

        let storage = Storage::open(&path);
        assert_eq!(storage.get(keys::OPEN_TABS), None);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = Storage::open(dir.path().join("nope.json"));
        assert_eq!(storage.get("anything"), None);
    }

    #[test]
    fn test_set_creates_parent_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("a").join("b").join("storage.json");

        let mut storage = Storage::open(&path);
        storage.set("theme", "dark");

        assert!(path.exists());
    }
}
