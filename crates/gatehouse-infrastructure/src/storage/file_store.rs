//! File-backed key-value storage.

use super::atomic_toml::AtomicTomlFile;
use gatehouse_core::error::Result;
use gatehouse_core::storage::KeyValueStorage;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

type Entries = BTreeMap<String, String>;

/// Persists string entries in a single TOML table.
///
/// Every write is a locked read-modify-write of the whole file, so entries
/// written by another process in between are preserved.
pub struct FileKeyValueStorage {
    file: AtomicTomlFile<Entries>,
}

impl FileKeyValueStorage {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    fn entries(&self) -> Result<Entries> {
        Ok(self.file.load()?.unwrap_or_default())
    }
}

impl KeyValueStorage for FileKeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.file.update(Entries::new(), |entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        if !self.path().exists() {
            return Ok(());
        }
        self.file.update(Entries::new(), |entries| {
            entries.remove(key);
        })
    }
}
