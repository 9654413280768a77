//! Key/value snapshot storage.
//!
//! The booking store writes its whole collection under a single key. Two
//! backends are provided: one file per key inside a data directory, and an
//! in-memory map for sessions that should not touch disk.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

/// Backend for whole-snapshot reads and writes.
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotStorage {
    /// Raw snapshot under `key`, or `None` when nothing was stored yet.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the snapshot under `key`.
    fn write(&mut self, key: &str, data: &str) -> Result<()>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(|c| c == '/' || c == '\\') || key.starts_with('.') {
            return Err(anyhow!("invalid storage key {:?}", key));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl SnapshotStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&path)
            .with_context(|| format!("failed to read snapshot from {}", path.display()))?;
        Ok(Some(data))
    }

    fn write(&mut self, key: &str, data: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create dir {}", self.dir.display()))?;

        // Write beside the target and rename so a crash never leaves half a snapshot.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, data)
            .with_context(|| format!("failed to write snapshot to {}", tmp.display()))?;
        fs::rename(&tmp, &path)
            .with_context(|| format!("failed to replace snapshot {}", path.display()))?;
        Ok(())
    }
}

/// Process-local storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: impl Into<String>, data: impl Into<String>) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.into(), data.into());
        storage
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl SnapshotStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, data: &str) -> Result<()> {
        self.entries.insert(key.to_string(), data.to_string());
        Ok(())
    }
}
