//! JSON-file backed store used by the command-line driver.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::error::{Error, Result};

/// A store persisted as a flat JSON object in a single file.
///
/// A missing file reads as an empty store. The file is rewritten on every
/// change and removed once the last key is deleted. Reads of a file that is
/// not a JSON object fail; writes and deletes replace it.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open (lazily) the store at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries, sorted by key.
    pub fn entries(&self) -> Result<BTreeMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove the backing file.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Already gone
            Err(e) => Err(e.into()),
        }
    }

    /// Entries to start a change from. An unparseable file counts as empty.
    fn entries_for_update(&self) -> Result<BTreeMap<String, String>> {
        match self.entries() {
            Err(Error::Json(e)) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Replacing unreadable storage file");
                Ok(BTreeMap::new())
            },
            other => other,
        }
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if entries.is_empty() {
            return self.clear();
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries_for_update()?;
        entries.insert(key.to_string(), value.to_string());
        self.write(&entries)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        let mut entries = match self.entries() {
            Ok(entries) => entries,
            Err(Error::Json(e)) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Removing unreadable storage file");
                return self.clear();
            },
            Err(e) => return Err(e),
        };
        if entries.remove(key).is_some() {
            self.write(&entries)?;
        }
        Ok(())
    }
}
