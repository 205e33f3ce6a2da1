//! In-process stores.

use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::{Error, Result};

/// A store backed by a `HashMap`. Lives as long as the value does.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// A store whose every operation fails, standing in for storage that the
/// browser or the user has disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(Error::other("storage is unavailable"))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(Error::other("storage is unavailable"))
    }

    fn delete(&mut self, _key: &str) -> Result<()> {
        Err(Error::other("storage is unavailable"))
    }
}

/// A shared in-memory store that counts writes. Clones see the same data.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct RecordingStore {
    entries: std::rc::Rc<std::cell::RefCell<HashMap<String, String>>>,
    writes: std::rc::Rc<std::cell::Cell<usize>>,
}

#[cfg(test)]
impl RecordingStore {
    /// Number of `set` and `delete` calls so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

#[cfg(test)]
impl KeyValueStore for RecordingStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.writes.set(self.writes.get() + 1);
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.writes.set(self.writes.get() + 1);
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
