//! Namespaced persistence over a key/value substrate
//!
//! [`KeyValueStore`] is the durable substrate (a JSON file on disk, or memory in tests).
//! [`Storage`] layers a scope prefix and JSON encoding on top: values live under
//! `"{scope}.{key}"`, and reads fall back to a default when an entry is missing or cannot be
//! decoded.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::{Serialize, de::DeserializeOwned};
use std::io;
use thiserror::Error;
use tracing::{debug, warn};

/// Default scope for game data
pub const DEFAULT_SCOPE: &str = "rewordle";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("could not encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Durable string key/value substrate
pub trait KeyValueStore {
    /// Raw value stored under `id`, if any
    fn get_item(&self, id: &str) -> Option<String>;

    /// Store `value` under `id`
    ///
    /// # Errors
    /// Returns an error if the value cannot be made durable.
    fn set_item(&mut self, id: &str, value: String) -> Result<(), StoreError>;

    /// Remove the entry under `id`; removing a missing entry is not an error
    ///
    /// # Errors
    /// Returns an error if the removal cannot be made durable.
    fn remove_item(&mut self, id: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_item(&self, id: &str) -> Option<String> {
        (**self).get_item(id)
    }

    fn set_item(&mut self, id: &str, value: String) -> Result<(), StoreError> {
        (**self).set_item(id, value)
    }

    fn remove_item(&mut self, id: &str) -> Result<(), StoreError> {
        (**self).remove_item(id)
    }
}

/// Scoped JSON view of a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct Storage<S> {
    scope: String,
    backend: S,
}

impl<S: KeyValueStore> Storage<S> {
    pub fn new(scope: impl Into<String>, backend: S) -> Self {
        Self {
            scope: scope.into(),
            backend,
        }
    }

    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    #[must_use]
    pub const fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    fn id(&self, key: &str) -> String {
        format!("{}.{key}", self.scope)
    }

    /// Store `value` as JSON under `key`
    ///
    /// # Errors
    /// Returns an error if encoding fails or the backend cannot write.
    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let id = self.id(key);
        let encoded = serde_json::to_string(value)?;
        debug!(%id, value = %encoded, "set");
        self.backend.set_item(&id, encoded)
    }

    /// Read `key`, or `default` if it is absent or malformed
    ///
    /// # Examples
    /// ```
    /// use rewordle::storage::{MemoryStore, Storage};
    ///
    /// let mut storage = Storage::new("demo", MemoryStore::default());
    /// assert_eq!(storage.get("count", 0), 0);
    ///
    /// storage.set("count", &3).unwrap();
    /// assert_eq!(storage.get("count", 0), 3);
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.try_get(key).unwrap_or(default)
    }

    /// Read `key`, or `None` if it is absent or malformed
    pub fn try_get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let id = self.id(key);
        let raw = self.backend.get_item(&id)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(%id, %err, "discarding malformed entry");
                None
            }
        }
    }

    /// Remove `key`
    ///
    /// # Errors
    /// Returns an error if the backend cannot write.
    pub fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        let id = self.id(key);
        debug!(%id, "delete");
        self.backend.remove_item(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        values: Vec<u32>,
    }

    #[test]
    fn keys_are_scoped() {
        let mut storage = Storage::new("game", MemoryStore::default());
        storage.set("state", &1).unwrap();

        assert_eq!(storage.backend().get_item("game.state").as_deref(), Some("1"));
        assert_eq!(storage.backend().get_item("state"), None);
    }

    #[test]
    fn scopes_do_not_collide() {
        let mut backend = MemoryStore::default();
        backend.set_item("a.key", "1".into()).unwrap();
        backend.set_item("b.key", "2".into()).unwrap();

        let a = Storage::new("a", backend.clone());
        let b = Storage::new("b", backend);
        assert_eq!(a.get("key", 0), 1);
        assert_eq!(b.get("key", 0), 2);
    }

    #[test]
    fn structured_values_roundtrip() {
        let mut storage = Storage::new("game", MemoryStore::default());
        let sample = Sample {
            name: "crane".into(),
            values: vec![1, 2, 3],
        };
        storage.set("sample", &sample).unwrap();

        assert_eq!(storage.try_get::<Sample>("sample"), Some(sample));
    }

    #[test]
    fn malformed_entry_falls_back_to_default() {
        let mut backend = MemoryStore::default();
        backend.set_item("game.count", "{not json".into()).unwrap();
        backend.set_item("game.kind", "\"text\"".into()).unwrap();

        let storage = Storage::new("game", backend);
        assert_eq!(storage.get("count", 7), 7);
        // Valid JSON of the wrong shape is also a miss
        assert_eq!(storage.get("kind", 9_u32), 9);
    }

    #[test]
    fn delete_removes_entry() {
        let mut storage = Storage::new("game", MemoryStore::default());
        storage.set("count", &5).unwrap();
        storage.delete("count").unwrap();

        assert_eq!(storage.get("count", 0), 0);
        // Deleting again is fine
        storage.delete("count").unwrap();
    }
}
