//! JSON file substrate
//!
//! All entries live in one JSON object on disk. Every write rewrites the file through a
//! temporary sibling and a rename, so a crash leaves either the old or the new contents.

use super::{KeyValueStore, StoreError};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`
    ///
    /// A missing file is an empty store. A file that is not a JSON object of strings is
    /// treated as empty too and is replaced on the next write.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let items = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
                warn!(path = %path.display(), %err, "ignoring corrupt store file");
                BTreeMap::new()
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        debug!(path = %path.display(), entries = items.len(), "opened store");

        Ok(Self { path, items })
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let encoded = serde_json::to_string_pretty(&self.items)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, encoded)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, id: &str) -> Option<String> {
        self.items.get(id).cloned()
    }

    fn set_item(&mut self, id: &str, value: String) -> Result<(), StoreError> {
        self.items.insert(id.to_string(), value);
        self.flush()
    }

    fn remove_item(&mut self, id: &str) -> Result<(), StoreError> {
        if self.items.remove(id).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
