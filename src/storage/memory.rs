use super::{KeyValueStore, StoreError};
use rustc_hash::FxHashMap;

/// In-memory substrate, lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, id: &str) -> Option<String> {
        self.items.get(id).cloned()
    }

    fn set_item(&mut self, id: &str, value: String) -> Result<(), StoreError> {
        self.items.insert(id.to_string(), value);
        Ok(())
    }

    fn remove_item(&mut self, id: &str) -> Result<(), StoreError> {
        self.items.remove(id);
        Ok(())
    }
}
