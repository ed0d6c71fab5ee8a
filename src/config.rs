//! Application configuration

use crate::game::GameConfig;
use crate::storage::{DEFAULT_SCOPE, FileStore, Storage, StoreError};
use std::path::PathBuf;

/// Title used in share text
pub const DEFAULT_TITLE: &str = "Rewordle";

/// Link appended to share text
pub const DEFAULT_LINK: &str = "https://rewordle.app/";

#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file backing the store
    pub state_path: PathBuf,
    /// Key prefix inside the store
    pub scope: String,
    pub title: String,
    pub link: Option<String>,
    pub game: GameConfig,
}

impl Config {
    /// `<local data dir>/rewordle/storage.json`, or the working directory if the platform has
    /// no data directory
    #[must_use]
    pub fn default_state_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rewordle")
            .join("storage.json")
    }

    /// Open the configured file store
    ///
    /// # Errors
    /// Returns an error if the state file exists but cannot be read.
    pub fn open_storage(&self) -> Result<Storage<FileStore>, StoreError> {
        let backend = FileStore::open(&self.state_path)?;
        Ok(Storage::new(self.scope.clone(), backend))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_path: Self::default_state_path(),
            scope: DEFAULT_SCOPE.to_string(),
            title: DEFAULT_TITLE.to_string(),
            link: Some(DEFAULT_LINK.to_string()),
            game: GameConfig::default(),
        }
    }
}
