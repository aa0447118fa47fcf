mod file;
#[cfg(test)]
mod memory;
mod state;

pub use file::FileStore;
#[cfg(test)]
pub use memory::MemoryStore;
pub use state::{CheckerInputs, LastResults, LottoState};

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid store key: {0:?}")]
    InvalidKey(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Whole-value string store; every write replaces the previous value.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

/// Names under which each persisted value is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub theme: String,
    pub last_sets: String,
    pub favorites: String,
    pub checker: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            theme: "theme".to_string(),
            last_sets: "last_sets".to_string(),
            favorites: "favorites".to_string(),
            checker: "checker".to_string(),
        }
    }
}

impl StorageKeys {
    pub fn validate(&self) -> Result<(), String> {
        let keys = [&self.theme, &self.last_sets, &self.favorites, &self.checker];
        for key in keys {
            if !is_valid_key(key) {
                return Err(format!("invalid storage key {key:?}"));
            }
        }
        for (idx, key) in keys.iter().enumerate() {
            if keys[idx + 1..].contains(key) {
                return Err(format!("storage key {key:?} is used twice"));
            }
        }
        Ok(())
    }
}

/// Keys double as file names, so only a conservative alphabet is allowed.
pub(crate) fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keys_are_valid() {
        assert_eq!(StorageKeys::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_path_like_and_duplicate_keys() {
        let mut keys = StorageKeys::default();
        keys.theme = "../theme".to_string();
        assert!(keys.validate().is_err());

        let mut keys = StorageKeys::default();
        keys.checker = keys.favorites.clone();
        assert!(keys.validate().is_err());
    }
}
