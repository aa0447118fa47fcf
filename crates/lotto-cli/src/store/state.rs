use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use lotto_core::{Favorites, Number, NumberSet, Theme};

use super::{KeyValueStore, StorageKeys, StoreResult};

/// Output of the most recent `generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastResults {
    pub batch_id: String,
    pub generated_at: String,
    pub sets: Vec<NumberSet>,
}

/// Last accepted checker inputs, reused when a later check omits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerInputs {
    pub winning: NumberSet,
    pub bonus: Number,
    pub mine: NumberSet,
}

/// Typed view over the key-value store.
///
/// Unreadable or malformed values are logged and treated as absent.
#[derive(Debug)]
pub struct LottoState<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> LottoState<S> {
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn theme(&self) -> Theme {
        let raw = match self.read_raw(&self.keys.theme) {
            Some(raw) => raw,
            None => return Theme::default(),
        };
        match raw.parse::<Theme>() {
            Ok(theme) => theme,
            Err(err) => {
                warn!(event = "state_unreadable", key = %self.keys.theme, error = %err);
                Theme::default()
            }
        }
    }

    pub fn set_theme(&mut self, theme: Theme) -> StoreResult<()> {
        self.store.set(&self.keys.theme, theme.as_str())
    }

    pub fn last_results(&self) -> Option<LastResults> {
        self.read_json(&self.keys.last_sets)
    }

    pub fn set_last_results(&mut self, results: &LastResults) -> StoreResult<()> {
        let key = self.keys.last_sets.clone();
        self.write_json(&key, results)
    }

    pub fn favorites(&self) -> Favorites {
        self.read_json(&self.keys.favorites).unwrap_or_default()
    }

    pub fn set_favorites(&mut self, favorites: &Favorites) -> StoreResult<()> {
        let key = self.keys.favorites.clone();
        self.write_json(&key, favorites)
    }

    pub fn checker_inputs(&self) -> Option<CheckerInputs> {
        self.read_json(&self.keys.checker)
    }

    pub fn set_checker_inputs(&mut self, inputs: &CheckerInputs) -> StoreResult<()> {
        let key = self.keys.checker.clone();
        self.write_json(&key, inputs)
    }

    pub fn clear_checker_inputs(&mut self) -> StoreResult<()> {
        self.store.remove(&self.keys.checker)
    }

    fn read_raw(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(event = "state_unreadable", key = %key, error = %err);
                None
            }
        }
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.read_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(event = "state_unreadable", key = %key, error = %err);
                None
            }
        }
    }

    fn write_json<T: Serialize>(&mut self, key: &str, value: &T) -> StoreResult<()> {
        let encoded = serde_json::to_string(value)?;
        self.store.set(key, &encoded)
    }
}

#[cfg(test)]
mod tests {
    use lotto_core::FavoriteEntry;

    use super::*;
    use crate::store::MemoryStore;

    fn state() -> LottoState<MemoryStore> {
        LottoState::new(MemoryStore::new(), StorageKeys::default())
    }

    fn ticket(values: &[u8]) -> NumberSet {
        NumberSet::from_values(values).expect("valid set")
    }

    #[test]
    fn empty_store_reads_as_defaults() {
        let state = state();
        assert_eq!(state.theme(), Theme::Light);
        assert_eq!(state.last_results(), None);
        assert!(state.favorites().is_empty());
        assert_eq!(state.checker_inputs(), None);
    }

    #[test]
    fn corrupt_values_read_as_absent() {
        let mut store = MemoryStore::new();
        store.set("theme", "sepia").expect("write");
        store.set("favorites", "{not json").expect("write");
        store.set("last_sets", r#"{"sets":[[1,2,3]]}"#).expect("write");
        let state = LottoState::new(store, StorageKeys::default());

        assert_eq!(state.theme(), Theme::Light);
        assert!(state.favorites().is_empty());
        assert_eq!(state.last_results(), None);
    }

    #[test]
    fn values_survive_a_write() {
        let mut state = state();
        state.set_theme(Theme::Dark).expect("write theme");
        assert_eq!(state.theme(), Theme::Dark);

        let results = LastResults {
            batch_id: "batch".to_string(),
            generated_at: "2026-10-19 12:00".to_string(),
            sets: vec![ticket(&[1, 2, 3, 4, 5, 6])],
        };
        state.set_last_results(&results).expect("write results");
        assert_eq!(state.last_results(), Some(results));

        let mut favorites = Favorites::new();
        favorites.save(FavoriteEntry {
            numbers: ticket(&[7, 8, 9, 10, 11, 12]),
            note: "lucky".to_string(),
            saved_at: "2026-10-19".to_string(),
        });
        state.set_favorites(&favorites).expect("write favorites");
        assert_eq!(state.favorites(), favorites);
    }

    #[test]
    fn checker_inputs_can_be_cleared() {
        let mut state = state();
        let inputs = CheckerInputs {
            winning: ticket(&[1, 2, 3, 4, 5, 6]),
            bonus: Number::new(7).expect("valid bonus"),
            mine: ticket(&[1, 2, 3, 4, 5, 7]),
        };
        state.set_checker_inputs(&inputs).expect("write inputs");
        assert_eq!(state.checker_inputs(), Some(inputs));

        state.clear_checker_inputs().expect("clear inputs");
        assert_eq!(state.checker_inputs(), None);
    }
}
