use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::number::NumberSet;

/// Maximum number of favorites kept; older entries are evicted.
pub const FAVORITES_LIMIT: usize = 20;

/// A saved ticket with an optional note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FavoriteEntry {
    pub numbers: NumberSet,
    #[serde(default)]
    pub note: String,
    /// Human-readable date label captured at save time.
    pub saved_at: String,
}

/// Favorites ordered most-recent-first, never longer than `FAVORITES_LIMIT`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(from = "Vec<FavoriteEntry>", into = "Vec<FavoriteEntry>")]
#[schemars(transparent)]
pub struct Favorites {
    entries: Vec<FavoriteEntry>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend one entry and return whatever fell off the end.
    pub fn save(&mut self, entry: FavoriteEntry) -> Vec<FavoriteEntry> {
        self.entries.insert(0, entry);
        self.evict()
    }

    /// Save a batch so that its first set ends up at the top of the list.
    pub fn save_all(&mut self, sets: &[NumberSet], note: &str, saved_at: &str) -> Vec<FavoriteEntry> {
        for numbers in sets.iter().rev() {
            self.entries.insert(
                0,
                FavoriteEntry {
                    numbers: numbers.clone(),
                    note: note.to_string(),
                    saved_at: saved_at.to_string(),
                },
            );
        }
        self.evict()
    }

    /// Remove the entry at a 0-based position.
    pub fn delete(&mut self, position: usize) -> Result<FavoriteEntry> {
        if position >= self.entries.len() {
            return Err(CoreError::NoSuchFavorite {
                position,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(position))
    }

    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict(&mut self) -> Vec<FavoriteEntry> {
        if self.entries.len() > FAVORITES_LIMIT {
            self.entries.split_off(FAVORITES_LIMIT)
        } else {
            Vec::new()
        }
    }
}

impl From<Vec<FavoriteEntry>> for Favorites {
    fn from(entries: Vec<FavoriteEntry>) -> Self {
        let mut favorites = Self { entries };
        favorites.evict();
        favorites
    }
}

impl From<Favorites> for Vec<FavoriteEntry> {
    fn from(favorites: Favorites) -> Self {
        favorites.entries
    }
}
