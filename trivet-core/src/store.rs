//! Durable storage for the liked-meal and grocery mappings.

use std::fs;
use std::path::PathBuf;

use crate::error::StoreError;
use crate::types::{Groceries, LikedMeals};

/// Fixed key holding the liked-meal mapping.
const MEALS_KEY: &str = "liked-meals.json";
/// Fixed key holding the grocery mapping.
const GROCERIES_KEY: &str = "groceries.json";

/// Flat key-value store for the two persisted mappings.
///
/// Each key is one JSON file under a namespace directory. The two writes
/// are not transactional: a crash between them can leave the keys
/// inconsistent, which is acceptable for a single-user tool.
pub struct MealStore {
    dir: PathBuf,
}

impl MealStore {
    /// Create a store over the given namespace directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Get the default namespace directory: ~/.trivet/store
    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".trivet").join("store"))
            .unwrap_or_else(|| PathBuf::from("data/store"))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// Check whether both keys are present, i.e. a load would find state.
    pub fn is_saved(&self) -> bool {
        self.key_path(MEALS_KEY).exists() && self.key_path(GROCERIES_KEY).exists()
    }

    /// Serialize both mappings and write them under their fixed keys.
    pub fn save(&self, meals: &LikedMeals, groceries: &Groceries) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(
            self.key_path(MEALS_KEY),
            serde_json::to_string_pretty(meals)?,
        )?;
        fs::write(
            self.key_path(GROCERIES_KEY),
            serde_json::to_string_pretty(groceries)?,
        )?;

        tracing::debug!(
            dir = %self.dir.display(),
            meals = meals.len(),
            groceries = groceries.len(),
            "state saved"
        );
        Ok(())
    }

    /// Read both mappings back.
    ///
    /// All-or-nothing: if either key is missing the load reports
    /// [`StoreError::NotFound`] without decoding anything, so a caller
    /// never applies half a snapshot.
    pub fn load(&self) -> Result<(LikedMeals, Groceries), StoreError> {
        let meals_path = self.key_path(MEALS_KEY);
        let groceries_path = self.key_path(GROCERIES_KEY);

        if !meals_path.exists() || !groceries_path.exists() {
            return Err(StoreError::NotFound);
        }

        let meals: LikedMeals = serde_json::from_str(&fs::read_to_string(&meals_path)?)?;
        let groceries: Groceries = serde_json::from_str(&fs::read_to_string(&groceries_path)?)?;

        tracing::debug!(
            dir = %self.dir.display(),
            meals = meals.len(),
            groceries = groceries.len(),
            "state loaded"
        );
        Ok((meals, groceries))
    }

    /// Erase the entire namespace, all keys included.
    ///
    /// In-memory state is not touched; callers wanting a blank slate in
    /// memory must reset that explicitly.
    pub fn clear(&self) -> Result<(), StoreError> {
        if self.dir.exists() {
            fs::remove_dir_all(&self.dir)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn mapping(entries: &[(&str, &str)]) -> std::collections::BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = MealStore::new(dir.path());

        let meals = mapping(&[("Chili", "http://a"), ("Omelette", "")]);
        let groceries = mapping(&[("Egg", "2 + 1"), ("Salt", "1 tsp")]);

        store.save(&meals, &groceries).unwrap();
        let (loaded_meals, loaded_groceries) = store.load().unwrap();

        assert_eq!(loaded_meals, meals);
        assert_eq!(loaded_groceries, groceries);
    }

    #[test]
    fn save_is_byte_stable_for_equal_state() {
        let dir = TempDir::new().unwrap();
        let store = MealStore::new(dir.path());
        let meals = mapping(&[("Chili", "http://a")]);
        let groceries = mapping(&[("Egg", "2")]);

        store.save(&meals, &groceries).unwrap();
        let first = fs::read(dir.path().join(GROCERIES_KEY)).unwrap();
        store.save(&meals, &groceries).unwrap();
        let second = fs::read(dir.path().join(GROCERIES_KEY)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn load_reports_not_found_when_nothing_saved() {
        let dir = TempDir::new().unwrap();
        let store = MealStore::new(dir.path());

        assert!(matches!(store.load(), Err(StoreError::NotFound)));
        assert!(!store.is_saved());
    }

    #[test]
    fn load_is_all_or_nothing_when_one_key_is_missing() {
        let dir = TempDir::new().unwrap();
        let store = MealStore::new(dir.path());

        // Only the meals key present, as if a crash hit between the writes.
        fs::create_dir_all(dir.path()).unwrap();
        fs::write(dir.path().join(MEALS_KEY), "{\"Chili\": \"http://a\"}").unwrap();

        assert!(matches!(store.load(), Err(StoreError::NotFound)));
        assert!(!store.is_saved());
    }

    #[test]
    fn save_overwrites_previous_state() {
        let dir = TempDir::new().unwrap();
        let store = MealStore::new(dir.path());

        store
            .save(&mapping(&[("Chili", "http://a")]), &mapping(&[("Egg", "2")]))
            .unwrap();
        store
            .save(&mapping(&[("Stew", "http://b")]), &mapping(&[("Oats", "1 cup")]))
            .unwrap();

        let (meals, groceries) = store.load().unwrap();
        assert_eq!(meals, mapping(&[("Stew", "http://b")]));
        assert_eq!(groceries, mapping(&[("Oats", "1 cup")]));
    }

    #[test]
    fn clear_erases_the_whole_namespace() {
        let dir = TempDir::new().unwrap();
        let store = MealStore::new(dir.path().join("store"));

        store
            .save(&mapping(&[("Chili", "http://a")]), &mapping(&[("Egg", "2")]))
            .unwrap();
        assert!(store.is_saved());

        store.clear().unwrap();
        assert!(!store.is_saved());
        assert!(matches!(store.load(), Err(StoreError::NotFound)));
    }

    #[test]
    fn clear_on_an_empty_store_succeeds() {
        let dir = TempDir::new().unwrap();
        let store = MealStore::new(dir.path().join("never-created"));
        store.clear().unwrap();
    }
}
