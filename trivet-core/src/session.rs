//! Session controller for the accept/skip workflow.

use crate::error::{FetchError, StoreError};
use crate::extract;
use crate::groceries;
use crate::meals;
use crate::source::MealSource;
use crate::store::MealStore;
use crate::types::{Groceries, LikedMeals, MealRecord};

/// Owns the full session context: the meal source, the durable store, the
/// currently displayed meal, and both in-memory mappings. All mutation
/// goes through the methods here; there is no ambient state.
///
/// Every operation runs to completion before the next one starts (callers
/// await them one at a time), so an accept's merge is always finished
/// before its follow-up fetch begins.
pub struct Session {
    source: Box<dyn MealSource>,
    store: MealStore,
    current: Option<MealRecord>,
    liked: LikedMeals,
    groceries: Groceries,
}

impl Session {
    /// Create a session with empty state and no current meal.
    pub fn new(source: Box<dyn MealSource>, store: MealStore) -> Self {
        Self {
            source,
            store,
            current: None,
            liked: LikedMeals::new(),
            groceries: Groceries::new(),
        }
    }

    /// Create a session and perform the startup fetch.
    ///
    /// The fetch outcome is returned alongside the session: a failed
    /// startup fetch leaves no current meal but is not fatal, and callers
    /// must render that as a "no meal" state rather than an error.
    pub async fn start(
        source: Box<dyn MealSource>,
        store: MealStore,
    ) -> (Self, Result<(), FetchError>) {
        let mut session = Self::new(source, store);
        let outcome = session.fetch_next().await;
        (session, outcome)
    }

    /// Request a new meal, replacing the current one on success.
    ///
    /// Single attempt, no retry: on failure the previous meal (if any)
    /// stays displayed and the error is returned.
    pub async fn fetch_next(&mut self) -> Result<(), FetchError> {
        match self.source.random_meal().await {
            Ok(meal) => {
                tracing::debug!(meal = %meal.name, "current meal replaced");
                self.current = Some(meal);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "meal fetch failed, keeping current meal");
                Err(e)
            }
        }
    }

    /// Like the current meal: record it, merge its ingredients into the
    /// grocery list, then fetch the next meal.
    ///
    /// A no-op when no meal is displayed. The merge completes before the
    /// follow-up fetch starts, so a failed fetch never loses the like.
    pub async fn accept(&mut self) -> Result<(), FetchError> {
        let Some(meal) = &self.current else {
            tracing::debug!("accept with no current meal ignored");
            return Ok(());
        };

        self.liked = meals::record(&self.liked, &meal.name, meal.source().unwrap_or(""));
        self.groceries = groceries::merge(&self.groceries, extract::ingredients(meal));
        tracing::info!(
            meal = %meal.name,
            liked = self.liked.len(),
            groceries = self.groceries.len(),
            "meal liked"
        );

        self.fetch_next().await
    }

    /// Pass on the current meal and fetch the next one. The registry and
    /// grocery list are untouched.
    pub async fn skip(&mut self) -> Result<(), FetchError> {
        self.fetch_next().await
    }

    /// Clear both in-memory mappings. Durable storage is untouched.
    pub fn reset_meals(&mut self) {
        self.liked = LikedMeals::new();
        self.groceries = Groceries::new();
        tracing::debug!("in-memory state reset");
    }

    /// Persist both mappings under their fixed keys.
    pub fn save(&self) -> Result<(), StoreError> {
        self.store.save(&self.liked, &self.groceries)
    }

    /// Replace both in-memory mappings with the saved snapshot.
    ///
    /// All-or-nothing: when the store reports nothing saved, or either key
    /// is missing, in-memory state is left exactly as it was.
    pub fn load(&mut self) -> Result<(), StoreError> {
        let (liked, groceries) = self.store.load()?;
        self.liked = liked;
        self.groceries = groceries;
        Ok(())
    }

    /// Erase the durable copy of the state.
    ///
    /// In-memory state is not reset; `reset_meals` does that.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.clear()
    }

    /// The currently displayed meal, if any.
    pub fn current(&self) -> Option<&MealRecord> {
        self.current.as_ref()
    }

    /// Read-only snapshot of the liked meals.
    pub fn liked(&self) -> &LikedMeals {
        &self.liked
    }

    /// Read-only snapshot of the grocery list.
    pub fn groceries(&self) -> &Groceries {
        &self.groceries
    }
}
