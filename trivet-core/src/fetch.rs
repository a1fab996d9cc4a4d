//! Convenience function for one-off meal fetches.
//!
//! This is a thin wrapper around MealDbClient for callers that don't hold
//! a client. For endpoint or timeout control, use MealDbClient directly.

use crate::error::FetchError;
use crate::source::{MealDbClient, MealSource};
use crate::types::MealRecord;

/// Fetch one random meal.
///
/// Uses the default MealDbClient configuration.
pub async fn fetch_random_meal() -> Result<MealRecord, FetchError> {
    let client = MealDbClient::new()?;
    client.random_meal().await
}
