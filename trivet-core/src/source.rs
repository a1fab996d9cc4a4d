//! Meal source trait and implementations.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use crate::error::FetchError;
use crate::types::{MealRecord, MealsResponse};

/// Default random-meal endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.themealdb.com/api/json/v1/1/random.php";

/// Trait for meal sources, enabling mockability in tests.
#[async_trait]
pub trait MealSource: Send + Sync {
    /// Fetch one randomly selected meal.
    async fn random_meal(&self) -> Result<MealRecord, FetchError>;
}

/// Configuration for MealDbClient.
#[derive(Clone)]
pub struct MealDbClientBuilder {
    endpoint: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for MealDbClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MealDbClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("trivet/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the random-meal endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the MealDbClient.
    pub fn build(self) -> Result<MealDbClient, FetchError> {
        reqwest::Url::parse(&self.endpoint).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        let inner = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()?;

        Ok(MealDbClient {
            inner,
            endpoint: self.endpoint,
        })
    }
}

/// Production meal source backed by TheMealDB's random-meal endpoint.
///
/// One request per call, no caching and no retry: a failed fetch is
/// reported once and the caller keeps whatever meal it already had.
pub struct MealDbClient {
    inner: reqwest::Client,
    endpoint: String,
}

impl MealDbClient {
    /// Create a client with default configuration.
    pub fn new() -> Result<Self, FetchError> {
        MealDbClientBuilder::new().build()
    }

    /// Get a builder for custom configuration.
    pub fn builder() -> MealDbClientBuilder {
        MealDbClientBuilder::new()
    }
}

#[async_trait]
impl MealSource for MealDbClient {
    async fn random_meal(&self) -> Result<MealRecord, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, "network: fetching random meal");
        let response = self.inner.get(&self.endpoint).send().await?;
        let response = response.error_for_status()?;

        let payload: MealsResponse = response.json().await?;
        let meal = payload
            .meals
            .into_iter()
            .flatten()
            .next()
            .ok_or(FetchError::NoMeal)?;

        tracing::debug!(meal = %meal.name, "network: fetched random meal");
        Ok(meal)
    }
}

/// Canned outcome for MockMealSource.
pub enum MockMeal {
    Meal(MealRecord),
    Error(String),
}

/// Mock meal source for testing.
///
/// Returns the queued outcomes in order; once the queue runs dry every
/// further call reports an empty response.
pub struct MockMealSource {
    queue: Mutex<VecDeque<MockMeal>>,
}

impl MockMealSource {
    /// Create a new empty mock source.
    pub fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
        }
    }

    /// Queue a meal outcome.
    pub fn with_meal(self, meal: MealRecord) -> Self {
        self.queue.lock().unwrap().push_back(MockMeal::Meal(meal));
        self
    }

    /// Queue a failure outcome.
    pub fn with_error(self, error: &str) -> Self {
        self.queue
            .lock()
            .unwrap()
            .push_back(MockMeal::Error(error.to_string()));
        self
    }
}

impl Default for MockMealSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MealSource for MockMealSource {
    async fn random_meal(&self) -> Result<MealRecord, FetchError> {
        match self.queue.lock().unwrap().pop_front() {
            Some(MockMeal::Meal(meal)) => Ok(meal),
            Some(MockMeal::Error(e)) => Err(FetchError::InvalidUrl(e)),
            None => Err(FetchError::NoMeal),
        }
    }
}
