//! Runtime configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::source::DEFAULT_ENDPOINT;
use crate::store::MealStore;

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Tool configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace directory for durable storage.
    pub data_dir: PathBuf,
    /// Random-meal endpoint.
    pub endpoint: String,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything is optional:
    /// - `TRIVET_DATA_DIR`: storage directory (default: ~/.trivet/store)
    /// - `TRIVET_MEAL_API`: random-meal endpoint (default: TheMealDB v1)
    /// - `TRIVET_HTTP_TIMEOUT_SECS`: request timeout (default: 30)
    pub fn from_env() -> Self {
        let data_dir = env::var("TRIVET_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| MealStore::default_dir());

        let endpoint =
            env::var("TRIVET_MEAL_API").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let timeout = env::var("TRIVET_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Self {
            data_dir,
            endpoint,
            timeout,
        }
    }
}
