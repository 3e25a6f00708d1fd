//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional and fall back to the listed defaults.
//!
//! - `QUICKBITE_DATA_DIR` - Directory for persisted snapshots (default: `.quickbite`)
//! - `QUICKBITE_SEARCH_DEBOUNCE_MS` - Search input quiescence delay (default: 300)
//! - `QUICKBITE_API_DELAY_MS` - Simulated backend latency for searches and
//!   OTP verification (default: 1000)
//! - `QUICKBITE_ORDER_DELAY_MS` - Simulated order placement latency (default: 2000)
//! - `QUICKBITE_OTP_RESEND_SECS` - OTP resend countdown window (default: 30)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory the snapshot files are written to.
    pub data_dir: PathBuf,
    /// Quiescence delay before a search executes.
    pub search_debounce: Duration,
    /// Simulated latency for search and OTP verification.
    pub api_delay: Duration,
    /// Simulated latency for order placement.
    pub order_delay: Duration,
    /// Countdown window before an OTP may be resent.
    pub otp_resend_window: Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".quickbite"),
            search_debounce: Duration::from_millis(300),
            api_delay: Duration::from_millis(1000),
            order_delay: Duration::from_millis(2000),
            otp_resend_window: Duration::from_secs(30),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();
        Ok(Self {
            data_dir: std::env::var("QUICKBITE_DATA_DIR")
                .map_or(defaults.data_dir, PathBuf::from),
            search_debounce: env_millis("QUICKBITE_SEARCH_DEBOUNCE_MS", defaults.search_debounce)?,
            api_delay: env_millis("QUICKBITE_API_DELAY_MS", defaults.api_delay)?,
            order_delay: env_millis("QUICKBITE_ORDER_DELAY_MS", defaults.order_delay)?,
            otp_resend_window: env_secs("QUICKBITE_OTP_RESEND_SECS", defaults.otp_resend_window)?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn env_millis(key: &str, default: Duration) -> Result<Duration, ConfigError> {
    match std::env::var(key) {
        Ok(value) => parse_millis(key, &value),
        Err(_) => Ok(default),
    }
}

fn env_secs(key: &str, default: Duration) -> Result<Duration, ConfigError> {
    match std::env::var(key) {
        Ok(value) => parse_secs(key, &value),
        Err(_) => Ok(default),
    }
}

fn parse_millis(key: &str, value: &str) -> Result<Duration, ConfigError> {
    value
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_owned(), e.to_string()))
}

fn parse_secs(key: &str, value: &str) -> Result<Duration, ConfigError> {
    value
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_owned(), e.to_string()))
}
