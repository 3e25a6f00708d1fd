//! Application error types.
//!
//! Module-level errors stay close to the code that raises them; this
//! top-level enum aggregates them for callers (the demo binary, integration
//! tests) that cross module boundaries.

use thiserror::Error;

use crate::checkout::{CheckoutError, OtpError};
use crate::config::ConfigError;
use crate::store::{StorageError, UserStoreError};

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    #[error("OTP error: {0}")]
    Otp(#[from] OtpError),

    #[error("User store error: {0}")]
    UserStore(#[from] UserStoreError),
}
