//! Simulated OTP verification.
//!
//! The OTP flow is a demo: any complete 6-digit code verifies after a fixed
//! delay. Incomplete input is the only failure mode, reported synchronously
//! before the delay starts.

use std::time::{Duration, Instant};

use thiserror::Error;

/// Number of digits in an OTP.
pub const OTP_LENGTH: usize = 6;

/// Local validation failures for OTP input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OtpError {
    /// Fewer or more than the required number of digits were entered.
    #[error("please enter the complete {OTP_LENGTH}-digit OTP (got {got} characters)")]
    Incomplete {
        /// Number of characters actually entered.
        got: usize,
    },
    /// The input contains non-digit characters.
    #[error("OTP must contain only digits")]
    NonNumeric,
}

/// Validate OTP input: exactly [`OTP_LENGTH`] ASCII digits.
///
/// # Errors
///
/// Returns [`OtpError::Incomplete`] or [`OtpError::NonNumeric`].
pub fn validate_otp(code: &str) -> Result<(), OtpError> {
    if code.len() != OTP_LENGTH {
        return Err(OtpError::Incomplete { got: code.len() });
    }
    if !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(OtpError::NonNumeric);
    }
    Ok(())
}

/// Verify an OTP against the simulated backend.
///
/// Validates synchronously, then always succeeds after the fixed `delay`.
///
/// # Errors
///
/// Returns the same errors as [`validate_otp`].
pub async fn verify_otp(code: &str, delay: Duration) -> Result<(), OtpError> {
    validate_otp(code)?;
    tokio::time::sleep(delay).await;
    tracing::info!("OTP verified");
    Ok(())
}

/// Countdown gate for the "resend OTP" action.
///
/// Starts counting at construction; `resend` is blocked until the window
/// elapses and the window restarts on each successful resend.
#[derive(Debug)]
pub struct ResendTimer {
    window: Duration,
    started: Instant,
}

impl ResendTimer {
    /// Start a countdown over the given window.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            started: Instant::now(),
        }
    }

    /// Time left before resending is allowed. Zero once the window elapsed.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.window.saturating_sub(self.started.elapsed())
    }

    /// Whether the countdown has elapsed.
    #[must_use]
    pub fn can_resend(&self) -> bool {
        self.remaining() == Duration::ZERO
    }

    /// Restart the countdown after a resend.
    pub fn restart(&mut self) {
        self.started = Instant::now();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_complete_code() {
        assert_eq!(validate_otp("123456"), Ok(()));
        assert_eq!(validate_otp("000000"), Ok(()));
    }

    #[test]
    fn test_validate_incomplete_code() {
        assert_eq!(validate_otp("123"), Err(OtpError::Incomplete { got: 3 }));
        assert_eq!(validate_otp(""), Err(OtpError::Incomplete { got: 0 }));
        assert_eq!(
            validate_otp("1234567"),
            Err(OtpError::Incomplete { got: 7 })
        );
    }

    #[test]
    fn test_validate_non_numeric() {
        assert_eq!(validate_otp("12a456"), Err(OtpError::NonNumeric));
        assert_eq!(validate_otp("......"), Err(OtpError::NonNumeric));
    }

    #[tokio::test]
    async fn test_verify_rejects_before_delay() {
        // Invalid input fails synchronously even with a long delay pending.
        let result = verify_otp("12", Duration::from_secs(3600)).await;
        assert_eq!(result, Err(OtpError::Incomplete { got: 2 }));
    }

    #[tokio::test]
    async fn test_verify_accepts_complete_code() {
        assert!(verify_otp("987654", Duration::ZERO).await.is_ok());
    }

    #[test]
    fn test_resend_blocked_within_window() {
        let timer = ResendTimer::new(Duration::from_secs(30));
        assert!(!timer.can_resend());
        assert!(timer.remaining() > Duration::ZERO);
    }

    #[test]
    fn test_resend_allowed_after_window() {
        let mut timer = ResendTimer::new(Duration::ZERO);
        assert!(timer.can_resend());

        timer.window = Duration::from_secs(30);
        timer.restart();
        assert!(!timer.can_resend());
    }
}
