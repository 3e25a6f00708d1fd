//! Type-safe price representation in whole rupees.
//!
//! The catalog prices everything in integer currency units (₹), so totals
//! are exact integer arithmetic with no floating-point drift.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A price in whole rupees.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(0);

    /// Create a new price from whole rupees.
    #[must_use]
    pub const fn new(rupees: i64) -> Self {
        Self(rupees)
    }

    /// Get the underlying rupee amount.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// A fixed percentage of this price, rounded half-up.
    ///
    /// Used for tax lines (e.g. 5% GST on the subtotal).
    #[must_use]
    pub const fn percent(&self, pct: i64) -> Self {
        Self((self.0 * pct + 50) / 100)
    }

    /// The smaller of two prices.
    #[must_use]
    pub const fn min(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Price {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * i64::from(quantity))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.0)
    }
}

impl From<i64> for Price {
    fn from(rupees: i64) -> Self {
        Self(rupees)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Price::new(299);
        let b = Price::new(49);
        assert_eq!(a + b, Price::new(348));
        assert_eq!(a - b, Price::new(250));
        assert_eq!(a * 3, Price::new(897));
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::new(100), Price::new(200), Price::new(50)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::new(350));
    }

    #[test]
    fn test_percent_rounds_half_up() {
        // 5% of 299 is 14.95, which rounds to 15
        assert_eq!(Price::new(299).percent(5), Price::new(15));
        // 5% of 280 is exactly 14
        assert_eq!(Price::new(280).percent(5), Price::new(14));
        // 5% of 290 is 14.5, which rounds up
        assert_eq!(Price::new(290).percent(5), Price::new(15));
    }

    #[test]
    fn test_min() {
        assert_eq!(Price::new(150).min(Price::new(100)), Price::new(100));
        assert_eq!(Price::new(80).min(Price::new(100)), Price::new(80));
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::new(299).to_string(), "₹299");
        assert_eq!(Price::ZERO.to_string(), "₹0");
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Price::new(299)).unwrap();
        assert_eq!(json, "299");
        let parsed: Price = serde_json::from_str("299").unwrap();
        assert_eq!(parsed, Price::new(299));
    }
}
