//! Simulated checkout flow.
//!
//! Validation failures (empty cart, no delivery address, bad promo code)
//! are synchronous and block the action. Once validation passes, order
//! placement is a fixed-delay simulation that always succeeds: there is no
//! payment provider or network boundary behind it.

pub mod otp;

use std::time::Duration;

use thiserror::Error;

use quickbite_core::{OrderId, OrderStatus, PaymentMethod, Price};

use crate::catalog::Catalog;
use crate::models::{Order, OrderTotals};
use crate::store::{CartStore, UserStore};

pub use otp::{OtpError, ResendTimer, validate_otp, verify_otp};

/// Orders above this subtotal ship free.
pub const FREE_DELIVERY_THRESHOLD: Price = Price::new(299);
/// Flat delivery fee below the free-delivery threshold.
pub const DELIVERY_FEE: Price = Price::new(49);
/// GST percentage applied to the subtotal.
pub const TAX_PERCENT: i64 = 5;

/// The only accepted promo code: 50% off, capped at ₹100.
const WELCOME_CODE: &str = "WELCOME50";
const WELCOME_CAP: Price = Price::new(100);

/// Errors that block checkout actions.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart has no lines to order.
    #[error("cart is empty")]
    EmptyCart,
    /// No delivery address has been selected.
    #[error("no delivery address selected")]
    NoAddressSelected,
    /// The promo code is not recognized.
    #[error("invalid promo code: {0}")]
    InvalidPromoCode(String),
}

/// A validated promo code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Promo {
    code: String,
}

impl Promo {
    /// The promo code as entered.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Discount for a given subtotal: half the subtotal, capped at ₹100.
    #[must_use]
    pub fn discount(&self, subtotal: Price) -> Price {
        Price::new(subtotal.as_i64() / 2).min(WELCOME_CAP)
    }
}

/// Validate a promo code.
///
/// # Errors
///
/// Returns [`CheckoutError::InvalidPromoCode`] for anything other than the
/// single accepted code.
pub fn apply_promo(code: &str) -> Result<Promo, CheckoutError> {
    if code == WELCOME_CODE {
        Ok(Promo {
            code: code.to_owned(),
        })
    } else {
        Err(CheckoutError::InvalidPromoCode(code.to_owned()))
    }
}

impl OrderTotals {
    /// Compute the checkout breakdown for a subtotal.
    ///
    /// Delivery is free above [`FREE_DELIVERY_THRESHOLD`], taxes are
    /// [`TAX_PERCENT`]% of the subtotal rounded half-up, and the promo
    /// discount (if any) is subtracted last.
    #[must_use]
    pub fn compute(subtotal: Price, promo: Option<&Promo>) -> Self {
        let delivery_fee = if subtotal > FREE_DELIVERY_THRESHOLD {
            Price::ZERO
        } else {
            DELIVERY_FEE
        };
        let taxes = subtotal.percent(TAX_PERCENT);
        let discount = promo.map_or(Price::ZERO, |p| p.discount(subtotal));
        Self {
            subtotal,
            delivery_fee,
            taxes,
            discount,
            total: subtotal + delivery_fee + taxes - discount,
        }
    }
}

/// Place an order for the current cart contents.
///
/// Validates synchronously, then simulates the backend call with a fixed
/// `delay` (always succeeds). On success the cart is cleared and the placed
/// [`Order`] is returned.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] or
/// [`CheckoutError::NoAddressSelected`] before any delay elapses.
pub async fn place_order(
    cart: &CartStore,
    user: &UserStore,
    catalog: &Catalog,
    payment_method: PaymentMethod,
    promo: Option<&Promo>,
    delay: Duration,
) -> Result<Order, CheckoutError> {
    let items = cart.items();
    let first = items.first().ok_or(CheckoutError::EmptyCart)?;
    let address = user
        .selected_address()
        .ok_or(CheckoutError::NoAddressSelected)?;

    let restaurant_id = first.restaurant_id.clone();
    let restaurant_name = catalog
        .restaurant(&restaurant_id)
        .map(|r| r.name.clone())
        .unwrap_or_default();
    let totals = OrderTotals::compute(cart.total_price(), promo);

    // Simulated order placement; always succeeds after the delay.
    tokio::time::sleep(delay).await;

    let order = Order {
        id: OrderId::generate(),
        restaurant_id,
        restaurant_name,
        items,
        totals,
        status: OrderStatus::Placed,
        placed_at: chrono::Utc::now(),
        address,
        payment_method,
    };

    cart.clear();
    tracing::info!(order_id = %order.id, total = %order.totals.total, "order placed");
    Ok(order)
}
