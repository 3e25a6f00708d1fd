//! Placed order model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quickbite_core::{OrderId, OrderStatus, PaymentMethod, Price, RestaurantId};

use super::cart::CartLine;
use super::user::Address;

/// Price breakdown for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: Price,
    /// Free above the free-delivery threshold, flat fee below it.
    pub delivery_fee: Price,
    /// GST on the subtotal, rounded half-up.
    pub taxes: Price,
    /// Promo discount already applied to `total`.
    pub discount: Price,
    pub total: Price,
}

/// A placed order.
///
/// Orders exist only for the duration of the session; there is no order
/// history store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub restaurant_id: RestaurantId,
    pub restaurant_name: String,
    pub items: Vec<CartLine>,
    pub totals: OrderTotals,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
    pub address: Address,
    pub payment_method: PaymentMethod,
}
