//! Status enums for orders, addresses, and payments.

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
///
/// Orders are created as [`Placed`](Self::Placed) and move forward through
/// the delivery pipeline; `Cancelled` is terminal from any earlier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Placed,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

/// Category tag for a saved address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AddressKind {
    #[default]
    Home,
    Work,
    Other,
}

impl std::fmt::Display for AddressKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Work => write!(f, "work"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Payment method chosen at checkout.
///
/// All methods are simulated; none of them reaches a payment provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Upi,
    Card,
    CashOnDelivery,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upi => write!(f, "UPI"),
            Self::Card => write!(f, "Credit/Debit Card"),
            Self::CashOnDelivery => write!(f, "Cash on Delivery"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_serde() {
        let json = serde_json::to_string(&OrderStatus::OutForDelivery).unwrap();
        assert_eq!(json, "\"out_for_delivery\"");
        let parsed: OrderStatus = serde_json::from_str("\"placed\"").unwrap();
        assert_eq!(parsed, OrderStatus::Placed);
    }

    #[test]
    fn test_address_kind_serde() {
        let json = serde_json::to_string(&AddressKind::Work).unwrap();
        assert_eq!(json, "\"work\"");
    }

    #[test]
    fn test_payment_method_display() {
        assert_eq!(PaymentMethod::CashOnDelivery.to_string(), "Cash on Delivery");
    }
}
