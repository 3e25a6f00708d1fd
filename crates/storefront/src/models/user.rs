//! User profile and saved addresses.

use serde::{Deserialize, Serialize};

use quickbite_core::{AddressId, AddressKind, Email, UserId};

/// A saved delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub kind: AddressKind,
    /// Free-text street address.
    pub address: String,
    pub landmark: Option<String>,
    pub city: String,
    pub pincode: String,
    /// Display hint only; uniqueness is not enforced.
    pub is_default: bool,
}

/// The signed-in user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub phone: String,
}
