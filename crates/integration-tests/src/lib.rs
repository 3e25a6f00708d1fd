//! Integration tests for QuickBite.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p quickbite-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart mutations and snapshot persistence
//! - `checkout_flow` - Order placement, promo codes, OTP verification
//! - `catalog_search` - Restaurant filtering and catalog search
//!
//! Everything runs in-process against the built-in catalog; file-backed
//! persistence tests use a temporary directory per test.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use quickbite_core::RestaurantId;
use quickbite_storefront::catalog::Catalog;
use quickbite_storefront::models::{CartLine, CustomizationSelections};
use quickbite_storefront::store::{CartStore, MemoryStorage, SnapshotStorage, UserStore};

/// Shared fixture: the sample catalog plus memory-backed stores.
pub struct TestContext {
    pub catalog: Catalog,
    pub cart: CartStore,
    pub user: UserStore,
}

impl TestContext {
    /// Fresh context with empty memory-backed stores.
    #[must_use]
    pub fn new() -> Self {
        let catalog = Catalog::sample();
        let cart = CartStore::new(Arc::new(MemoryStorage::new()));
        let user = UserStore::new(Arc::new(MemoryStorage::new()));
        Self {
            catalog,
            cart,
            user,
        }
    }

    /// Context whose stores share the given storage backend, for
    /// persistence tests that "restart the session" by rebuilding stores.
    #[must_use]
    pub fn with_storage(storage: &Arc<dyn SnapshotStorage>) -> Self {
        Self {
            catalog: Catalog::sample(),
            cart: CartStore::new(Arc::clone(storage)),
            user: UserStore::new(Arc::clone(storage)),
        }
    }

    /// Build a cart line for the nth menu item of a restaurant, without
    /// customizations.
    ///
    /// # Panics
    ///
    /// Panics if the restaurant has no nth menu item.
    #[must_use]
    pub fn plain_line(&self, restaurant: &str, index: usize, quantity: u32) -> CartLine {
        let restaurant_id = RestaurantId::new(restaurant);
        let item = self
            .catalog
            .menu(&restaurant_id)
            .get(index)
            .cloned()
            .unwrap_or_else(|| panic!("restaurant {restaurant} has no menu item {index}"));
        CartLine::new(item, quantity, CustomizationSelections::new(), restaurant_id)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
