//! Cart line model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use quickbite_core::{CartLineId, Price, RestaurantId};

use crate::catalog::MenuItem;

/// Chosen customization options, keyed by group name.
///
/// A `BTreeMap` keeps the selection canonical: two equal maps always
/// serialize to byte-identical JSON, so map equality doubles as the
/// customization signature used for merging.
pub type CustomizationSelections = BTreeMap<String, Vec<String>>;

/// One entry in the cart: a quantity of a specific menu item with a
/// specific customization selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Opaque identifier generated at creation.
    pub id: CartLineId,
    /// Snapshot of the menu item at the time it was added.
    pub menu_item: MenuItem,
    /// Always at least 1; a quantity update to 0 removes the line instead.
    pub quantity: u32,
    /// Chosen options per customization group.
    #[serde(default)]
    pub customizations: CustomizationSelections,
    /// The restaurant this line was ordered from.
    pub restaurant_id: RestaurantId,
}

impl CartLine {
    /// Create a new cart line with a generated ID.
    ///
    /// A zero quantity is bumped to 1; lines always represent at least one
    /// item.
    #[must_use]
    pub fn new(
        menu_item: MenuItem,
        quantity: u32,
        customizations: CustomizationSelections,
        restaurant_id: RestaurantId,
    ) -> Self {
        Self {
            id: CartLineId::generate(),
            menu_item,
            quantity: quantity.max(1),
            customizations,
            restaurant_id,
        }
    }

    /// Whether an added line should merge into this one rather than create
    /// a duplicate: same menu item and identical customization signature.
    #[must_use]
    pub fn merges_with(&self, other: &Self) -> bool {
        self.menu_item.id == other.menu_item.id && self.customizations == other.customizations
    }

    /// Base price times quantity. Customization option surcharges are not
    /// included (see `CartStore::total_price`).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.menu_item.price * self.quantity
    }
}
