//! Static restaurant/menu catalog.
//!
//! The catalog is read-only leaf data: restaurants, their menus, and the
//! browse categories. It is loaded once (here, from the built-in sample
//! dataset) and only ever queried afterwards.

mod data;
pub mod filter;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use quickbite_core::{CategoryId, MenuItemId, Price, RestaurantId};

pub use filter::{RestaurantFilters, SortBy, filter_restaurants};

/// A restaurant in the browse listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub image: String,
    pub rating: f32,
    /// Estimated delivery time in minutes.
    pub delivery_time: u32,
    /// Approximate cost for two people.
    pub cost_for_two: Price,
    pub cuisines: Vec<String>,
    pub is_veg: bool,
    #[serde(default)]
    pub offers: Vec<String>,
    /// Distance from the delivery area in kilometres, when known.
    pub distance_km: Option<f32>,
}

/// An option inside a customization group (e.g. "Extra Cheese").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomizationOption {
    pub id: String,
    pub name: String,
    pub price: Price,
}

/// A customization group on a menu item (e.g. "Toppings").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomizationGroup {
    pub id: String,
    pub name: String,
    pub options: Vec<CustomizationOption>,
    pub required: bool,
    pub max_selections: Option<u32>,
}

/// A dish on a restaurant's menu. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image: Option<String>,
    pub is_veg: bool,
    pub rating: Option<f32>,
    /// Menu section label (e.g. "Biryani", "Starters").
    pub category: String,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub customizations: Vec<CustomizationGroup>,
}

/// A browse category shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub image: String,
    pub description: Option<String>,
}

/// The static catalog: restaurants, per-restaurant menus, and categories.
#[derive(Debug, Clone)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
    menus: HashMap<RestaurantId, Vec<MenuItem>>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog from explicit collections.
    #[must_use]
    pub fn new(
        restaurants: Vec<Restaurant>,
        menus: HashMap<RestaurantId, Vec<MenuItem>>,
        categories: Vec<Category>,
    ) -> Self {
        Self {
            restaurants,
            menus,
            categories,
        }
    }

    /// The built-in sample dataset: 8 restaurants, 8 categories, and menus
    /// for the first three restaurants.
    #[must_use]
    pub fn sample() -> Self {
        data::sample_catalog()
    }

    /// All restaurants, in listing order.
    #[must_use]
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// All browse categories.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a restaurant by ID.
    #[must_use]
    pub fn restaurant(&self, id: &RestaurantId) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| &r.id == id)
    }

    /// The menu for a restaurant. Empty if the restaurant has no menu data.
    #[must_use]
    pub fn menu(&self, id: &RestaurantId) -> &[MenuItem] {
        self.menus.get(id).map_or(&[], Vec::as_slice)
    }

    /// Look up a single menu item within a restaurant's menu.
    #[must_use]
    pub fn menu_item(&self, restaurant: &RestaurantId, item: &MenuItemId) -> Option<&MenuItem> {
        self.menu(restaurant).iter().find(|m| &m.id == item)
    }

    /// Iterate over every (restaurant, menu) pair with menu data.
    pub fn menus(&self) -> impl Iterator<Item = (&RestaurantId, &[MenuItem])> {
        self.menus.iter().map(|(id, items)| (id, items.as_slice()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shape() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.restaurants().len(), 8);
        assert_eq!(catalog.categories().len(), 8);
        // Menus exist for restaurants 1-3 only.
        assert!(!catalog.menu(&RestaurantId::new("1")).is_empty());
        assert!(!catalog.menu(&RestaurantId::new("3")).is_empty());
        assert!(catalog.menu(&RestaurantId::new("8")).is_empty());
    }

    #[test]
    fn test_restaurant_lookup() {
        let catalog = Catalog::sample();
        let r = catalog.restaurant(&RestaurantId::new("3")).unwrap();
        assert_eq!(r.name, "Green Garden");
        assert!(r.is_veg);
        assert!(catalog.restaurant(&RestaurantId::new("999")).is_none());
    }

    #[test]
    fn test_menu_item_lookup() {
        let catalog = Catalog::sample();
        let item = catalog
            .menu_item(&RestaurantId::new("1"), &MenuItemId::new("m1"))
            .unwrap();
        assert_eq!(item.name, "Chicken Biryani");
        assert_eq!(item.price, Price::new(299));
        assert!(item.is_popular);

        // Item IDs are scoped by restaurant.
        assert!(
            catalog
                .menu_item(&RestaurantId::new("2"), &MenuItemId::new("m1"))
                .is_none()
        );
    }
}
