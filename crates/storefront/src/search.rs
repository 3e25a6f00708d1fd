//! Catalog search.
//!
//! Case-insensitive substring search over the static catalog: restaurants
//! match on name or cuisine, dishes on name, description, or category. The
//! collection is small, so every query scans it in full.
//!
//! Interactive input goes through a [`Debouncer`]: a query only executes
//! after a quiescence delay, and any newer keystroke supersedes the pending
//! one.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

use quickbite_core::RestaurantId;

use crate::catalog::{Catalog, MenuItem, Restaurant};

/// Static "recent searches" suggestions shown for an empty query.
pub const RECENT_SEARCHES: &[&str] = &["Biryani", "Pizza", "Burger", "Chinese", "Dosa"];

/// Static "trending" suggestions shown for an empty query.
pub const TRENDING_SEARCHES: &[&str] = &[
    "Chicken Biryani",
    "Margherita Pizza",
    "Masala Dosa",
    "Butter Chicken",
    "Veg Burger",
];

/// A dish search hit, carrying its owning restaurant.
#[derive(Debug, Clone, PartialEq)]
pub struct DishHit {
    pub item: MenuItem,
    pub restaurant_id: RestaurantId,
    pub restaurant_name: String,
}

/// Search results over the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub restaurants: Vec<Restaurant>,
    pub dishes: Vec<DishHit>,
}

impl SearchResults {
    /// Total number of hits across both sections.
    #[must_use]
    pub fn total(&self) -> usize {
        self.restaurants.len() + self.dishes.len()
    }

    /// Whether the query produced no hits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Search the catalog for a query string.
///
/// A blank or whitespace-only query returns empty results.
#[must_use]
pub fn search(catalog: &Catalog, query: &str) -> SearchResults {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return SearchResults::default();
    }

    let restaurants = catalog
        .restaurants()
        .iter()
        .filter(|r| {
            r.name.to_lowercase().contains(&query)
                || r.cuisines.iter().any(|c| c.to_lowercase().contains(&query))
        })
        .cloned()
        .collect();

    let mut dishes = Vec::new();
    for (restaurant_id, items) in catalog.menus() {
        let Some(restaurant) = catalog.restaurant(restaurant_id) else {
            continue;
        };
        for item in items {
            if item.name.to_lowercase().contains(&query)
                || item.description.to_lowercase().contains(&query)
                || item.category.to_lowercase().contains(&query)
            {
                dishes.push(DishHit {
                    item: item.clone(),
                    restaurant_id: restaurant_id.clone(),
                    restaurant_name: restaurant.name.clone(),
                });
            }
        }
    }

    SearchResults {
        restaurants,
        dishes,
    }
}

/// Defers an action until input goes quiet.
///
/// Each `call` cancels the previously scheduled action (if it has not fired
/// yet) and schedules the new one after the configured delay.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    /// Create a debouncer with the given quiescence delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `action` to run after the delay, superseding any pending
    /// scheduled action.
    ///
    /// Must be called within a tokio runtime.
    pub fn call(&self, action: impl FnOnce() + Send + 'static) {
        let delay = self.delay;
        let mut pending = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.take() {
            handle.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
    }
}
