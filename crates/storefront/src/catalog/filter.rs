//! Restaurant list filtering and sorting.
//!
//! A pure, stateless transformation: apply a conjunctive filter set, then
//! sort by the chosen key. The collection is small, so every invocation
//! works over the full slice with no pagination.

use quickbite_core::Price;

use super::Restaurant;

/// Filter values that mean "not narrowed" and therefore skip their check.
const MAX_DELIVERY_TIME_OFF: u32 = 60;
const COST_RANGE_FULL: (Price, Price) = (Price::new(0), Price::new(1000));

/// Conjunctive filter predicate set for the restaurant listing.
///
/// Each field has an "off" value (the [`Default`]) that disables its check:
/// rating 0, delivery time 60, the full (0, 1000) cost range, `veg_only`
/// false, and an empty cuisine list.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantFilters {
    /// Keep restaurants rated at least this much. 0 disables.
    pub min_rating: f32,
    /// Keep restaurants delivering within this many minutes. 60 disables.
    pub max_delivery_time: u32,
    /// Inclusive cost-for-two range. (0, 1000) disables.
    pub cost_for_two: (Price, Price),
    /// Keep only pure-veg restaurants.
    pub veg_only: bool,
    /// Keep restaurants serving any of these cuisines. Empty disables.
    pub cuisines: Vec<String>,
}

impl Default for RestaurantFilters {
    fn default() -> Self {
        Self {
            min_rating: 0.0,
            max_delivery_time: MAX_DELIVERY_TIME_OFF,
            cost_for_two: COST_RANGE_FULL,
            veg_only: false,
            cuisines: Vec::new(),
        }
    }
}

impl RestaurantFilters {
    fn matches(&self, restaurant: &Restaurant) -> bool {
        if self.min_rating > 0.0 && restaurant.rating < self.min_rating {
            return false;
        }
        if self.max_delivery_time < MAX_DELIVERY_TIME_OFF
            && restaurant.delivery_time > self.max_delivery_time
        {
            return false;
        }
        let (min_cost, max_cost) = self.cost_for_two;
        if self.cost_for_two != COST_RANGE_FULL
            && (restaurant.cost_for_two < min_cost || restaurant.cost_for_two > max_cost)
        {
            return false;
        }
        if self.veg_only && !restaurant.is_veg {
            return false;
        }
        if !self.cuisines.is_empty()
            && !restaurant
                .cuisines
                .iter()
                .any(|c| self.cuisines.contains(c))
        {
            return false;
        }
        true
    }
}

/// Sort key for the filtered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Stable input order.
    #[default]
    Relevance,
    /// Rating, best first.
    Rating,
    /// Delivery time, fastest first.
    DeliveryTime,
    CostLowToHigh,
    CostHighToLow,
    /// Distance, nearest first; unknown distance sorts as 0.
    Distance,
}

/// Produce a filtered-then-sorted view of the restaurant collection.
///
/// All filters are ANDed. Sorting is stable, so ties keep their listing
/// order and `SortBy::Relevance` is the identity ordering.
#[must_use]
pub fn filter_restaurants(
    restaurants: &[Restaurant],
    filters: &RestaurantFilters,
    sort_by: SortBy,
) -> Vec<Restaurant> {
    let mut filtered: Vec<Restaurant> = restaurants
        .iter()
        .filter(|r| filters.matches(r))
        .cloned()
        .collect();

    match sort_by {
        SortBy::Relevance => {}
        SortBy::Rating => filtered.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortBy::DeliveryTime => filtered.sort_by_key(|r| r.delivery_time),
        SortBy::CostLowToHigh => filtered.sort_by_key(|r| r.cost_for_two),
        SortBy::CostHighToLow => filtered.sort_by_key(|r| std::cmp::Reverse(r.cost_for_two)),
        SortBy::Distance => filtered.sort_by(|a, b| {
            a.distance_km
                .unwrap_or(0.0)
                .total_cmp(&b.distance_km.unwrap_or(0.0))
        }),
    }

    filtered
}
