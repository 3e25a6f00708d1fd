//! QuickBite Storefront - scripted demo session.
//!
//! Walks the full storefront flow against the built-in catalog: browse and
//! filter restaurants, search for dishes, build a cart (with line merging),
//! apply a promo code, pick a delivery address, and place a simulated order
//! verified by OTP. State snapshots persist to the configured data directory
//! between runs.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use quickbite_core::{AddressId, PaymentMethod, RestaurantId};
use quickbite_storefront::catalog::{Catalog, RestaurantFilters, SortBy, filter_restaurants};
use quickbite_storefront::checkout::{apply_promo, place_order, verify_otp};
use quickbite_storefront::config::StorefrontConfig;
use quickbite_storefront::error::AppError;
use quickbite_storefront::models::{CartLine, CustomizationSelections};
use quickbite_storefront::search::{Debouncer, search};
use quickbite_storefront::store::{CartStore, FileStorage, SnapshotStorage, UserStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = StorefrontConfig::from_env()?;

    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "quickbite_storefront=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let storage: Arc<dyn SnapshotStorage> = Arc::new(FileStorage::new(&config.data_dir)?);
    let catalog = Catalog::sample();
    let cart = CartStore::new(Arc::clone(&storage));
    let user = UserStore::new(storage);

    tracing::info!(restaurants = catalog.restaurants().len(), "catalog loaded");

    // Browse: vegetarian places sorted by rating.
    let filters = RestaurantFilters {
        veg_only: true,
        ..RestaurantFilters::default()
    };
    let veg = filter_restaurants(catalog.restaurants(), &filters, SortBy::Rating);
    for restaurant in &veg {
        tracing::info!(
            name = %restaurant.name,
            rating = restaurant.rating,
            "veg restaurant"
        );
    }

    // Search for biryani, debounced as if typed interactively: the partial
    // query is superseded before it fires.
    let debouncer = Debouncer::new(config.search_debounce);
    let partial_catalog = catalog.clone();
    debouncer.call(move || {
        let _ = search(&partial_catalog, "biry");
    });
    let full_catalog = catalog.clone();
    debouncer.call(move || {
        let results = search(&full_catalog, "biryani");
        tracing::info!(
            restaurants = results.restaurants.len(),
            dishes = results.dishes.len(),
            "search results for 'biryani'"
        );
    });
    tokio::time::sleep(config.search_debounce * 2).await;

    // Build a cart: adding the same dish twice merges into one line.
    let restaurant_id = RestaurantId::new("1");
    if let Some(item) = catalog.menu(&restaurant_id).first().cloned() {
        cart.add_item(CartLine::new(
            item.clone(),
            2,
            CustomizationSelections::new(),
            restaurant_id.clone(),
        ));
        cart.add_item(CartLine::new(
            item,
            1,
            CustomizationSelections::new(),
            restaurant_id,
        ));
    }
    tracing::info!(
        lines = cart.items().len(),
        items = cart.total_items(),
        subtotal = %cart.total_price(),
        "cart ready"
    );

    // Promo and delivery address.
    let promo = apply_promo("WELCOME50")?;
    user.set_selected_address(Some(AddressId::new("1")))?;

    // Place the order and verify the OTP.
    let order = place_order(
        &cart,
        &user,
        &catalog,
        PaymentMethod::Upi,
        Some(&promo),
        config.order_delay,
    )
    .await?;
    verify_otp("123456", config.api_delay).await?;

    tracing::info!(
        order_id = %order.id,
        restaurant = %order.restaurant_name,
        total = %order.totals.total,
        "demo session complete"
    );
    Ok(())
}
