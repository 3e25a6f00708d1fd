//! Cart state container.
//!
//! An in-memory sequence of cart lines, persisted wholesale to
//! [`SnapshotStorage`] after every mutation and rehydrated once at
//! construction. All operations are synchronous and run to completion;
//! subscribers are notified after each mutation applies.

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use quickbite_core::{CartLineId, Price};

use super::storage::{CART_STORAGE_KEY, SnapshotStorage};
use super::{SubscriberId, Subscribers};
use crate::models::CartLine;

/// Persisted shape of the cart.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CartSnapshot {
    items: Vec<CartLine>,
}

/// The cart store.
///
/// Lines keep insertion order. Two additions merge into one line when they
/// reference the same menu item with an identical customization signature;
/// see [`CartLine::merges_with`].
pub struct CartStore {
    items: Mutex<Vec<CartLine>>,
    subscribers: Subscribers,
    storage: Arc<dyn SnapshotStorage>,
}

impl CartStore {
    /// Create a cart store, rehydrating any prior snapshot from `storage`.
    ///
    /// A missing or malformed snapshot yields an empty cart.
    #[must_use]
    pub fn new(storage: Arc<dyn SnapshotStorage>) -> Self {
        let items = load_snapshot(storage.as_ref());
        Self {
            items: Mutex::new(items),
            subscribers: Subscribers::default(),
            storage,
        }
    }

    /// Add a line to the cart.
    ///
    /// If a mergeable line already exists its quantity is incremented by
    /// `line.quantity`; otherwise the line is appended. Always succeeds.
    pub fn add_item(&self, line: CartLine) {
        {
            let mut items = self.lock();
            if let Some(existing) = items.iter_mut().find(|i| i.merges_with(&line)) {
                existing.quantity += line.quantity;
            } else {
                items.push(line);
            }
            self.persist(&items);
        }
        self.subscribers.notify();
    }

    /// Remove the line with the given ID.
    ///
    /// An absent line is a true no-op: nothing is persisted and no
    /// subscriber fires.
    pub fn remove_item(&self, id: &CartLineId) {
        {
            let mut items = self.lock();
            let before = items.len();
            items.retain(|i| &i.id != id);
            if items.len() == before {
                return;
            }
            self.persist(&items);
        }
        self.subscribers.notify();
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity of 0 behaves as [`remove_item`](Self::remove_item). An
    /// absent line is a true no-op: nothing is persisted and no subscriber
    /// fires.
    pub fn update_quantity(&self, id: &CartLineId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(id);
            return;
        }
        {
            let mut items = self.lock();
            let Some(line) = items.iter_mut().find(|i| &i.id == id) else {
                return;
            };
            line.quantity = quantity;
            self.persist(&items);
        }
        self.subscribers.notify();
    }

    /// Empty the cart.
    pub fn clear(&self) {
        {
            let mut items = self.lock();
            items.clear();
            self.persist(&items);
        }
        self.subscribers.notify();
    }

    /// Snapshot of the current lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> Vec<CartLine> {
        self.lock().clone()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lock().iter().map(|i| i.quantity).sum()
    }

    /// Sum of base price times quantity per line.
    ///
    /// Customization option surcharges are modeled on the menu but are not
    /// part of the total (see DESIGN.md).
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.lock().iter().map(CartLine::line_total).sum()
    }

    /// Register a callback invoked synchronously after every mutation.
    pub fn subscribe(&self, callback: impl Fn() + Send + Sync + 'static) -> SubscriberId {
        self.subscribers.subscribe(Arc::new(callback))
    }

    /// Remove a subscriber. No-op for unknown handles.
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.subscribers.unsubscribe(id);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<CartLine>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Serialize the full state to storage. Failures are logged and
    /// swallowed; the in-memory state stays authoritative for the session.
    fn persist(&self, items: &[CartLine]) {
        let snapshot = CartSnapshot {
            items: items.to_vec(),
        };
        match serde_json::to_string(&snapshot) {
            Ok(json) => {
                if let Err(e) = self.storage.write(CART_STORAGE_KEY, &json) {
                    tracing::warn!("failed to persist cart snapshot: {e}");
                }
            }
            Err(e) => tracing::warn!("failed to serialize cart snapshot: {e}"),
        }
    }
}

fn load_snapshot(storage: &dyn SnapshotStorage) -> Vec<CartLine> {
    let value = match storage.read(CART_STORAGE_KEY) {
        Ok(Some(value)) => value,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!("failed to read cart snapshot, starting empty: {e}");
            return Vec::new();
        }
    };
    match serde_json::from_str::<CartSnapshot>(&value) {
        Ok(snapshot) => snapshot.items,
        Err(e) => {
            tracing::debug!("malformed cart snapshot, starting empty: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::super::storage::MemoryStorage;
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::CustomizationSelections;

    fn store() -> CartStore {
        CartStore::new(Arc::new(MemoryStorage::new()))
    }

    fn line(item_id: &str, quantity: u32) -> CartLine {
        line_with(item_id, quantity, CustomizationSelections::new())
    }

    fn line_with(item_id: &str, quantity: u32, customizations: CustomizationSelections) -> CartLine {
        let catalog = Catalog::sample();
        let (restaurant_id, item) = catalog
            .menus()
            .find_map(|(rid, items)| {
                items
                    .iter()
                    .find(|i| i.id.as_str() == item_id)
                    .map(|i| (rid.clone(), i.clone()))
            })
            .expect("item exists in sample catalog");
        CartLine::new(item, quantity, customizations, restaurant_id)
    }

    #[test]
    fn test_identical_additions_merge_into_one_line() {
        let store = store();
        store.add_item(line("m1", 1));
        store.add_item(line("m1", 2));

        let items = store.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items.first().unwrap().quantity, 3);
        // m1 is ₹299: 299 × 3 = 897.
        assert_eq!(store.total_price(), Price::new(897));
    }

    #[test]
    fn test_different_customizations_do_not_merge() {
        let store = store();
        store.add_item(line("m5", 1));

        let mut customizations = BTreeMap::new();
        customizations.insert("Toppings".to_owned(), vec!["Olives".to_owned()]);
        store.add_item(line_with("m5", 1, customizations));

        assert_eq!(store.items().len(), 2);
        assert_eq!(store.total_items(), 2);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let store = store();
        store.add_item(line("m8", 2));
        let id = store.items().first().unwrap().id.clone();

        store.update_quantity(&id, 0);
        assert!(store.items().is_empty());
        assert_eq!(store.total_items(), 0);
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let store = store();
        store.add_item(line("m8", 2));
        let id = store.items().first().unwrap().id.clone();

        store.update_quantity(&id, 5);
        assert_eq!(store.items().first().unwrap().quantity, 5);
        assert_eq!(store.total_items(), 5);
    }

    #[test]
    fn test_remove_and_update_absent_are_noops() {
        let storage: Arc<dyn SnapshotStorage> = Arc::new(MemoryStorage::new());
        let store = CartStore::new(Arc::clone(&storage));
        store.add_item(line("m1", 1));

        let notifications = Arc::new(AtomicU32::new(0));
        let n = Arc::clone(&notifications);
        store.subscribe(move || {
            n.fetch_add(1, Ordering::SeqCst);
        });
        let snapshot_before = storage.read(CART_STORAGE_KEY).unwrap();

        let ghost = CartLineId::new("not-a-line");
        store.remove_item(&ghost);
        store.update_quantity(&ghost, 4);

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.total_items(), 1);
        // The absent branch neither persists nor notifies.
        assert_eq!(notifications.load(Ordering::SeqCst), 0);
        assert_eq!(storage.read(CART_STORAGE_KEY).unwrap(), snapshot_before);
    }

    #[test]
    fn test_clear_then_total_items_is_zero() {
        let store = store();
        store.add_item(line("m1", 2));
        store.add_item(line("m5", 1));

        store.clear();
        assert_eq!(store.total_items(), 0);
        assert_eq!(store.total_price(), Price::ZERO);
    }

    #[test]
    fn test_total_price_matches_independent_recomputation() {
        let store = store();
        store.add_item(line("m1", 2)); // 299 × 2
        store.add_item(line("m5", 1)); // 299 × 1
        store.add_item(line("m9", 3)); // 99 × 3

        let expected: Price = store
            .items()
            .iter()
            .map(|l| l.menu_item.price * l.quantity)
            .sum();
        assert_eq!(store.total_price(), expected);
        assert_eq!(store.total_price(), Price::new(1194));
    }

    #[test]
    fn test_rehydration_roundtrip() {
        let storage: Arc<dyn SnapshotStorage> = Arc::new(MemoryStorage::new());
        {
            let store = CartStore::new(Arc::clone(&storage));
            store.add_item(line("m1", 1));
            store.add_item(line("m5", 2));
        }

        let reloaded = CartStore::new(storage);
        assert_eq!(reloaded.total_items(), 3);
        assert_eq!(reloaded.items().len(), 2);
    }

    #[test]
    fn test_malformed_snapshot_falls_back_to_empty() {
        let storage: Arc<dyn SnapshotStorage> = Arc::new(MemoryStorage::new());
        storage.write(CART_STORAGE_KEY, "not json at all").unwrap();

        let store = CartStore::new(storage);
        assert_eq!(store.total_items(), 0);
    }

    #[test]
    fn test_subscribers_notified_after_each_mutation() {
        let store = store();
        let notifications = Arc::new(AtomicU32::new(0));

        let n = Arc::clone(&notifications);
        let id = store.subscribe(move || {
            n.fetch_add(1, Ordering::SeqCst);
        });

        store.add_item(line("m1", 1));
        let line_id = store.items().first().unwrap().id.clone();
        store.update_quantity(&line_id, 3);
        store.clear();
        assert_eq!(notifications.load(Ordering::SeqCst), 3);

        store.unsubscribe(id);
        store.add_item(line("m1", 1));
        assert_eq!(notifications.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_one_shot_subscriber_unsubscribes_itself() {
        let store = Arc::new(store());
        let fired = Arc::new(AtomicU32::new(0));
        let slot: Arc<Mutex<Option<SubscriberId>>> = Arc::new(Mutex::new(None));

        let store_ref = Arc::clone(&store);
        let slot_ref = Arc::clone(&slot);
        let fired_ref = Arc::clone(&fired);
        let id = store.subscribe(move || {
            fired_ref.fetch_add(1, Ordering::SeqCst);
            if let Some(id) = slot_ref.lock().unwrap().take() {
                store_ref.unsubscribe(id);
            }
        });
        *slot.lock().unwrap() = Some(id);

        // The mutation must complete even though the callback mutates the
        // subscriber list from inside its own notification.
        store.add_item(line("m1", 1));
        store.add_item(line("m1", 1));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(store.total_items(), 2);
    }

    #[test]
    fn test_write_failure_keeps_memory_state_authoritative() {
        struct BrokenStorage;

        impl SnapshotStorage for BrokenStorage {
            fn read(&self, _key: &str) -> Result<Option<String>, super::super::StorageError> {
                Ok(None)
            }

            fn write(&self, _key: &str, _value: &str) -> Result<(), super::super::StorageError> {
                Err(std::io::Error::other("disk full").into())
            }
        }

        let store = CartStore::new(Arc::new(BrokenStorage));
        store.add_item(line("m1", 2));

        // Every mutation still applies in memory despite the failing backend.
        assert_eq!(store.total_items(), 2);
        assert_eq!(store.total_price(), Price::new(598));

        let id = store.items().first().unwrap().id.clone();
        store.update_quantity(&id, 5);
        assert_eq!(store.total_items(), 5);
    }

    #[test]
    fn test_subscriber_can_read_store() {
        let store = Arc::new(store());
        let seen = Arc::new(AtomicU32::new(0));

        let store_ref = Arc::clone(&store);
        let seen_ref = Arc::clone(&seen);
        store.subscribe(move || {
            seen_ref.store(store_ref.total_items(), Ordering::SeqCst);
        });

        store.add_item(line("m1", 2));
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }
}
