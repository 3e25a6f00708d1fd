//! Persisted state containers.
//!
//! The stores are explicit, constructor-injected state containers: created
//! once at application start with a [`SnapshotStorage`] handle and passed by
//! reference to consumers. Every mutation applies in memory, persists a full
//! snapshot, then notifies subscribers synchronously. Notification order is
//! unspecified.

pub mod cart;
pub mod storage;
pub mod user;

use std::sync::{Arc, Mutex, PoisonError};

pub use cart::CartStore;
pub use storage::{FileStorage, MemoryStorage, SnapshotStorage, StorageError};
pub use user::{UserStore, UserStoreError};

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Callback = Arc<dyn Fn() + Send + Sync>;

/// Synchronous observer list shared by the stores.
#[derive(Default)]
pub(crate) struct Subscribers {
    inner: Mutex<SubscriberList>,
}

#[derive(Default)]
struct SubscriberList {
    next_id: u64,
    callbacks: Vec<(u64, Callback)>,
}

impl Subscribers {
    /// Register a callback; returns the handle needed to unsubscribe.
    pub(crate) fn subscribe(&self, callback: Callback) -> SubscriberId {
        let mut list = self.lock();
        let id = list.next_id;
        list.next_id += 1;
        list.callbacks.push((id, callback));
        SubscriberId(id)
    }

    /// Remove a previously registered callback. No-op for unknown handles.
    pub(crate) fn unsubscribe(&self, id: SubscriberId) {
        self.lock().callbacks.retain(|(cb_id, _)| *cb_id != id.0);
    }

    /// Invoke every callback registered at the start of the notification.
    ///
    /// Called after the store's own state lock is released, so callbacks are
    /// free to read back through the store. The list is snapshotted before
    /// invocation, so callbacks may also subscribe or unsubscribe (including
    /// removing themselves) without re-entering the list lock.
    pub(crate) fn notify(&self) {
        let callbacks: Vec<Callback> = self
            .lock()
            .callbacks
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();
        for callback in callbacks {
            callback();
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SubscriberList> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    #[test]
    fn test_subscribe_notify_unsubscribe() {
        let subscribers = Subscribers::default();
        let count = Arc::new(AtomicU32::new(0));

        let count_clone = Arc::clone(&count);
        let id = subscribers.subscribe(Arc::new(move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        }));

        subscribers.notify();
        subscribers.notify();
        assert_eq!(count.load(Ordering::SeqCst), 2);

        subscribers.unsubscribe(id);
        subscribers.notify();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unsubscribe_unknown_is_noop() {
        let subscribers = Subscribers::default();
        let id = subscribers.subscribe(Arc::new(|| {}));
        subscribers.unsubscribe(id);
        subscribers.unsubscribe(id);
    }

    #[test]
    fn test_callback_may_unsubscribe_itself_during_notify() {
        let subscribers = Arc::new(Subscribers::default());
        let fired = Arc::new(AtomicU32::new(0));
        let slot: Arc<std::sync::Mutex<Option<SubscriberId>>> =
            Arc::new(std::sync::Mutex::new(None));

        let subscribers_ref = Arc::clone(&subscribers);
        let slot_ref = Arc::clone(&slot);
        let fired_ref = Arc::clone(&fired);
        let id = subscribers.subscribe(Arc::new(move || {
            fired_ref.fetch_add(1, Ordering::SeqCst);
            // One-shot: remove this callback from inside its own invocation.
            if let Some(id) = slot_ref.lock().unwrap().take() {
                subscribers_ref.unsubscribe(id);
            }
        }));
        *slot.lock().unwrap() = Some(id);

        subscribers.notify();
        subscribers.notify();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
