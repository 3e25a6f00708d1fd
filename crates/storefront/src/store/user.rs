//! User/address state container.
//!
//! Holds the signed-in profile, the saved addresses, and the single
//! "selected address" pointer used as the delivery target at checkout.
//! Same persistence and subscription pattern as the cart store.

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use quickbite_core::{AddressId, AddressKind};

use super::storage::{SnapshotStorage, USER_STORAGE_KEY};
use super::{SubscriberId, Subscribers};
use crate::models::{Address, User};

/// Errors from user store operations.
#[derive(Debug, Error)]
pub enum UserStoreError {
    /// The selected address is not in the saved collection.
    #[error("no saved address with id {0}")]
    UnknownAddress(AddressId),
}

/// Persisted shape of the user store.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserSnapshot {
    user: Option<User>,
    addresses: Vec<Address>,
    selected_address: Option<AddressId>,
}

impl Default for UserSnapshot {
    fn default() -> Self {
        Self {
            user: None,
            addresses: default_addresses(),
            selected_address: None,
        }
    }
}

/// Saved addresses seeded for a fresh session.
fn default_addresses() -> Vec<Address> {
    vec![
        Address {
            id: AddressId::new("1"),
            kind: AddressKind::Home,
            address: "123 Main Street, Banjara Hills".to_owned(),
            landmark: Some("Near City Center Mall".to_owned()),
            city: "Hyderabad".to_owned(),
            pincode: "500034".to_owned(),
            is_default: true,
        },
        Address {
            id: AddressId::new("2"),
            kind: AddressKind::Work,
            address: "456 Tech Park, HITEC City".to_owned(),
            landmark: Some("Opposite Metro Station".to_owned()),
            city: "Hyderabad".to_owned(),
            pincode: "500081".to_owned(),
            is_default: false,
        },
    ]
}

/// The user/address store.
pub struct UserStore {
    state: Mutex<UserSnapshot>,
    subscribers: Subscribers,
    storage: Arc<dyn SnapshotStorage>,
}

impl UserStore {
    /// Create a user store, rehydrating any prior snapshot from `storage`.
    ///
    /// A missing or malformed snapshot yields the seeded defaults: the two
    /// sample addresses, no user, no selection.
    #[must_use]
    pub fn new(storage: Arc<dyn SnapshotStorage>) -> Self {
        let state = load_snapshot(storage.as_ref());
        Self {
            state: Mutex::new(state),
            subscribers: Subscribers::default(),
            storage,
        }
    }

    /// Replace the current user profile wholesale.
    pub fn set_user(&self, user: Option<User>) {
        {
            let mut state = self.lock();
            state.user = user;
            self.persist(&state);
        }
        self.subscribers.notify();
    }

    /// The current user profile, if signed in.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.lock().user.clone()
    }

    /// Append a saved address.
    pub fn add_address(&self, address: Address) {
        {
            let mut state = self.lock();
            state.addresses.push(address);
            self.persist(&state);
        }
        self.subscribers.notify();
    }

    /// Replace the address with a matching ID.
    ///
    /// An unknown ID is a true no-op: nothing is persisted and no
    /// subscriber fires.
    pub fn update_address(&self, address: Address) {
        {
            let mut state = self.lock();
            let Some(existing) = state.addresses.iter_mut().find(|a| a.id == address.id) else {
                return;
            };
            *existing = address;
            self.persist(&state);
        }
        self.subscribers.notify();
    }

    /// Remove the address with the given ID. True no-op for unknown IDs.
    ///
    /// If it was the selected delivery address, the selection is cleared.
    pub fn delete_address(&self, id: &AddressId) {
        {
            let mut state = self.lock();
            let before = state.addresses.len();
            state.addresses.retain(|a| &a.id != id);
            if state.addresses.len() == before {
                return;
            }
            if state.selected_address.as_ref() == Some(id) {
                state.selected_address = None;
            }
            self.persist(&state);
        }
        self.subscribers.notify();
    }

    /// All saved addresses.
    #[must_use]
    pub fn addresses(&self) -> Vec<Address> {
        self.lock().addresses.clone()
    }

    /// Point the delivery-target selection at a saved address, or clear it.
    ///
    /// # Errors
    ///
    /// Returns [`UserStoreError::UnknownAddress`] if the ID is not in the
    /// saved collection; the selection is left unchanged.
    pub fn set_selected_address(&self, id: Option<AddressId>) -> Result<(), UserStoreError> {
        {
            let mut state = self.lock();
            if let Some(ref id) = id {
                if !state.addresses.iter().any(|a| &a.id == id) {
                    return Err(UserStoreError::UnknownAddress(id.clone()));
                }
            }
            state.selected_address = id;
            self.persist(&state);
        }
        self.subscribers.notify();
        Ok(())
    }

    /// The currently selected delivery address, resolved against the saved
    /// collection.
    #[must_use]
    pub fn selected_address(&self) -> Option<Address> {
        let state = self.lock();
        let id = state.selected_address.as_ref()?;
        state.addresses.iter().find(|a| &a.id == id).cloned()
    }

    /// Register a callback invoked synchronously after every mutation.
    pub fn subscribe(&self, callback: impl Fn() + Send + Sync + 'static) -> SubscriberId {
        self.subscribers.subscribe(Arc::new(callback))
    }

    /// Remove a subscriber. No-op for unknown handles.
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.subscribers.unsubscribe(id);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, UserSnapshot> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, state: &UserSnapshot) {
        match serde_json::to_string(state) {
            Ok(json) => {
                if let Err(e) = self.storage.write(USER_STORAGE_KEY, &json) {
                    tracing::warn!("failed to persist user snapshot: {e}");
                }
            }
            Err(e) => tracing::warn!("failed to serialize user snapshot: {e}"),
        }
    }
}

fn load_snapshot(storage: &dyn SnapshotStorage) -> UserSnapshot {
    let value = match storage.read(USER_STORAGE_KEY) {
        Ok(Some(value)) => value,
        Ok(None) => return UserSnapshot::default(),
        Err(e) => {
            tracing::warn!("failed to read user snapshot, using defaults: {e}");
            return UserSnapshot::default();
        }
    };
    match serde_json::from_str(&value) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::debug!("malformed user snapshot, using defaults: {e}");
            UserSnapshot::default()
        }
    }
}
