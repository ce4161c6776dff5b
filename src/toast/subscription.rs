// SPDX-License-Identifier: MPL-2.0
//! Listener registration for store changes.

use super::notification::Toast;
use std::fmt;
use std::sync::{Arc, Weak};

/// Callback invoked with the full ordered collection (most recent first).
pub type Listener<M> = Arc<dyn Fn(&[Toast<M>]) + Send + Sync>;

/// Implemented by the store so a subscription can unregister itself
/// without knowing the message type.
pub(crate) trait Detach: Send + Sync {
    fn detach(&self, key: u64);
}

/// Keeps a listener registered with a [`ToastStore`](super::ToastStore).
///
/// The listener stops receiving updates when this guard is dropped or
/// [`unsubscribe`](Subscription::unsubscribe) is called.
#[must_use = "dropping a Subscription unregisters its listener"]
pub struct Subscription {
    store: Weak<dyn Detach>,
    key: u64,
}

impl Subscription {
    pub(crate) fn new(store: Weak<dyn Detach>, key: u64) -> Self {
        Self { store, key }
    }

    /// Stops delivering updates to the listener.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            store.detach(self.key);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("key", &self.key)
            .field("store_alive", &(self.store.strong_count() > 0))
            .finish()
    }
}
