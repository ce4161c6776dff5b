// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastStore` owns the ordered collection of live toasts (most recent
//! first), the per-toast timers, and the registered listeners. Every
//! mutation builds a fresh snapshot under the state lock and queues it for
//! delivery. One caller at a time drains the queue outside the lock, so
//! listeners see snapshots in mutation order even across threads.

use super::notification::{Toast, ToastId};
use super::options::{ToastOptions, ToastPatch};
use super::selector::Selector;
use super::settings::StoreSettings;
use super::subscription::{Detach, Listener, Subscription};
use super::timers::ToastTimers;
use crate::config::Config;
use crate::error::Result;
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, trace};

/// A live toast together with the timers it owns.
struct Entry<M> {
    toast: Toast<M>,
    /// `None` for infinite toasts. Dropping it cancels both timers.
    timers: Option<ToastTimers>,
}

/// A committed snapshot waiting to be handed to the listeners it was taken for.
struct Delivery<M> {
    snapshot: Vec<Toast<M>>,
    listeners: Vec<Listener<M>>,
}

struct State<M> {
    entries: Vec<Entry<M>>,
    listeners: Vec<(u64, Listener<M>)>,
    /// Snapshots in mutation order.
    pending: VecDeque<Delivery<M>>,
    /// Set while some caller is draining `pending`.
    delivering: bool,
    last_id: u64,
    last_listener: u64,
}

impl<M: Clone> State<M> {
    fn snapshot(&self) -> Vec<Toast<M>> {
        self.entries.iter().map(|entry| entry.toast.clone()).collect()
    }

    fn position(&self, id: ToastId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.toast.id() == id)
    }
}

struct Shared<M> {
    state: Mutex<State<M>>,
    runtime: Handle,
    settings: StoreSettings,
}

impl<M> Shared<M> {
    fn lock(&self) -> MutexGuard<'_, State<M>> {
        // Listeners never run under this lock, so a poisoned state is still consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Releases the drain role if a listener panics mid-delivery.
struct DrainGuard<'a, M>(&'a Shared<M>);

impl<M> Drop for DrainGuard<'_, M> {
    fn drop(&mut self) {
        self.0.lock().delivering = false;
    }
}

impl<M: Send> Detach for Shared<M> {
    fn detach(&self, key: u64) {
        self.lock().listeners.retain(|(k, _)| *k != key);
    }
}

/// Ordered collection of toast notifications with auto-dismiss timers.
///
/// The store is a cheap handle: clones share the same collection. Timers
/// run on the tokio runtime the store was created with.
///
/// # Example
///
/// ```
/// use iced_toast::toast::{Selector, ToastOptions, ToastStore};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> iced_toast::error::Result<()> {
/// let store = ToastStore::new()?;
/// let saved = store.push("Image saved");
/// store.push_with("Upload 1 done", ToastOptions::new().target("uploads"));
/// store.push_with("Upload 2 done", ToastOptions::new().target("uploads"));
///
/// assert_eq!(store.pop(Selector::target("uploads")), 2);
/// assert!(store.remove(saved));
/// assert!(store.is_empty());
/// # Ok(())
/// # }
/// ```
pub struct ToastStore<M> {
    shared: Arc<Shared<M>>,
}

impl<M> Clone for ToastStore<M> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<M> fmt::Debug for ToastStore<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.lock();
        f.debug_struct("ToastStore")
            .field("toasts", &state.entries.len())
            .field("listeners", &state.listeners.len())
            .field("settings", &self.shared.settings)
            .finish()
    }
}

impl<M> ToastStore<M>
where
    M: Clone + Send + 'static,
{
    /// Creates an empty store with default settings on the current tokio runtime.
    ///
    /// Fails with [`Error::Runtime`](crate::error::Error::Runtime) when called
    /// outside a runtime.
    pub fn new() -> Result<Self> {
        Ok(Self::with_settings(
            Handle::try_current()?,
            StoreSettings::default(),
        ))
    }

    /// Creates an empty store on the current tokio runtime using `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::with_settings(
            Handle::try_current()?,
            StoreSettings::from(config),
        ))
    }

    /// Creates an empty store whose timers run on `runtime`.
    #[must_use]
    pub fn with_settings(runtime: Handle, settings: StoreSettings) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    entries: Vec::new(),
                    listeners: Vec::new(),
                    pending: VecDeque::new(),
                    delivering: false,
                    last_id: 0,
                    last_listener: 0,
                }),
                runtime,
                settings,
            }),
        }
    }

    #[must_use]
    pub fn settings(&self) -> StoreSettings {
        self.shared.settings
    }

    /// Pushes a toast with the store defaults and returns its id.
    pub fn push(&self, message: M) -> ToastId {
        self.push_with(message, ToastOptions::default())
    }

    /// Pushes a toast, merging `options` over the store defaults.
    ///
    /// Finite toasts start a removal timer and a progress tick. The new toast
    /// becomes the head of the collection.
    pub fn push_with(&self, message: M, options: ToastOptions) -> ToastId {
        let mut state = self.shared.lock();
        state.last_id += 1;
        let id = ToastId::new(state.last_id);
        let now = Instant::now();
        let toast = options.build(id, message, &self.shared.settings.defaults, now);
        // Timers block on the state lock, so they cannot observe the store
        // before the entry is inserted.
        let timers = toast
            .lifetime()
            .duration()
            .map(|duration| self.spawn_timers(id, duration, now));

        debug!(%id, lifetime = ?toast.lifetime(), group = ?toast.target(), "toast pushed");
        state.entries.insert(0, Entry { toast, timers });
        self.publish(state);
        id
    }

    /// Removes the toast with `id`, cancelling its timers.
    ///
    /// Returns `false` (and notifies nobody) if no such toast exists.
    pub fn remove(&self, id: ToastId) -> bool {
        let mut state = self.shared.lock();
        let Some(index) = state.position(id) else {
            return false;
        };
        let entry = state.entries.remove(index);
        if let Some(timers) = &entry.timers {
            timers.cancel();
        }
        debug!(%id, "toast removed");
        self.publish(state);
        true
    }

    /// Dismisses the toasts picked by `selector` and returns how many were removed.
    pub fn pop(&self, selector: impl Into<Selector>) -> usize {
        match selector.into() {
            Selector::Latest => {
                let mut state = self.shared.lock();
                if state.entries.is_empty() {
                    return 0;
                }
                let entry = state.entries.remove(0);
                debug!(id = %entry.toast.id(), "latest toast popped");
                drop(entry);
                self.publish(state);
                1
            }
            Selector::Id(id) => usize::from(self.remove(id)),
            Selector::Target(target) => {
                let mut state = self.shared.lock();
                let before = state.entries.len();
                state
                    .entries
                    .retain(|entry| entry.toast.target() != Some(target.as_str()));
                let removed = before - state.entries.len();
                if removed == 0 {
                    return 0;
                }
                debug!(group = %target, removed, "toast group popped");
                self.publish(state);
                removed
            }
        }
    }

    /// Removes every toast.
    pub fn clear(&self) -> usize {
        let mut state = self.shared.lock();
        let removed = state.entries.len();
        if removed == 0 {
            return 0;
        }
        state.entries.clear();
        debug!(removed, "toasts cleared");
        self.publish(state);
        removed
    }

    /// Shallow-merges `patch` into the toast with `id`. Timers are left as they are.
    ///
    /// Returns `false` if no such toast exists.
    pub fn set(&self, id: ToastId, patch: ToastPatch<M>) -> bool {
        let mut state = self.shared.lock();
        let Some(index) = state.position(id) else {
            return false;
        };
        if patch.is_empty() {
            return true;
        }
        patch.apply(&mut state.entries[index].toast);
        trace!(%id, "toast patched");
        self.publish(state);
        true
    }

    /// Freezes the progress of the toast with `id`.
    ///
    /// The removal timer keeps running.
    pub fn pause(&self, id: ToastId) -> bool {
        self.set(id, ToastPatch::new().paused_at(Some(Instant::now())))
    }

    /// Lets the progress of the toast with `id` follow the clock again.
    pub fn resume(&self, id: ToastId) -> bool {
        self.set(id, ToastPatch::new().paused_at(None))
    }

    /// Returns the current collection, most recent first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Toast<M>> {
        self.shared.lock().snapshot()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<Toast<M>> {
        let state = self.shared.lock();
        state
            .position(id)
            .map(|index| state.entries[index].toast.clone())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.lock().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shared.lock().entries.is_empty()
    }

    /// Registers `listener` for change notifications.
    ///
    /// The listener is called with the current collection, then after every
    /// change until the returned guard is dropped. The first call happens
    /// before this returns unless another delivery is in flight, in which
    /// case it is queued behind it.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&[Toast<M>]) + Send + Sync + 'static,
    {
        let listener: Listener<M> = Arc::new(listener);
        let mut state = self.shared.lock();
        state.last_listener += 1;
        let key = state.last_listener;
        state.listeners.push((key, Arc::clone(&listener)));
        let snapshot = state.snapshot();
        state.pending.push_back(Delivery {
            snapshot,
            listeners: vec![listener],
        });
        self.drain(state);

        let store: Weak<dyn Detach> = Arc::downgrade(&self.shared) as Weak<dyn Detach>;
        Subscription::new(store, key)
    }

    /// Queues the committed collection for every listener and delivers it.
    fn publish(&self, mut state: MutexGuard<'_, State<M>>) {
        let snapshot = state.snapshot();
        let listeners: Vec<Listener<M>> = state
            .listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        state.pending.push_back(Delivery {
            snapshot,
            listeners,
        });
        self.drain(state);
    }

    /// Delivers queued snapshots in order with the lock released.
    ///
    /// Returns at once if another caller (or an outer frame of this one, when
    /// a listener mutates the store) is already draining; that caller picks up
    /// whatever was queued.
    fn drain<'a>(&'a self, mut state: MutexGuard<'a, State<M>>) {
        if state.delivering {
            return;
        }
        state.delivering = true;
        let guard = DrainGuard(&*self.shared);

        loop {
            let Some(delivery) = state.pending.pop_front() else {
                break;
            };
            drop(state);
            trace!(
                toasts = delivery.snapshot.len(),
                listeners = delivery.listeners.len(),
                "publishing toasts"
            );
            for listener in &delivery.listeners {
                listener(&delivery.snapshot);
            }
            state = self.shared.lock();
        }

        // Cleared under the same lock that saw the queue empty.
        state.delivering = false;
        drop(state);
        std::mem::forget(guard);
    }

    fn spawn_timers(&self, id: ToastId, duration: Duration, created_at: Instant) -> ToastTimers {
        let weak = Arc::downgrade(&self.shared);
        let removal = self.shared.runtime.spawn({
            let weak = weak.clone();
            async move {
                match created_at.checked_add(duration) {
                    Some(deadline) => tokio::time::sleep_until(deadline).await,
                    // Past the clock's range: never expires.
                    None => std::future::pending::<()>().await,
                }
                if let Some(shared) = weak.upgrade() {
                    trace!(%id, "toast expired");
                    ToastStore { shared }.remove(id);
                }
            }
        });

        let period = self.shared.settings.tick_interval.as_duration();
        let progress = self.shared.runtime.spawn(async move {
            let start = created_at.checked_add(period).unwrap_or(created_at);
            let mut ticks = tokio::time::interval_at(start, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticks.tick().await;
                let Some(shared) = weak.upgrade() else {
                    break;
                };
                if !(ToastStore { shared }).tick_progress(id) {
                    break;
                }
            }
        });

        ToastTimers::new(removal, progress)
    }

    /// Recomputes the progress of `id`. Returns whether the tick should keep running.
    fn tick_progress(&self, id: ToastId) -> bool {
        let mut state = self.shared.lock();
        let Some(index) = state.position(id) else {
            return false;
        };
        let Some(progress) = state.entries[index].toast.refresh_progress(Instant::now()) else {
            return true;
        };
        self.publish(state);
        if progress <= 0.0 {
            trace!(%id, "progress exhausted");
            return false;
        }
        true
    }
}
