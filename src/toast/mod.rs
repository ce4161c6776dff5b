// SPDX-License-Identifier: MPL-2.0
//! Toast notification store.
//!
//! This module keeps the ordered list of transient notifications shown by
//! the UI. Each finite toast removes itself after its lifetime and reports
//! its remaining progress on a fixed tick, so the view can draw a countdown.
//!
//! # Components
//!
//! - [`notification`] - `Toast` snapshot, `ToastId` and `Lifetime`
//! - [`options`] - push-time `ToastOptions` and `set`-time `ToastPatch`
//! - [`selector`] - which toasts a `pop` dismisses
//! - [`store`] - `ToastStore` with timers and change listeners
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::toast::{Selector, ToastOptions, ToastStore};
//!
//! let store = ToastStore::new()?;
//! let _sub = store.subscribe(|toasts| println!("{} toasts", toasts.len()));
//!
//! let id = store.push_with("Uploading", ToastOptions::new().infinite().target("upload"));
//! store.pop(Selector::target("upload"));
//! ```
//!
//! # Ordering
//!
//! Progress ticks and the removal timer are scheduled independently off the
//! same lifetime. Near expiry either may run first.

mod notification;
mod options;
mod selector;
mod settings;
mod store;
mod subscription;
mod timers;

pub use notification::{Lifetime, Toast, ToastId};
pub use options::{ToastDefaults, ToastOptions, ToastPatch};
pub use selector::Selector;
pub use settings::StoreSettings;
pub use store::ToastStore;
pub use subscription::{Listener, Subscription};
