// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo window.

use crate::config::Config;
use crate::toast::Toast;
use crate::ui::toast_view;
use tokio::runtime::Handle;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Push a toast with the configured lifetime.
    PushFinite,
    /// Push a toast that stays until dismissed.
    PushPersistent,
    /// Push a pausable toast tagged with the demo target group.
    PushTargeted,
    /// Dismiss the most recent toast.
    PopLatest,
    /// Dismiss every toast of the demo target group.
    PopTargeted,
    ClearAll,
    Toast(toast_view::Message),
    /// Latest collection published by the store.
    ToastsChanged(Vec<Toast<String>>),
}

/// Launch parameters resolved by `main.rs`.
#[derive(Debug, Clone)]
pub struct Flags {
    /// Runtime that drives the toast timers.
    pub runtime: Handle,
    pub config: Config,
}
