// SPDX-License-Identifier: MPL-2.0
//! Which toasts a `pop` dismisses.

use super::notification::ToastId;

/// Selects the toasts removed by [`ToastStore::pop`](super::ToastStore::pop).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    /// The most recently pushed toast (head of the collection).
    #[default]
    Latest,
    /// The toast with this id.
    Id(ToastId),
    /// Every toast whose target tag equals this one.
    Target(String),
}

impl Selector {
    /// Selects every toast tagged with `target`.
    pub fn target(target: impl Into<String>) -> Self {
        Selector::Target(target.into())
    }
}

impl From<ToastId> for Selector {
    fn from(id: ToastId) -> Self {
        Selector::Id(id)
    }
}

impl From<Option<ToastId>> for Selector {
    fn from(id: Option<ToastId>) -> Self {
        id.map_or(Selector::Latest, Selector::Id)
    }
}
