// SPDX-License-Identifier: MPL-2.0
//! Per-toast overrides applied at push time and by later field patches.

use super::notification::{Lifetime, Toast, ToastId};
use crate::config::{
    Config, DEFAULT_DISMISSABLE, DEFAULT_DURATION_MS, DEFAULT_PAUSABLE, FULL_PROGRESS,
};
use std::time::Duration;
use tokio::time::Instant;

/// Values a toast gets when the caller does not override them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastDefaults {
    pub lifetime: Lifetime,
    pub dismissable: bool,
    pub pausable: bool,
}

impl Default for ToastDefaults {
    fn default() -> Self {
        Self {
            lifetime: Lifetime::from_millis(DEFAULT_DURATION_MS),
            dismissable: DEFAULT_DISMISSABLE,
            pausable: DEFAULT_PAUSABLE,
        }
    }
}

impl From<&Config> for ToastDefaults {
    fn from(config: &Config) -> Self {
        Self {
            lifetime: Lifetime::from_millis(config.duration_ms.unwrap_or(DEFAULT_DURATION_MS)),
            dismissable: config.dismissable.unwrap_or(DEFAULT_DISMISSABLE),
            pausable: config.pausable.unwrap_or(DEFAULT_PAUSABLE),
        }
    }
}

/// Caller overrides for a pushed toast. Unset fields fall back to the
/// store's [`ToastDefaults`].
///
/// # Example
///
/// ```
/// use iced_toast::toast::ToastOptions;
/// use std::time::Duration;
///
/// let options = ToastOptions::new()
///     .duration(Duration::from_secs(8))
///     .pausable(true)
///     .target("uploads");
/// # let _ = options;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastOptions {
    lifetime: Option<Lifetime>,
    dismissable: Option<bool>,
    pausable: Option<bool>,
    progress: Option<f32>,
    target: Option<String>,
    paused: bool,
}

impl ToastOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes the toast automatically after `duration`.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.lifetime = Some(Lifetime::Finite(duration));
        self
    }

    /// Keeps the toast until it is removed explicitly.
    #[must_use]
    pub fn infinite(mut self) -> Self {
        self.lifetime = Some(Lifetime::Infinite);
        self
    }

    #[must_use]
    pub fn lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    #[must_use]
    pub fn dismissable(mut self, dismissable: bool) -> Self {
        self.dismissable = Some(dismissable);
        self
    }

    #[must_use]
    pub fn pausable(mut self, pausable: bool) -> Self {
        self.pausable = Some(pausable);
        self
    }

    /// Sets the starting progress. Finite toasts overwrite it on their first tick.
    #[must_use]
    pub fn progress(mut self, progress: f32) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Tags the toast so it can be dismissed together with its group.
    #[must_use]
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Creates the toast with its progress already frozen.
    #[must_use]
    pub fn paused(mut self) -> Self {
        self.paused = true;
        self
    }

    pub(crate) fn build<M>(
        self,
        id: ToastId,
        message: M,
        defaults: &ToastDefaults,
        now: Instant,
    ) -> Toast<M> {
        Toast::new(
            id,
            message,
            self.lifetime.unwrap_or(defaults.lifetime),
            now,
            self.paused.then_some(now),
            self.progress.unwrap_or(FULL_PROGRESS).clamp(0.0, 100.0),
            self.dismissable.unwrap_or(defaults.dismissable),
            self.pausable.unwrap_or(defaults.pausable),
            self.target,
        )
    }
}

/// A shallow field update for an existing toast.
///
/// Only fields that were set are written. The id, creation time and
/// lifetime are fixed once a toast exists, so its timers always match it.
#[derive(Debug, Clone)]
pub struct ToastPatch<M> {
    message: Option<M>,
    dismissable: Option<bool>,
    pausable: Option<bool>,
    paused_at: Option<Option<Instant>>,
    progress: Option<f32>,
    target: Option<Option<String>>,
}

impl<M> Default for ToastPatch<M> {
    fn default() -> Self {
        Self {
            message: None,
            dismissable: None,
            pausable: None,
            paused_at: None,
            progress: None,
            target: None,
        }
    }
}

impl<M> ToastPatch<M> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn message(mut self, message: M) -> Self {
        self.message = Some(message);
        self
    }

    #[must_use]
    pub fn dismissable(mut self, dismissable: bool) -> Self {
        self.dismissable = Some(dismissable);
        self
    }

    #[must_use]
    pub fn pausable(mut self, pausable: bool) -> Self {
        self.pausable = Some(pausable);
        self
    }

    /// Freezes (`Some`) or unfreezes (`None`) progress.
    #[must_use]
    pub fn paused_at(mut self, paused_at: Option<Instant>) -> Self {
        self.paused_at = Some(paused_at);
        self
    }

    #[must_use]
    pub fn progress(mut self, progress: f32) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Replaces (`Some`) or clears (`None`) the grouping tag.
    #[must_use]
    pub fn target(mut self, target: Option<String>) -> Self {
        self.target = Some(target);
        self
    }

    /// Returns true if applying this patch would not touch any field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.message.is_none()
            && self.dismissable.is_none()
            && self.pausable.is_none()
            && self.paused_at.is_none()
            && self.progress.is_none()
            && self.target.is_none()
    }

    pub(crate) fn apply(self, toast: &mut Toast<M>) {
        if let Some(message) = self.message {
            toast.set_message(message);
        }
        if let Some(dismissable) = self.dismissable {
            toast.set_dismissable(dismissable);
        }
        if let Some(pausable) = self.pausable {
            toast.set_pausable(pausable);
        }
        if let Some(paused_at) = self.paused_at {
            toast.set_paused_at(paused_at);
        }
        if let Some(progress) = self.progress {
            toast.set_progress(progress);
        }
        if let Some(target) = self.target {
            toast.set_target(target);
        }
    }
}
