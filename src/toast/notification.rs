// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` snapshot, its `ToastId` and the
//! `Lifetime` that decides whether it auto-dismisses.

use crate::config::FULL_PROGRESS;
use std::fmt;
use std::time::Duration;
use tokio::time::Instant;

/// Unique identifier for a toast, assigned by the store that created it.
///
/// Ids are strictly increasing for the lifetime of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw id value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How long a toast stays in the store before it removes itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifetime {
    /// Removed automatically once the duration has elapsed.
    Finite(Duration),
    /// Never removed automatically and carries no timers.
    Infinite,
}

impl Lifetime {
    /// Returns a finite lifetime of `ms` milliseconds.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Lifetime::Finite(Duration::from_millis(ms))
    }

    /// Returns the duration for finite lifetimes.
    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        match self {
            Lifetime::Finite(duration) => Some(duration),
            Lifetime::Infinite => None,
        }
    }

    #[must_use]
    pub fn is_infinite(self) -> bool {
        matches!(self, Lifetime::Infinite)
    }
}

/// A toast notification as seen by subscribers.
///
/// Values handed out by the store are snapshots: mutating the store later
/// does not change a toast that was already delivered.
#[derive(Debug, Clone)]
pub struct Toast<M> {
    id: ToastId,
    message: M,
    lifetime: Lifetime,
    created_at: Instant,
    paused_at: Option<Instant>,
    /// Remaining lifetime in percent, 100 down to 0.
    progress: f32,
    dismissable: bool,
    pausable: bool,
    target: Option<String>,
}

impl<M> Toast<M> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: ToastId,
        message: M,
        lifetime: Lifetime,
        created_at: Instant,
        paused_at: Option<Instant>,
        progress: f32,
        dismissable: bool,
        pausable: bool,
        target: Option<String>,
    ) -> Self {
        Self {
            id,
            message,
            lifetime,
            created_at,
            paused_at,
            progress,
            dismissable,
            pausable,
            target,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &M {
        &self.message
    }

    #[must_use]
    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns when progress was frozen, if it currently is.
    #[must_use]
    pub fn paused_at(&self) -> Option<Instant> {
        self.paused_at
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Returns the remaining lifetime in percent (100 at creation, 0 at expiry).
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether the UI should offer a dismiss control.
    #[must_use]
    pub fn is_dismissable(&self) -> bool {
        self.dismissable
    }

    /// Whether the UI should pause progress while the toast is hovered.
    #[must_use]
    pub fn is_pausable(&self) -> bool {
        self.pausable
    }

    /// Returns the grouping tag used for bulk removal.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Computes the remaining progress at `now` from the wall-clock time
    /// elapsed since creation.
    ///
    /// Infinite toasts keep their stored progress. The result is clamped to
    /// `0.0..=100.0`.
    #[must_use]
    pub fn progress_at(&self, now: Instant) -> f32 {
        let Lifetime::Finite(duration) = self.lifetime else {
            return self.progress;
        };
        if duration.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.created_at);
        let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
        (f64::from(FULL_PROGRESS) - ratio * f64::from(FULL_PROGRESS)).clamp(0.0, 100.0) as f32
    }

    /// Recomputes progress unless paused.
    ///
    /// Returns `None` when paused (nothing changed), otherwise the new value.
    pub(crate) fn refresh_progress(&mut self, now: Instant) -> Option<f32> {
        if self.is_paused() || self.lifetime.is_infinite() {
            return None;
        }
        self.progress = self.progress_at(now);
        Some(self.progress)
    }

    pub(crate) fn set_message(&mut self, message: M) {
        self.message = message;
    }

    pub(crate) fn set_dismissable(&mut self, dismissable: bool) {
        self.dismissable = dismissable;
    }

    pub(crate) fn set_pausable(&mut self, pausable: bool) {
        self.pausable = pausable;
    }

    pub(crate) fn set_paused_at(&mut self, paused_at: Option<Instant>) {
        self.paused_at = paused_at;
    }

    pub(crate) fn set_progress(&mut self, progress: f32) {
        self.progress = progress.clamp(0.0, 100.0);
    }

    pub(crate) fn set_target(&mut self, target: Option<String>) {
        self.target = target;
    }
}
