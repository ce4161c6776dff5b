// SPDX-License-Identifier: MPL-2.0
//! Progress tick period domain type.
//!
//! This module provides a type-safe wrapper for the period, in milliseconds,
//! at which a finite toast recomputes its remaining progress.

use super::defaults::{DEFAULT_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS};
use std::time::Duration;

/// Progress tick period in milliseconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–1000 milliseconds).
///
/// # Example
///
/// ```
/// use iced_toast::config::TickInterval;
///
/// let tick = TickInterval::new(16);
/// assert_eq!(tick.value(), 16);
///
/// // Values outside range are clamped
/// let too_fast = TickInterval::new(0);
/// assert_eq!(too_fast.value(), 1); // Clamped to min
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInterval(u64);

impl TickInterval {
    /// Creates a new tick interval, clamping to valid range.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value.clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        Self(DEFAULT_TICK_INTERVAL_MS)
    }
}
