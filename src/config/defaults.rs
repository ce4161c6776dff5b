// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Lifetime**: How long a toast stays visible before auto-removal
//! - **Display hints**: Defaults for the flags consumed by the UI layer
//! - **Progress**: Progress tick period and its bounds

// ==========================================================================
// Lifetime Defaults
// ==========================================================================

/// Default toast lifetime (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 4000;

// ==========================================================================
// Display Hint Defaults
// ==========================================================================

/// Whether new toasts show a dismiss control.
pub const DEFAULT_DISMISSABLE: bool = true;

/// Whether new toasts pause their progress on hover.
pub const DEFAULT_PAUSABLE: bool = false;

// ==========================================================================
// Progress Defaults
// ==========================================================================

/// Progress value of a freshly pushed toast (percent remaining).
pub const FULL_PROGRESS: f32 = 100.0;

/// Default period of the progress tick (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 10;

/// Minimum progress tick period (in milliseconds).
pub const MIN_TICK_INTERVAL_MS: u64 = 1;

/// Maximum progress tick period (in milliseconds).
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_DURATION_MS > 0);

    assert!(FULL_PROGRESS == 100.0);

    assert!(MIN_TICK_INTERVAL_MS > 0);
    assert!(MAX_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS < DEFAULT_DURATION_MS);
};
