// SPDX-License-Identifier: MPL-2.0
//! Tracing setup for the demo binary.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is left to the executable.
//!
//! Usage:
//!   RUST_LOG=iced_toast=debug iced_toast   # Log every push and removal
//!   RUST_LOG=iced_toast=trace iced_toast   # Also log progress ticks

use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Installs a compact console subscriber filtered by `RUST_LOG`.
pub fn init() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| Error::Tracing(err.to_string()))
}
