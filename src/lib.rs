// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a toast notification store with auto-dismiss timers and
//! progress tracking, plus an Iced overlay that renders it.
//!
//! The store keeps toasts most-recent-first, removes finite toasts when their
//! lifetime ends and publishes a full snapshot to listeners on every change.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod toast;
pub mod ui;
