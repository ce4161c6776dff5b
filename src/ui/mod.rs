// SPDX-License-Identifier: MPL-2.0
//! Iced presentation layer for the toast store.

pub mod design_tokens;
pub mod toast_view;
