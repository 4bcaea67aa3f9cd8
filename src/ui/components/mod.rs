// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! - [`error_display`] - Error panel with title, message, action button and
//!   expandable technical details

pub mod error_display;
