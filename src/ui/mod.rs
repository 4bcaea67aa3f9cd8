// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Elm-style "state down, messages up": screens own their state, emit
//! messages, and hand async work back to the application as tasks.
//!
//! # Screens
//!
//! - [`gallery`] - Photo list with loading, error and empty states
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error display)
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod gallery;
pub mod styles;
pub mod theming;
pub mod widgets;
