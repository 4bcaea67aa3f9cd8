// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: a single page of photos fetched from the gallery source.
//!
//! - [`state`] - Load controller and view state machine
//! - [`thumbnails`] - Per-row image slots and crossfade progress
//! - [`component`] - Iced glue: messages, tasks, and rendering entry point
//! - [`view`] - Presentation of each view state
//! - [`row`] - A single list row and its captions

pub mod component;
pub mod row;
pub mod state;
pub mod thumbnails;
pub mod view;

pub use component::{Message, State};
pub use state::{Effect, Generation, LoadController, Resolution, ViewState};
pub use view::Presentation;
