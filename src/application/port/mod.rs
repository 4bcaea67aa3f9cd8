// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the UI layer stays independent
//! of the HTTP stack and can be driven by a fake in tests.
//!
//! # Available Ports
//!
//! - [`gallery`]: Gallery page and image retrieval
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync`; one instance is shared behind an `Arc`
//! - Methods return `'static` boxed futures so callers can hand them straight
//!   to `iced::Task::perform`
//! - Failures are values ([`FetchError`](crate::error::FetchError)), never panics

pub mod gallery;

pub use gallery::{GallerySource, ImageResult, PageResult, SharedGallerySource};
