// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It depends on
//! nothing but `std` so it stays trivially testable.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery records ([`GalleryItem`](gallery::GalleryItem)) and
//!   paging value objects ([`PageRequest`](gallery::PageRequest))

pub mod gallery;
