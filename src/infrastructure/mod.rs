// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like the
//! HTTP stack.
//!
//! # Available Adapters
//!
//! - [`http`]: Gallery API access via `reqwest` (implements [`GallerySource`])
//!
//! [`GallerySource`]: crate::application::port::GallerySource

pub mod http;

pub use http::HttpGalleryClient;
