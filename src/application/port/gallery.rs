// SPDX-License-Identifier: MPL-2.0
//! Gallery retrieval port.
//!
//! [`GallerySource`] is the only way the UI reaches the network. The
//! production adapter is
//! [`HttpGalleryClient`](crate::infrastructure::http::HttpGalleryClient).

use crate::domain::gallery::{GalleryItem, PageRequest};
use crate::error::FetchError;
use futures_util::future::BoxFuture;
use std::sync::Arc;

/// Result of a page fetch: a non-empty item list or a classified failure.
pub type PageResult = Result<Vec<GalleryItem>, FetchError>;

/// Result of an image fetch: encoded image bytes or a classified failure.
pub type ImageResult = Result<Vec<u8>, FetchError>;

/// Source of gallery pages and the images they reference.
pub trait GallerySource: Send + Sync {
    /// Fetches one page.
    ///
    /// Resolves to exactly one of:
    /// - `Ok(items)` with at least one item, in server order
    /// - `Err(FetchError)` describing why nothing can be shown
    ///
    /// Implementations must not retry; retrying is the caller's decision.
    fn fetch_page(&self, request: PageRequest) -> BoxFuture<'static, PageResult>;

    /// Fetches the encoded bytes of a single image.
    fn fetch_image(&self, url: &str) -> BoxFuture<'static, ImageResult>;
}

/// Shared handle to the source, built once at startup and injected.
pub type SharedGallerySource = Arc<dyn GallerySource>;
