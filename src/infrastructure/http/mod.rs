// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the photo gallery API.
//!
//! - [`client`]: request construction and transport ([`HttpGalleryClient`])
//! - [`envelope`]: lenient decoding of the JSON response envelope
//!
//! # Wire Format
//!
//! ```text
//! GET <base>/galleryList1?pageNo=1&numOfRows=10&MobileOS=AND&MobileApp=app
//!     &arrange=A&_type=json&serviceKey=<credential>
//!
//! {"response":{"header":{"resultCode":"0000","resultMsg":"OK"},
//!              "body":{"items":{"item":[...]},"numOfRows":10,"pageNo":1,"totalCount":5000}}}
//! ```

pub mod client;
pub mod envelope;

pub use client::{ClientSettings, HttpGalleryClient, DEFAULT_BASE_URL};
pub use envelope::{decode_page, DecodedPage};
