// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! Records decoded from the photo gallery API and the paging parameters used
//! to request them. Nothing here knows about HTTP or JSON.

pub mod item;
pub mod paging;

pub use item::{GalleryItem, ItemDetails};
pub use paging::{PageNumber, PageRequest, PageSize};
