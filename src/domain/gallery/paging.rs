// SPDX-License-Identifier: MPL-2.0
//! Paging value objects.
//!
//! Page numbers and sizes are positive integers. These newtypes clamp on
//! construction so callers never have to.

// =============================================================================
// Bounds
// =============================================================================

/// Page size bounds accepted by the gallery API.
pub mod page_bounds {
    /// Smallest page the client will request.
    pub const MIN_SIZE: u32 = 1;
    /// Largest page the client will request.
    pub const MAX_SIZE: u32 = 100;
    /// Page size used for the gallery screen.
    pub const DEFAULT_SIZE: u32 = 10;
}

// =============================================================================
// PageNumber
// =============================================================================

/// One-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(u32);

impl PageNumber {
    /// The first page, the only one the gallery screen ever asks for.
    pub const FIRST: PageNumber = PageNumber(1);

    /// Creates a page number; zero is bumped to one.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.max(1))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

// =============================================================================
// PageSize
// =============================================================================

/// Number of rows per page, clamped to [`page_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(u32);

impl PageSize {
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(page_bounds::MIN_SIZE, page_bounds::MAX_SIZE))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(page_bounds::DEFAULT_SIZE)
    }
}

// =============================================================================
// PageRequest
// =============================================================================

/// A single page to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageRequest {
    pub page: PageNumber,
    pub size: PageSize,
}

impl PageRequest {
    /// First page with the given size.
    #[must_use]
    pub fn first(size: PageSize) -> Self {
        Self {
            page: PageNumber::FIRST,
            size,
        }
    }
}
