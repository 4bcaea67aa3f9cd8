// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **API**: Endpoint, page size and timeout bounds
//! - **Animation**: Spinner and image crossfade timing

// ==========================================================================
// API Defaults
// ==========================================================================

pub use crate::infrastructure::http::DEFAULT_BASE_URL;

/// Rows requested for the gallery page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Minimum page size.
pub const MIN_PAGE_SIZE: u32 = 1;

/// Maximum page size.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Default connect/read timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Minimum timeout in seconds.
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum timeout in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 120;

/// Environment variable that supplies the service key at runtime.
pub const ENV_SERVICE_KEY: &str = "ICED_GALLERY_SERVICE_KEY";

/// Service key baked in at build time (`GALLERY_SERVICE_KEY=... cargo build`).
pub const BUILD_SERVICE_KEY: Option<&str> = option_env!("GALLERY_SERVICE_KEY");

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Interval of the animation tick in milliseconds (~60 fps).
pub const ANIMATION_TICK_MS: u64 = 16;

/// Duration of the image crossfade in milliseconds.
pub const CROSSFADE_MS: u64 = 300;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_bounds_are_consistent() {
        assert!(MIN_PAGE_SIZE <= DEFAULT_PAGE_SIZE);
        assert!(DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE);
    }

    #[test]
    fn timeout_bounds_are_consistent() {
        assert!(MIN_TIMEOUT_SECS <= DEFAULT_TIMEOUT_SECS);
        assert!(DEFAULT_TIMEOUT_SECS <= MAX_TIMEOUT_SECS);
    }

    #[test]
    fn crossfade_spans_several_ticks() {
        assert!(CROSSFADE_MS > ANIMATION_TICK_MS * 4);
    }
}
