// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! Filter precedence: `--log-level` flag, then `RUST_LOG`, then
//! [`DEFAULT_FILTER`].

use tracing_subscriber::{prelude::*, EnvFilter};

/// Info for the app, warnings only from the chatty render stack.
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn,iced_wgpu=warn";

/// Builds the filter from an explicit directive or the environment.
///
/// An invalid directive falls back to [`DEFAULT_FILTER`].
pub fn filter(directive: Option<&str>) -> EnvFilter {
    match directive {
        Some(directive) => EnvFilter::try_new(directive).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber, writing to stderr.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(directive: Option<&str>) {
    let result = tracing_subscriber::registry()
        .with(filter(directive))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_directive_is_used() {
        assert_eq!(filter(Some("debug")).to_string(), "debug");
    }

    #[test]
    fn invalid_directive_falls_back_to_default() {
        let fallback = filter(Some("iced_gallery=loud")).to_string();
        assert!(fallback.contains("info"));
    }

    #[test]
    fn environment_is_read_without_directive() {
        std::env::set_var("RUST_LOG", "iced_gallery=trace");
        assert_eq!(filter(None).to_string(), "iced_gallery=trace");

        std::env::set_var("RUST_LOG", "iced_gallery=loud");
        assert_eq!(filter(None).to_string(), EnvFilter::new(DEFAULT_FILTER).to_string());
        std::env::remove_var("RUST_LOG");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(Some("warn"));
        init(Some("warn"));
    }
}
