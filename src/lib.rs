// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a desktop photo gallery for the Korea Tourism
//! Organization photo gallery API, built with the Iced GUI framework.
//!
//! It fetches a single page of photos, renders loading, error and content
//! states, and retries on demand. The network sits behind the
//! [`GallerySource`](application::port::GallerySource) port so the screen can
//! be driven by a fake in tests.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
pub mod ui;
