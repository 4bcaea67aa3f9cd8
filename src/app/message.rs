// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::gallery;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ko`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Service key override; takes precedence over env and config.
    pub service_key: Option<String>,
    /// Rows to request; overrides `[api].page_size`.
    pub page_size: Option<u32>,
}
