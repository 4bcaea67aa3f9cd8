// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file. The application never writes the file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[api]` - Gallery endpoint, credential, page size and timeout
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_GALLERY_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Service Key
//!
//! The credential is opaque to the application. [`ApiConfig::resolve_service_key`]
//! picks the first non-empty value from the CLI, the `ICED_GALLERY_SERVICE_KEY`
//! environment variable, `[api].service_key`, and finally the key baked in at
//! build time.
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config;
//!
//! let (config, _warning) = config::load();
//! let page_size = config.api.page_size();
//! assert!(page_size.value() >= 1);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::gallery::PageSize;
use crate::error::Result;
use crate::infrastructure::http::ClientSettings;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ko").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Gallery API settings.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base endpoint of the gallery service.
    #[serde(default = "default_base_url", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Service credential. Prefer the environment variable over storing it here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_key: Option<String>,

    /// Rows requested for the gallery page.
    #[serde(default = "default_page_size", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Connect/read timeout in seconds.
    #[serde(default = "default_timeout_secs", skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("service_key_set", &self.service_key.is_some())
            .field("page_size", &self.page_size)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            service_key: None,
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Effective page size, clamped to the supported range.
    #[must_use]
    pub fn page_size(&self) -> PageSize {
        PageSize::new(
            self.page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE),
        )
    }

    /// Effective timeout, clamped to the supported range.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(
            self.timeout_secs
                .unwrap_or(DEFAULT_TIMEOUT_SECS)
                .clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS),
        )
    }

    /// Picks the service key from the highest-priority non-empty source.
    #[must_use]
    pub fn resolve_service_key(&self, cli_key: Option<&str>) -> String {
        let env_key = std::env::var(ENV_SERVICE_KEY).ok();
        let key = [
            cli_key,
            env_key.as_deref(),
            self.service_key.as_deref(),
            BUILD_SERVICE_KEY,
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|key| !key.is_empty())
        .unwrap_or_default()
        .to_string();
        key
    }

    /// Builds the HTTP client settings.
    #[must_use]
    pub fn client_settings(&self, cli_key: Option<&str>) -> ClientSettings {
        ClientSettings {
            base_url: self
                .base_url
                .clone()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            service_key: self.resolve_service_key(cli_key),
            timeout: self.timeout(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Gallery API settings.
    #[serde(default)]
    pub api: ApiConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_base_url() -> Option<String> {
    Some(DEFAULT_BASE_URL.to_string())
}

fn default_page_size() -> Option<u32> {
    Some(DEFAULT_PAGE_SIZE)
}

fn default_timeout_secs() -> Option<u64> {
    Some(DEFAULT_TIMEOUT_SECS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::Mutex;
    use tempfile::tempdir;

    // Serializes tests that touch ICED_GALLERY_SERVICE_KEY.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn write_config(config: &Config, path: &Path) {
        let content = toml::to_string_pretty(config).expect("serialize");
        fs::write(path, content).expect("write");
    }

    #[test]
    fn serialized_config_loads_back_unchanged() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        let config = Config {
            general: GeneralConfig {
                language: Some("ko".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            api: ApiConfig {
                base_url: Some("https://example.org/gallery".to_string()),
                service_key: Some("abc".to_string()),
                page_size: Some(20),
                timeout_secs: Some(5),
            },
        };

        write_config(&config, &path);
        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "this is = not [valid toml").expect("write");

        match load_from_path(&path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.api.base_url.as_deref(), Some(DEFAULT_BASE_URL));
        assert_eq!(config.api.page_size, Some(DEFAULT_PAGE_SIZE));
        assert_eq!(config.api.timeout_secs, Some(DEFAULT_TIMEOUT_SECS));
        assert!(config.api.service_key.is_none());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"ko\"\n").expect("parse");
        assert_eq!(config.general.language.as_deref(), Some("ko"));
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"LIGHT\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn page_size_and_timeout_are_clamped() {
        let api = ApiConfig {
            page_size: Some(1_000),
            timeout_secs: Some(0),
            ..ApiConfig::default()
        };
        assert_eq!(api.page_size().value(), MAX_PAGE_SIZE);
        assert_eq!(api.timeout(), Duration::from_secs(MIN_TIMEOUT_SECS));
    }

    #[test]
    fn cli_service_key_wins() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_SERVICE_KEY, "from-env");
        let api = ApiConfig {
            service_key: Some("from-config".to_string()),
            ..ApiConfig::default()
        };

        assert_eq!(api.resolve_service_key(Some("from-cli")), "from-cli");
        assert_eq!(api.resolve_service_key(None), "from-env");
        std::env::remove_var(ENV_SERVICE_KEY);
    }

    #[test]
    fn config_service_key_used_when_env_missing() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_SERVICE_KEY);
        let api = ApiConfig {
            service_key: Some("  from-config  ".to_string()),
            ..ApiConfig::default()
        };

        assert_eq!(api.resolve_service_key(Some("   ")), "from-config");
    }

    #[test]
    fn client_settings_replace_blank_base_url() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let api = ApiConfig {
            base_url: Some("  ".to_string()),
            timeout_secs: Some(7),
            ..ApiConfig::default()
        };

        let settings = api.client_settings(Some("key"));
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.timeout, Duration::from_secs(7));
        assert_eq!(settings.service_key, "key");
    }

    #[test]
    fn debug_output_hides_service_key() {
        let api = ApiConfig {
            service_key: Some("super-secret".to_string()),
            ..ApiConfig::default()
        };
        assert!(!format!("{api:?}").contains("super-secret"));
    }

    #[test]
    fn load_with_override_reads_file_in_directory() {
        let dir = tempdir().expect("temp dir");
        let mut config = Config::default();
        config.api.page_size = Some(30);

        write_config(&config, &dir.path().join(CONFIG_FILE));
        let (loaded, warning) = load_with_override(Some(dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded.api.page_size, Some(30));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let dir = tempdir().expect("temp dir");
        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join(CONFIG_FILE), "[api\npage_size = ").expect("write");

        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }
}
