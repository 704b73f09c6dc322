// File: src/config.rs
// Purpose: Configuration parsing from adwaita.toml

use crate::settings::{AccentColor, Settings, Theme};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "adwaita.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub router: RouterConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// REST backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Header carrying the CSRF token on POST requests
    #[serde(default = "default_csrf_header")]
    pub csrf_header: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Whether routes are case-insensitive (default: true)
    #[serde(default = "default_true")]
    pub case_insensitive: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Id of the element whose content the dispatcher replaces
    #[serde(default = "default_content_id")]
    pub content_id: String,

    #[serde(default = "default_toast_timeout_secs")]
    pub toast_timeout_secs: u64,

    /// Used until the user picks a theme
    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub accent_color: AccentColor,

    /// JSON file holding the user's settings (CLI only)
    #[serde(default)]
    pub settings_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `error`, `warn`, `info`, `debug` or `trace`
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_csrf_header() -> String {
    adw_api::DEFAULT_CSRF_HEADER.to_string()
}

fn default_content_id() -> String {
    "app-content".to_string()
}

fn default_toast_timeout_secs() -> u64 {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            csrf_header: default_csrf_header(),
        }
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            case_insensitive: true,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            content_id: default_content_id(),
            toast_timeout_secs: default_toast_timeout_secs(),
            theme: Theme::default(),
            accent_color: AccentColor::default(),
            settings_path: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl UiConfig {
    pub fn toast_timeout(&self) -> Duration {
        Duration::from_secs(self.toast_timeout_secs)
    }

    /// Settings used when nothing has been stored yet
    pub fn default_settings(&self) -> Settings {
        Settings {
            theme: self.theme,
            accent_color: self.accent_color,
        }
    }
}

impl Config {
    /// Load configuration from adwaita.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Parses TOML text; empty text gives the defaults
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from default path (./adwaita.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.csrf_header, "X-CSRFToken");
        assert!(config.router.case_insensitive);
        assert_eq!(config.ui.content_id, "app-content");
        assert_eq!(config.ui.toast_timeout(), Duration::from_secs(3));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("adwaita.toml")).unwrap();
        assert_eq!(config.ui.content_id, "app-content");
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[api]
base_url = "https://blog.example.org"

[router]
case_insensitive = false

[ui]
theme = "dark"
accent_color = "teal"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.base_url, "https://blog.example.org");
        assert_eq!(config.api.csrf_header, "X-CSRFToken");
        assert!(!config.router.case_insensitive);
        assert_eq!(config.ui.theme, Theme::Dark);
        assert_eq!(config.ui.accent_color, AccentColor::Teal);
        assert_eq!(config.ui.toast_timeout_secs, 3);
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\ntheme = \"sepia\"").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }

    #[test]
    fn test_empty_text() {
        let config = Config::parse("   \n").unwrap();
        assert!(config.router.case_insensitive);
    }
}
