// File: src/settings/mod.rs
// Purpose: Theme and accent color preferences, local persistence and server sync

use adw_api::{ApiClient, ApiError};
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::System, Theme::Light, Theme::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::System => "Follow System",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    #[default]
    Blue,
    Teal,
    Green,
    Yellow,
    Orange,
    Red,
    Pink,
    Purple,
    Slate,
}

impl AccentColor {
    pub const ALL: [AccentColor; 9] = [
        AccentColor::Blue,
        AccentColor::Teal,
        AccentColor::Green,
        AccentColor::Yellow,
        AccentColor::Orange,
        AccentColor::Red,
        AccentColor::Pink,
        AccentColor::Purple,
        AccentColor::Slate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Teal => "teal",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Pink => "pink",
            Self::Purple => "purple",
            Self::Slate => "slate",
        }
    }
}

/// Unrecognized theme or accent color name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownSetting {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for Theme {
    type Err = UnknownSetting;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| UnknownSetting {
                kind: "theme",
                value: s.to_string(),
            })
    }
}

impl FromStr for AccentColor {
    type Err = UnknownSetting;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| UnknownSetting {
                kind: "accent color",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User preferences applied to the document root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub accent_color: AccentColor,
}

impl Settings {
    /// Attributes to set on the root element
    pub fn root_attributes(&self) -> [(&'static str, &'static str); 2] {
        [
            ("data-theme", self.theme.as_str()),
            ("data-accent-color", self.accent_color.as_str()),
        ]
    }
}

/// Local persistence for [`Settings`]
pub trait SettingsStore {
    /// Stored settings, or `None` when nothing was saved yet
    fn load(&self) -> Result<Option<Settings>>;

    fn save(&self, settings: &Settings) -> Result<()>;
}

/// Pushes preference changes to the server
#[async_trait(?Send)]
pub trait SettingsSync {
    async fn push_theme(&self, theme: Theme) -> Result<(), ApiError>;

    async fn push_accent_color(&self, accent_color: AccentColor) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
impl SettingsSync for ApiClient {
    async fn push_theme(&self, theme: Theme) -> Result<(), ApiError> {
        self.save_theme(theme.as_str()).await
    }

    async fn push_accent_color(&self, accent_color: AccentColor) -> Result<(), ApiError> {
        self.save_accent_color(accent_color.as_str()).await
    }
}

/// Current settings backed by a store
///
/// A change is applied and saved locally first; a failed server push is
/// returned to the caller but does not roll the local change back.
pub struct SettingsManager<St: SettingsStore> {
    store: St,
    current: Settings,
}

impl<St: SettingsStore> SettingsManager<St> {
    /// Loads stored settings, falling back to `defaults`
    pub fn open(store: St, defaults: Settings) -> Result<Self> {
        let current = store.load()?.unwrap_or(defaults);
        tracing::debug!(
            "Settings loaded: theme={} accent={}",
            current.theme,
            current.accent_color
        );
        Ok(Self { store, current })
    }

    pub fn current(&self) -> Settings {
        self.current
    }

    pub fn store(&self) -> &St {
        &self.store
    }

    pub async fn set_theme(&mut self, theme: Theme, sync: &impl SettingsSync) -> Result<()> {
        self.current.theme = theme;
        self.store.save(&self.current)?;
        sync.push_theme(theme).await.map_err(|err| {
            tracing::error!("Failed to sync theme: {}", err);
            err
        })?;
        Ok(())
    }

    pub async fn set_accent_color(
        &mut self,
        accent_color: AccentColor,
        sync: &impl SettingsSync,
    ) -> Result<()> {
        self.current.accent_color = accent_color;
        self.store.save(&self.current)?;
        sync.push_accent_color(accent_color).await.map_err(|err| {
            tracing::error!("Failed to sync accent color: {}", err);
            err
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::cell::RefCell;

    #[rstest]
    #[case("system", Theme::System)]
    #[case("Dark", Theme::Dark)]
    #[case(" light ", Theme::Light)]
    fn test_parse_theme(#[case] input: &str, #[case] expected: Theme) {
        assert_eq!(input.parse::<Theme>(), Ok(expected));
    }

    #[test]
    fn test_unknown_accent() {
        let err = "magenta".parse::<AccentColor>().unwrap_err();
        assert_eq!(err.to_string(), "unknown accent color 'magenta'");
    }

    #[test]
    fn test_root_attributes() {
        let settings = Settings {
            theme: Theme::Dark,
            accent_color: AccentColor::Slate,
        };
        assert_eq!(
            settings.root_attributes(),
            [("data-theme", "dark"), ("data-accent-color", "slate")]
        );
    }

    #[derive(Default)]
    struct RecordingSync {
        pushed: RefCell<Vec<String>>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl SettingsSync for RecordingSync {
        async fn push_theme(&self, theme: Theme) -> Result<(), ApiError> {
            self.pushed.borrow_mut().push(format!("theme={}", theme));
            self.result("/api/settings/theme")
        }

        async fn push_accent_color(&self, accent_color: AccentColor) -> Result<(), ApiError> {
            self.pushed
                .borrow_mut()
                .push(format!("accent_color={}", accent_color));
            self.result("/api/settings/accent_color")
        }
    }

    impl RecordingSync {
        fn result(&self, url: &str) -> Result<(), ApiError> {
            if self.fail {
                Err(ApiError::Status {
                    status: 500,
                    url: url.to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn test_change_is_saved_and_pushed() {
        let sync = RecordingSync::default();
        let mut manager = SettingsManager::open(MemoryStore::new(), Settings::default()).unwrap();

        manager.set_theme(Theme::Dark, &sync).await.unwrap();
        manager.set_accent_color(AccentColor::Green, &sync).await.unwrap();

        assert_eq!(
            *sync.pushed.borrow(),
            vec!["theme=dark".to_string(), "accent_color=green".to_string()]
        );
        assert_eq!(
            manager.store().load().unwrap(),
            Some(Settings {
                theme: Theme::Dark,
                accent_color: AccentColor::Green
            })
        );
    }

    #[tokio::test]
    async fn test_failed_push_keeps_local_change() {
        let sync = RecordingSync {
            fail: true,
            ..RecordingSync::default()
        };
        let mut manager = SettingsManager::open(MemoryStore::new(), Settings::default()).unwrap();

        let err = manager.set_theme(Theme::Light, &sync).await.unwrap_err();
        assert!(err.to_string().contains("HTTP 500"));
        assert_eq!(manager.current().theme, Theme::Light);
        assert_eq!(manager.store().load().unwrap().map(|s| s.theme), Some(Theme::Light));
    }

    #[test]
    fn test_open_uses_defaults_when_empty() {
        let defaults = Settings {
            theme: Theme::Dark,
            accent_color: AccentColor::Pink,
        };
        let manager = SettingsManager::open(MemoryStore::new(), defaults).unwrap();
        assert_eq!(manager.current(), defaults);
    }
}
