use crate::SettingsCommands;
use adw_api::ApiError;
use adw_app::settings::{FileStore, SettingsManager, SettingsSync};
use adw_app::{AccentColor, Config, Theme};
use anyhow::Result;
use async_trait::async_trait;
use colored::Colorize;

/// Used when `ui.settings_path` is not configured
pub const DEFAULT_SETTINGS_FILE: &str = ".adwaita-settings.json";

pub fn settings_path(config: &Config) -> String {
    config
        .ui
        .settings_path
        .clone()
        .unwrap_or_else(|| DEFAULT_SETTINGS_FILE.to_string())
}

pub fn execute(config: &Config, command: SettingsCommands) -> Result<()> {
    let store = FileStore::new(settings_path(config));
    let mut manager = SettingsManager::open(store, config.ui.default_settings())?;

    match command {
        SettingsCommands::Show => {
            let current = manager.current();
            println!("{}", "Settings".green().bold());
            println!("Theme:        {}", current.theme.as_str().cyan());
            println!("Accent color: {}", current.accent_color.as_str().cyan());
            println!("Stored in:    {}", manager.store().path().display());
        }
        SettingsCommands::Set {
            theme,
            accent,
            offline,
        } => {
            let theme = theme.map(|t| t.parse::<Theme>()).transpose()?;
            let accent = accent.map(|a| a.parse::<AccentColor>()).transpose()?;
            if theme.is_none() && accent.is_none() {
                println!("{}", "Nothing to change".yellow());
                return Ok(());
            }

            super::block_on(async {
                if offline {
                    apply(&mut manager, theme, accent, &Offline).await
                } else {
                    let client = adw_app::csrf::api_client(&config.api, None);
                    apply(&mut manager, theme, accent, &client).await
                }
            })??;

            println!("{}", "Settings saved".green().bold());
        }
    }

    Ok(())
}

async fn apply(
    manager: &mut SettingsManager<FileStore>,
    theme: Option<Theme>,
    accent: Option<AccentColor>,
    sync: &impl SettingsSync,
) -> Result<()> {
    if let Some(theme) = theme {
        manager.set_theme(theme, sync).await?;
    }
    if let Some(accent) = accent {
        manager.set_accent_color(accent, sync).await?;
    }
    Ok(())
}

/// Local-only changes
struct Offline;

#[async_trait(?Send)]
impl SettingsSync for Offline {
    async fn push_theme(&self, _theme: Theme) -> Result<(), ApiError> {
        Ok(())
    }

    async fn push_accent_color(&self, _accent_color: AccentColor) -> Result<(), ApiError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adw_app::settings::SettingsStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_offline_set_is_stored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut config = Config::default();
        config.ui.settings_path = Some(path.display().to_string());

        execute(
            &config,
            SettingsCommands::Set {
                theme: Some("dark".to_string()),
                accent: Some("teal".to_string()),
                offline: true,
            },
        )
        .unwrap();

        let stored = FileStore::new(&path).load().unwrap().unwrap();
        assert_eq!(stored.theme, Theme::Dark);
        assert_eq!(stored.accent_color, AccentColor::Teal);
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.ui.settings_path = Some(dir.path().join("s.json").display().to_string());

        let err = execute(
            &config,
            SettingsCommands::Set {
                theme: Some("sepia".to_string()),
                accent: None,
                offline: true,
            },
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "unknown theme 'sepia'");
    }
}
