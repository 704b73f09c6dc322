// File: src/storage.rs
// Purpose: Settings persisted in window.localStorage

use crate::dom::window;
use crate::error::WebError;
use adw_app::{Settings, SettingsStore};
use anyhow::{Context, Result};
use web_sys::Storage;

pub const DEFAULT_STORAGE_KEY: &str = "adw-settings";

#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Result<Option<Storage>> {
        Ok(window()?.local_storage().map_err(WebError::from)?)
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_KEY)
    }
}

impl SettingsStore for LocalStorageStore {
    /// Unavailable storage (e.g. disabled by the browser) reads as empty
    fn load(&self) -> Result<Option<Settings>> {
        let Some(storage) = self.storage()? else {
            tracing::warn!("localStorage unavailable, using default settings");
            return Ok(None);
        };
        let raw = storage.get_item(&self.key).map_err(WebError::from)?;
        match raw {
            Some(raw) if !raw.trim().is_empty() => {
                let settings = serde_json::from_str(&raw)
                    .with_context(|| format!("Invalid settings under '{}'", self.key))?;
                Ok(Some(settings))
            }
            _ => Ok(None),
        }
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        let storage = self
            .storage()?
            .context("localStorage is not available")?;
        let raw = serde_json::to_string(settings)?;
        storage.set_item(&self.key, &raw).map_err(WebError::from)?;
        Ok(())
    }
}
