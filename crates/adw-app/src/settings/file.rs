// File: src/settings/file.rs
// Purpose: JSON file settings store

use super::{Settings, SettingsStore};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Stores settings as a small JSON document on disk
///
/// A missing or empty file means nothing was saved yet.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileStore {
    fn load(&self) -> Result<Option<Settings>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings file: {:?}", self.path))?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let settings = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {:?}", self.path))?;
        Ok(Some(settings))
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create settings directory: {:?}", parent)
                })?;
            }
        }

        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write settings file: {:?}", self.path))?;

        tracing::debug!("Saved settings to {:?}", self.path);
        Ok(())
    }
}
