// File: src/settings/memory.rs
// Purpose: In-memory settings store

use super::{Settings, SettingsStore};
use anyhow::Result;
use std::cell::Cell;

/// In-memory settings store
///
/// Lost when the process ends. Used by tests and as the fallback when no
/// settings file is configured.
#[derive(Debug, Default)]
pub struct MemoryStore {
    settings: Cell<Option<Settings>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings: Cell::new(Some(settings)),
        }
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Option<Settings>> {
        Ok(self.settings.get())
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        self.settings.set(Some(*settings));
        Ok(())
    }
}
