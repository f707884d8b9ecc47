//! Persisted UI preferences
//!
//! A tiny TOML file holding the theme. Missing or corrupt files fall back to
//! defaults; write failures are logged and otherwise ignored.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::paths;
use crate::errors::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiState {
    #[serde(default)]
    pub theme: Theme,
}

/// Reads and writes [`UiState`]
#[derive(Debug, Clone)]
pub struct UiStateStore {
    path: Option<PathBuf>,
}

impl UiStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// `ui.state_file` when set, otherwise the platform data directory
    pub fn from_config() -> Self {
        let config = crate::config::get_config();
        let configured = config.ui.state_file.trim();
        if !configured.is_empty() {
            return Self::new(configured);
        }
        match paths::default_state_file() {
            Ok(path) => Self::new(path),
            Err(e) => {
                warn!("UI state will not be persisted: {}", e);
                Self { path: None }
            }
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn load(&self) -> UiState {
        let Some(path) = self.path.as_deref() else {
            return UiState::default();
        };
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
                warn!("Ignoring corrupt UI state {}: {}", path.display(), e);
                UiState::default()
            }),
            Err(e) => {
                debug!("No UI state at {}: {}", path.display(), e);
                UiState::default()
            }
        }
    }

    pub fn try_save(&self, state: &UiState) -> Result<()> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string(state)?)?;
        Ok(())
    }

    /// Save, logging instead of failing
    pub fn save(&self, state: &UiState) {
        if let Err(e) = self.try_save(state) {
            warn!("Failed to save UI state: {}", e);
        }
    }
}
