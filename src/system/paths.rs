//! Platform data directory

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::errors::{LinkdeckError, Result};

pub const APP_NAME: &str = "linkdeck";
pub const STATE_FILE_NAME: &str = "state.toml";
pub const LOG_FILE_NAME: &str = "linkdeck.log";

/// `<data dir>/linkdeck`, created on demand
pub fn data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", APP_NAME)
        .ok_or_else(|| LinkdeckError::file_operation("Could not determine data directory"))?;

    let dir = dirs.data_dir();
    std::fs::create_dir_all(dir)?;
    Ok(dir.to_path_buf())
}

pub fn default_state_file() -> Result<PathBuf> {
    Ok(data_dir()?.join(STATE_FILE_NAME))
}

pub fn default_log_file() -> Result<PathBuf> {
    Ok(data_dir()?.join(LOG_FILE_NAME))
}
