//! Logging system initialization
//!
//! Builds the global tracing subscriber from the `[logging]` section.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use super::paths;
use crate::config::LoggingConfig;
use crate::errors::{LinkdeckError, Result};

/// Where log lines go when `logging.file` is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// stderr, for the CLI (stdout carries command output)
    Console,
    /// `<data dir>/linkdeck/linkdeck.log`; the TUI owns the terminal
    DataDir,
}

/// Resolve the file to log into, `None` meaning console
pub fn log_file_path(config: &LoggingConfig, target: LogTarget) -> Result<Option<PathBuf>> {
    if !config.file.trim().is_empty() {
        return Ok(Some(PathBuf::from(config.file.trim())));
    }
    match target {
        LogTarget::Console => Ok(None),
        LogTarget::DataDir => paths::default_log_file().map(Some),
    }
}

/// Initialize logging system based on configuration
///
/// The returned `WorkerGuard` must be kept alive for the duration of the
/// program so buffered lines are flushed.
pub fn init_logging(config: &LoggingConfig, target: LogTarget) -> Result<WorkerGuard> {
    let file = log_file_path(config, target)?;

    let writer: Box<dyn std::io::Write + Send + Sync> = match file.as_deref() {
        Some(path) if config.enable_rotation => Box::new(rolling_appender(path, config)?),
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            Box::new(file)
        }
        None => Box::new(std::io::stderr()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| LinkdeckError::config(format!("Invalid log level '{}': {}", config.level, e)))?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(file.is_none());

    let installed = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| LinkdeckError::config(format!("Failed to install logger: {}", e)))?;

    Ok(guard)
}

// 按天滚动，保留 max_backups 个文件
fn rolling_appender(path: &Path, config: &LoggingConfig) -> Result<rolling::RollingFileAppender> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let prefix = path
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or(paths::LOG_FILE_NAME)
        .trim_end_matches(".log")
        .to_string();

    rolling::Builder::new()
        .rotation(rolling::Rotation::DAILY)
        .filename_prefix(prefix)
        .filename_suffix("log")
        .max_log_files(config.max_backups.max(1) as usize)
        .build(dir)
        .map_err(|e| LinkdeckError::file_operation(format!("Failed to create rolling log appender: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_file_wins() {
        let config = LoggingConfig {
            file: "/tmp/custom.log".to_string(),
            ..Default::default()
        };
        assert_eq!(
            log_file_path(&config, LogTarget::Console).unwrap(),
            Some(PathBuf::from("/tmp/custom.log"))
        );
    }

    #[test]
    fn test_console_target_without_file() {
        let config = LoggingConfig::default();
        assert_eq!(log_file_path(&config, LogTarget::Console).unwrap(), None);
    }
}
