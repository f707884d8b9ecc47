//! Mode routing
//!
//! This module provides unified entry points for the execution modes:
//! - CLI mode (one-shot subcommands)
//! - TUI mode (interactive terminal UI, the default)
//!
//! The mode selection is based on the parsed subcommand and feature flags.

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export mode functions for convenience
#[cfg(feature = "cli")]
pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;

use crate::cli::Commands;
use crate::system::LogTarget;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    #[cfg(feature = "cli")]
    Cli,
    #[cfg(feature = "tui")]
    Tui,
    Unknown,
}

impl Mode {
    /// TUI owns the terminal, so its logs go to a file
    pub fn log_target(&self) -> LogTarget {
        match self {
            #[cfg(feature = "tui")]
            Mode::Tui => LogTarget::DataDir,
            _ => LogTarget::Console,
        }
    }
}

/// Detect which mode to run based on the parsed subcommand
///
/// # Mode Detection Logic
/// 1. No subcommand or `tui`, TUI feature enabled -> TUI mode
/// 2. Any other subcommand, CLI feature enabled -> CLI mode
/// 3. Otherwise -> Unknown
pub fn detect_mode(command: Option<&Commands>) -> Mode {
    match command {
        #[cfg(feature = "tui")]
        None | Some(Commands::Tui) => Mode::Tui,
        #[cfg(feature = "cli")]
        Some(_) => Mode::Cli,
        #[allow(unreachable_patterns)]
        _ => Mode::Unknown,
    }
}
