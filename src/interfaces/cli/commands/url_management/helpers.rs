//! Helper functions for URL management CLI commands

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::{FlowOutcome, MessageLevel, Notice};

/// Print a flow notice with the matching marker
pub fn print_notice(notice: &Notice) {
    match notice.level {
        MessageLevel::Success => println!("{} {}", "✓".bold().green(), notice.text),
        MessageLevel::Info => println!("{} {}", "ℹ".bold().blue(), notice.text),
        MessageLevel::Error => eprintln!("{} {}", "✗".bold().red(), notice.text.red()),
    }
}

/// Unwrap a flow result, turning failures into a CLI error carrying the
/// same message the TUI would show
pub fn into_cli_result<T>(outcome: FlowOutcome<T>) -> Result<T, CliError> {
    match outcome.result {
        Ok(value) => Ok(value),
        Err(err) => Err(CliError::RequestError(
            outcome
                .notice
                .map(|n| n.text)
                .unwrap_or_else(|| err.message().to_string()),
        )),
    }
}

/// Expiry column text, "never" for links without one
pub fn expiry_label(expiration_time: &str) -> String {
    if expiration_time.trim().is_empty() {
        "never".to_string()
    } else {
        expiration_time.to_string()
    }
}
