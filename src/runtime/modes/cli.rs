//! CLI mode
//!
//! This module contains the CLI mode startup logic.
//! It delegates to the actual CLI implementation.

use tracing::debug;

use crate::cli::Commands;
use crate::interfaces::cli::CliError;

/// Run one CLI subcommand
pub async fn run_cli(command: Commands) -> Result<(), CliError> {
    debug!("Running CLI command: {:?}", command);
    crate::interfaces::cli::run_cli_command(command).await
}
