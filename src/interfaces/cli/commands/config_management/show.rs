//! Show effective config command

use colored::Colorize;

use crate::interfaces::cli::CliError;

/// Print the configuration after file, env and flag overrides
pub fn config_show() -> Result<(), CliError> {
    let config = crate::config::get_config();
    let rendered =
        toml::to_string_pretty(config.as_ref()).map_err(|e| CliError::OutputError(e.to_string()))?;

    println!("{}", "# Effective configuration".dimmed());
    println!("{}", rendered);
    Ok(())
}
