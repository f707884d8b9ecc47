//! CLI interface module
//!
//! One-shot commands over the same flows the TUI uses.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::errors::LinkdeckError;
use crate::services::UrlService;
use commands::{
    ListOptions, config_management, delete_url, list_urls, resolve_url, shorten_url,
};

#[derive(Debug)]
pub enum CliError {
    /// Input rejected before any request was made
    InputError(String),
    /// The request failed; carries the user-facing message
    RequestError(String),
    ConfigError(String),
    OutputError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::InputError(msg) => format!("Invalid input: {}", msg),
            CliError::RequestError(msg) => format!("Request failed: {}", msg),
            CliError::ConfigError(msg) => format!("Config error: {}", msg),
            CliError::OutputError(msg) => format!("Output error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::InputError(msg) => {
                format!("{} {}", "Invalid input:".yellow().bold(), msg.white())
            }
            CliError::RequestError(msg) => {
                format!("{} {}", "Request failed:".red().bold(), msg.white())
            }
            CliError::ConfigError(msg) => {
                format!("{} {}", "Config error:".red().bold(), msg.white())
            }
            CliError::OutputError(msg) => {
                format!("{} {}", "Output error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<LinkdeckError> for CliError {
    fn from(err: LinkdeckError) -> Self {
        match err {
            LinkdeckError::Validation(msg) => CliError::InputError(msg),
            LinkdeckError::Config(msg) => CliError::ConfigError(msg),
            LinkdeckError::Serialization(msg) | LinkdeckError::FileOperation(msg) => {
                CliError::OutputError(msg)
            }
            other => CliError::RequestError(other.message().to_string()),
        }
    }
}

impl From<crate::utils::InputError> for CliError {
    fn from(err: crate::utils::InputError) -> Self {
        CliError::InputError(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::OutputError(err.to_string())
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    match cmd {
        // 配置命令不需要访问后端
        Commands::Config { action } => match action {
            ConfigCommands::Generate { output_path, force } => {
                config_management::config_generate(output_path, force).await
            }
            ConfigCommands::Show => config_management::config_show(),
        },

        Commands::Shorten {
            url,
            ttl,
            alias,
            json,
        } => shorten_url(&UrlService::from_config(), url, ttl, alias, json).await,

        Commands::List {
            page,
            size,
            search,
            sort,
            desc,
            json,
        } => {
            let options = ListOptions {
                page,
                size: size.unwrap_or_else(|| crate::config::get_config().list.page_size),
                search: search.unwrap_or_default(),
                sort: crate::listing::SortState::new(sort, !desc),
                json,
            };
            list_urls(&UrlService::from_config(), options).await
        }

        Commands::Delete { short_id } => delete_url(&UrlService::from_config(), &short_id).await,

        Commands::Resolve { target } => resolve_url(&UrlService::from_config(), &target).await,

        #[cfg(feature = "tui")]
        Commands::Tui => Err(CliError::InputError(
            "tui is an interactive mode, not a one-shot command".to_string(),
        )),
    }
}
