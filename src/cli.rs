//! Command-line interface definitions using clap
//!
//! Without a subcommand linkdeck opens the TUI.

use clap::{Parser, Subcommand};

use crate::listing::SortKey;

/// linkdeck - terminal client for a URL shortener service
#[derive(Parser, Debug)]
#[command(name = "linkdeck")]
#[command(version)]
#[command(about = "Terminal client for a URL shortener service", long_about = None)]
pub struct Cli {
    /// Configuration file (default: linkdeck.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Override api.base_url, e.g. http://localhost:8000/api
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start TUI mode
    #[cfg(feature = "tui")]
    Tui,

    /// Shorten a URL
    Shorten {
        /// Target URL (http or https)
        url: String,

        /// Expire after this many minutes
        #[arg(long)]
        ttl: Option<String>,

        /// Custom alias instead of a generated identifier
        #[arg(long)]
        alias: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List shortened URLs, one page at a time
    List {
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Page size (default: list.page_size)
        #[arg(long)]
        size: Option<usize>,

        /// Only rows whose URL or short URL contains this text
        #[arg(long)]
        search: Option<String>,

        /// Sort column
        #[arg(long, value_enum, default_value_t = SortKey::OriginalUrl)]
        sort: SortKey,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a shortened URL
    Delete {
        /// Short identifier
        short_id: String,
    },

    /// Show where a short URL redirects to
    Resolve {
        /// Short identifier or full .../redirect/<id> link
        target: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: linkdeck.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}
