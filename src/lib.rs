//! linkdeck - terminal client for a URL shortener service
//!
//! Talks to the shortener's REST API to shorten URLs, page through the
//! shortened ones, search and sort them locally, copy short links and
//! delete entries.
//!
//! # Features
//! - **cli**: One-shot subcommands (default)
//! - **tui**: Interactive terminal user interface (default)
//! - **full**: All features enabled
//!
//! # Architecture
//! - `client`: REST API client behind the `UrlApi` trait
//! - `services`: create / list / delete / resolve flows with user-facing texts
//! - `listing`: client-side search, sort and page estimation
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `runtime`: Startup and execution modes
//! - `system`: Logging, data directory and persisted UI state

pub mod activity;
pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod listing;
pub mod models;
pub mod runtime;
pub mod services;
pub mod system;
pub mod utils;
