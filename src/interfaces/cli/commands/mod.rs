//! CLI command implementations

pub mod config_management;
mod url_management;

pub use url_management::*;
