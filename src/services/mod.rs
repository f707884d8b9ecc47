//! Service layer for business logic
//!
//! User-facing flows shared between the CLI and the TUI.

mod url_service;

pub use url_service::*;
