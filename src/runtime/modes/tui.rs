//! TUI mode
//!
//! This module contains the TUI (Terminal User Interface) mode startup logic.
//! It delegates to the actual TUI implementation.

/// Run TUI mode
pub async fn run_tui() -> Result<(), Box<dyn std::error::Error>> {
    crate::interfaces::tui::run_tui().await
}
