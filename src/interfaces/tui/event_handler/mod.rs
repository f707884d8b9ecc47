//! Event handling for TUI
//!
//! Handles keyboard events and delegates to appropriate handlers
//!
//! - main_screen: list navigation, inline search, actions on rows
//! - popup_screens: Shorten, DeleteConfirm, Help, Exiting

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

mod main_screen;
mod popup_screens;

use main_screen::*;
use popup_screens::*;

/// Handle keyboard input based on current screen; `true` means quit
///
/// Backend calls are only queued here, see [`App::run_pending`].
pub fn handle_key_event(app: &mut App, key_code: KeyCode) -> bool {
    // Handle inline search mode first
    if app.inline_search_mode && app.current_screen == CurrentScreen::Main {
        handle_inline_search(app, key_code);
        return false;
    }

    match app.current_screen {
        CurrentScreen::Main => handle_main_screen(app, key_code),
        CurrentScreen::Shorten => handle_shorten_screen(app, key_code),
        CurrentScreen::DeleteConfirm => handle_delete_confirm_screen(app, key_code),
        CurrentScreen::Help => handle_help_screen(app, key_code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key_code),
    }
}
