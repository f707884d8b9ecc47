//! Event handlers for popup screens
//!
//! Handles: Shorten, DeleteConfirm, Help, Exiting

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::input_handler::{
    handle_back_tab_navigation, handle_backspace, handle_tab_navigation, handle_text_input,
};

/// Handle shorten form input
pub fn handle_shorten_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Enter => app.submit_shorten(),
        KeyCode::Backspace => handle_backspace(app),
        KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
            app.form.clear();
        }
        KeyCode::Tab | KeyCode::Down => handle_tab_navigation(app),
        KeyCode::BackTab | KeyCode::Up => handle_back_tab_navigation(app),
        KeyCode::Char(c) => handle_text_input(app, c),
        _ => {}
    }
    false
}

/// Handle delete confirmation screen input
pub fn handle_delete_confirm_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.current_screen = CurrentScreen::Main;
            app.delete_selected();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
        }
        _ => {}
    }
    false
}

/// Handle help screen input
pub fn handle_help_screen(app: &mut App, key_code: KeyCode) -> bool {
    if matches!(
        key_code,
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?')
    ) {
        app.current_screen = CurrentScreen::Main;
    }
    false
}

/// Handle exit confirmation input
pub fn handle_exiting_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') => true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
            false
        }
        _ => false,
    }
}
