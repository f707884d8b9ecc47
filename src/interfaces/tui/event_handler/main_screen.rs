//! Event handlers for the main screen
//!
//! Handles: row navigation, pagination, sorting, copy, resolve, inline search

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

/// Handle main screen input
pub fn handle_main_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        // Pagination
        KeyCode::Right | KeyCode::Char('n') | KeyCode::Char(']') => app.next_page(),
        KeyCode::Left | KeyCode::Char('p') | KeyCode::Char('[') => app.prev_page(),
        KeyCode::Char('r') | KeyCode::F(5) => app.request_refresh(),
        KeyCode::Esc => {
            if app.is_searching() {
                app.clear_search();
            }
        }
        KeyCode::Char('/') => {
            app.inline_search_mode = true;
        }
        KeyCode::Char('?') | KeyCode::Char('h') => {
            app.current_screen = CurrentScreen::Help;
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.form.open();
            app.current_screen = CurrentScreen::Shorten;
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            if app.get_selected_record().is_some() {
                app.current_screen = CurrentScreen::DeleteConfirm;
            }
        }
        // Sorting
        KeyCode::Char('s') => {
            app.cycle_sort_column();
            let label = app.sort_label();
            app.set_info(format!("Sorted by {}", label));
        }
        KeyCode::Char('S') => {
            app.toggle_sort_direction();
            let label = app.sort_label();
            app.set_info(format!("Sorted by {}", label));
        }
        // Copy to clipboard
        KeyCode::Char('y') => app.copy_selected(),
        KeyCode::Char('Y') | KeyCode::Char('c') => app.copy_last_shortened(),
        KeyCode::Char('o') | KeyCode::Enter => app.resolve_selected(),
        KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_theme(),
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.current_screen = CurrentScreen::Exiting;
        }
        _ => {}
    }
    false
}

/// Handle inline search mode input
pub fn handle_inline_search(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Esc => app.clear_search(),
        KeyCode::Enter => {
            // Keep the filter applied
            app.inline_search_mode = false;
        }
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),
        KeyCode::Char(c) => app.push_search_char(c),
        _ => {}
    }
}
