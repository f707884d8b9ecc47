// UI submodules
mod action_log;
mod common;
mod delete_confirm;
mod detail_panel;
mod exiting;
mod help;
mod inline_search;
mod main_screen;
mod shorten;
pub mod widgets;

// Re-export common utilities
pub use common::{draw_footer, draw_status_bar, draw_title_bar};

// Re-export screen drawing functions
pub use action_log::draw_action_log;
pub use delete_confirm::draw_delete_confirm_screen;
pub use detail_panel::draw_detail_panel;
pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use inline_search::draw_inline_search_bar;
pub use main_screen::draw_main_screen;
pub use shorten::draw_shorten_screen;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    let palette = app.palette();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        frame.area(),
    );

    // Calculate layout based on whether inline search is active
    let main_chunks = if app.inline_search_mode {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(10),   // Main content
                Constraint::Length(3), // Inline search bar
                Constraint::Length(3), // Status
                Constraint::Length(2), // Footer
            ])
            .split(frame.area())
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(10),   // Main content
                Constraint::Length(3), // Status
                Constraint::Length(2), // Footer
            ])
            .split(frame.area())
    };

    draw_title_bar(frame, app, main_chunks[0]);

    // Dual-panel layout: list on the left, details + recent actions on the right
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(main_chunks[1]);
    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(7)])
        .split(content_chunks[1]);

    draw_main_screen(frame, app, content_chunks[0]);
    draw_detail_panel(frame, app, side_chunks[0]);
    draw_action_log(frame, app, side_chunks[1]);

    // Popups over the main layout
    match app.current_screen {
        CurrentScreen::Main => {}
        CurrentScreen::Shorten => draw_shorten_screen(frame, app, main_chunks[1]),
        CurrentScreen::DeleteConfirm => draw_delete_confirm_screen(frame, app, main_chunks[1]),
        CurrentScreen::Help => draw_help_screen(frame, app, main_chunks[1]),
        CurrentScreen::Exiting => draw_exiting_screen(frame, app, main_chunks[1]),
    }

    if app.inline_search_mode {
        draw_inline_search_bar(frame, app, main_chunks[2]);
        draw_status_bar(frame, app, main_chunks[3]);
        draw_footer(frame, app, main_chunks[4]);
    } else {
        draw_status_bar(frame, app, main_chunks[2]);
        draw_footer(frame, app, main_chunks[3]);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::client::UrlApi;
    use crate::errors::Result;
    use crate::models::{CreationRequest, UrlRecord};
    use crate::services::UrlService;
    use crate::system::UiStateStore;

    struct OnePageApi;

    #[async_trait]
    impl UrlApi for OnePageApi {
        async fn create(&self, _request: &CreationRequest) -> Result<String> {
            Ok("new".to_string())
        }

        async fn list_page(&self, _page: usize, _size: usize) -> Result<Vec<UrlRecord>> {
            Ok(vec![UrlRecord::new("abc", "https://a.com", "1", "")])
        }

        async fn delete(&self, _shortened_url: &str) -> Result<()> {
            Ok(())
        }

        async fn resolve(&self, _shortened_url: &str) -> Result<String> {
            Ok("https://a.com".to_string())
        }

        fn name(&self) -> &'static str {
            "one-page"
        }
    }

    fn render(terminal: &mut Terminal<TestBackend>, app: &mut App) -> String {
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[tokio::test]
    async fn test_loading_is_drawn_while_request_is_queued() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(
            UrlService::new(Arc::new(OnePageApi), "http://short.test"),
            10,
            Duration::from_secs(3),
            UiStateStore::new(dir.path().join("state.toml")),
        );
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

        app.request_refresh();
        let screen = render(&mut terminal, &mut app);
        assert!(screen.contains("loading..."));

        app.run_pending().await;
        let screen = render(&mut terminal, &mut app);
        assert!(!screen.contains("loading..."));
        assert!(screen.contains("https://a.com"));
    }
}
