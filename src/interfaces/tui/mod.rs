//! Terminal User Interface (TUI) module
//!
//! Provides an interactive terminal interface for browsing and managing
//! shortened URLs

use std::io;
use std::time::{Duration, Instant};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{error, info};

pub mod app;
pub mod constants;
mod event_handler;
mod input_handler;
mod ui;

pub use event_handler::handle_key_event;

use app::App;
use ui::ui;

/// Run the TUI application
pub async fn run_tui() -> Result<(), Box<dyn std::error::Error>> {
    let tick_rate = Duration::from_millis(crate::config::get_config().ui.tick_rate_ms.max(10));

    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // Create app and load the first page
    let mut app = App::from_config();
    info!("TUI started against {}", app.service.api_name());
    app.request_refresh();

    let res = run_app(&mut terminal, &mut app, tick_rate).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("TUI loop failed: {}", err);
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Main application loop
///
/// Keys are handled one at a time. A request queued by a key runs right
/// after the frame showing it as loading, and finishes before the next key
/// is read.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    app: &mut App,
    tick_rate: Duration,
) -> io::Result<()> {
    loop {
        // Render UI
        terminal.draw(|f| ui(f, app))?;

        if app.is_loading() {
            app.run_pending().await;
            continue;
        }

        // Handle events
        if event::poll(tick_rate)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && handle_key_event(app, key.code)
        {
            info!("TUI exiting");
            return Ok(());
        }

        // 过期提示消息
        app.on_tick(Instant::now());
    }
}
