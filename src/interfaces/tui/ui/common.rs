use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::services::MessageLevel;

/// Draw title bar with version, backend and page info
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let mut spans = vec![
        Span::styled("linkdeck", Style::default().fg(palette.primary).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(palette.muted),
        ),
        Span::styled("| ", Style::default().fg(palette.muted)),
        Span::styled(
            format!(
                "Page {}/{}",
                app.cursor.display_page(),
                app.cursor.estimated_total_pages
            ),
            Style::default().fg(palette.warning),
        ),
        Span::styled(" | ", Style::default().fg(palette.muted)),
        Span::styled(
            format!("{} theme", app.theme.as_str()),
            Style::default().fg(palette.muted),
        ),
    ];
    if app.is_loading() {
        spans.push(Span::styled(" | loading...", Style::default().fg(palette.warning)));
    }

    let title = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.primary)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar with the current transient message
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let (status_text, status_style) = match &app.message {
        Some(msg) => match msg.notice.level {
            MessageLevel::Error => (
                format!("[ERROR] {}", msg.notice.text),
                Style::default().fg(Color::White).bg(palette.error).bold(),
            ),
            MessageLevel::Success => (
                format!("[SUCCESS] {}", msg.notice.text),
                Style::default().fg(Color::Black).bg(palette.success).bold(),
            ),
            MessageLevel::Info => (
                format!("[INFO] {}", msg.notice.text),
                Style::default().fg(palette.primary).bold(),
            ),
        },
        None => ("Ready".to_string(), Style::default().fg(palette.primary)),
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let shortcuts = if app.inline_search_mode {
        vec![
            ("Enter", "Apply", palette.success),
            ("Esc", "Clear", palette.error),
        ]
    } else {
        match app.current_screen {
            CurrentScreen::Main => vec![
                ("Up/Down", "Navigate", palette.primary),
                ("n/p", "Page", palette.primary),
                ("/", "Search", palette.primary),
                ("s/S", "Sort", palette.primary),
                ("a", "Shorten", palette.success),
                ("y", "Copy", palette.primary),
                ("d", "Delete", palette.error),
                ("?", "Help", palette.link),
                ("q", "Quit", palette.warning),
            ],
            CurrentScreen::Shorten => vec![
                ("Tab", "Switch Field", palette.primary),
                ("Enter", "Shorten", palette.success),
                ("Esc", "Cancel", palette.error),
            ],
            CurrentScreen::DeleteConfirm | CurrentScreen::Exiting => {
                vec![("y", "Yes", palette.success), ("n", "No", palette.error)]
            }
            CurrentScreen::Help => vec![("q/Esc", "Close", palette.error)],
        }
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(palette.muted)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(palette.text),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
