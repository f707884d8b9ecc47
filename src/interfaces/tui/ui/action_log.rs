//! Recent actions panel

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::App;

pub fn draw_action_log(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let block = Block::default()
        .title("Recent Actions")
        .title_style(Style::default().fg(palette.primary).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.muted));

    let lines: Vec<Line> = if app.action_log.is_empty() {
        vec![Line::from(Span::styled(
            "Nothing yet",
            Style::default().fg(palette.muted),
        ))]
    } else {
        app.action_log
            .entries()
            .map(|entry| {
                Line::from(vec![
                    Span::styled(
                        format!("{} ", entry.timestamp),
                        Style::default().fg(palette.muted),
                    ),
                    Span::styled(entry.message.clone(), Style::default().fg(palette.text)),
                ])
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
