//! Detail panel component for displaying selected URL information

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::ui::widgets::ExpiryIndicator;

/// Draw the detail panel showing information about the selected URL
pub fn draw_detail_panel(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let label = Style::default().fg(palette.muted);
    let block = Block::default()
        .title("Details")
        .title_style(Style::default().fg(palette.primary).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.muted));

    let mut lines = Vec::new();

    if let Some(record) = app.get_selected_record() {
        let expiry = ExpiryIndicator::new(&record.expiration_time);
        let clicks = if record.click_count.is_empty() {
            "0".to_string()
        } else {
            record.click_count.clone()
        };

        lines.push(Line::from(vec![
            Span::styled("Short URL: ", label),
            Span::styled(
                record.shortened_url.clone(),
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            app.service.share_link(&record.shortened_url),
            Style::default().fg(palette.link),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Original URL:", label)));
        lines.push(Line::from(Span::styled(
            record.url.clone(),
            Style::default().fg(palette.link),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Clicks:    ", label),
            Span::styled(
                clicks,
                Style::default()
                    .fg(palette.success)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Expires:   ", label),
            Span::styled(
                expiry.text(),
                Style::default().fg(expiry.status.color(palette)),
            ),
        ]));

        if let Some(resolved) = app
            .resolved
            .as_ref()
            .filter(|r| r.identifier == record.shortened_url)
        {
            lines.push(Line::from(vec![
                Span::styled("Redirects: ", label),
                Span::styled(resolved.target.clone(), Style::default().fg(palette.text)),
            ]));
        }
    } else {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("No URL selected", label)));
    }

    if let Some(link) = &app.last_shortened {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Last shortened",
            Style::default().fg(palette.success).bold(),
        )));
        lines.push(Line::from(Span::styled(
            link.short_url.clone(),
            Style::default().fg(palette.link),
        )));
        lines.push(Line::from(vec![
            Span::styled(" c ", Style::default().fg(palette.warning).bold()),
            Span::styled("Copy to clipboard", label),
        ]));
    }

    let alignment = if app.get_selected_record().is_some() || app.last_shortened.is_some() {
        Alignment::Left
    } else {
        Alignment::Center
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(alignment)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
