use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;

pub fn draw_delete_confirm_screen(frame: &mut Frame, app: &App, area: Rect) {
    let Some(record) = app.get_selected_record() else {
        return;
    };
    let palette = app.palette();

    let inner_area = Popup::new("Confirm Delete", popup::DELETE_CONFIRM, palette)
        .theme_color(palette.error)
        .margin(Margin::new(2, 2))
        .render(frame, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Delete this shortened URL?",
            Style::default().fg(palette.warning).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Short URL: ", Style::default().fg(palette.muted)),
            Span::styled(
                record.shortened_url.as_str(),
                Style::default().fg(palette.primary).bold(),
            ),
        ]),
        Line::from(vec![
            Span::styled("URL: ", Style::default().fg(palette.muted)),
            Span::styled(record.url.as_str(), Style::default().fg(palette.link)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "This action cannot be undone!",
            Style::default().fg(palette.error).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press [y] to delete, [n] to cancel",
            Style::default().fg(palette.muted),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, inner_area);
}
