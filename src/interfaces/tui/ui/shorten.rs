use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::{InputField, Popup};
use crate::interfaces::tui::app::{App, EditingField};
use crate::interfaces::tui::constants::popup;

pub fn draw_shorten_screen(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let inner_area = Popup::new("Shorten URL", popup::SHORTEN, palette)
        .theme_color(palette.success)
        .render(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // URL
            Constraint::Length(4), // TTL
            Constraint::Length(4), // Alias
            Constraint::Min(1),    // Hint
        ])
        .split(inner_area);

    let form = &app.form;
    let editing = form.currently_editing;

    InputField::new(EditingField::Url.display_title(), &form.url, palette)
        .active(editing == Some(EditingField::Url))
        .error(form.get_error(EditingField::Url))
        .required()
        .render(frame, chunks[0]);

    InputField::new(EditingField::Ttl.display_title(), &form.ttl, palette)
        .active(editing == Some(EditingField::Ttl))
        .error(form.get_error(EditingField::Ttl))
        .placeholder("empty = never")
        .render(frame, chunks[1]);

    InputField::new(EditingField::Alias.display_title(), &form.alias, palette)
        .active(editing == Some(EditingField::Alias))
        .error(form.get_error(EditingField::Alias))
        .placeholder("empty = random")
        .render(frame, chunks[2]);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Links are shared as ", Style::default().fg(palette.muted)),
        Span::styled(
            app.service.share_link("<id>"),
            Style::default().fg(palette.link),
        ),
    ]));
    frame.render_widget(hint, chunks[3]);
}
