use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::colors::Palette;
use crate::interfaces::tui::constants::popup;

fn section(title: &'static str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(palette.warning)
            .add_modifier(Modifier::BOLD),
    ))
}

fn binding(
    keys: &'static str,
    desc: &'static str,
    color: Color,
    palette: &Palette,
) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<18}", keys), Style::default().fg(color)),
        Span::styled(desc, Style::default().fg(palette.text)),
    ])
}

pub fn draw_help_screen(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let inner_area =
        Popup::new("Help - Keyboard Shortcuts", popup::HELP, palette).render(frame, area);

    let p = palette;
    let help_text = vec![
        section("NAVIGATION", p),
        binding("Up/Down, j/k", "Move selection", p.primary, p),
        binding("Home, g", "Jump to top", p.primary, p),
        binding("End, G", "Jump to bottom", p.primary, p),
        binding("PageUp/PageDown", "Scroll 10 rows", p.primary, p),
        binding("n, ], Right", "Next page", p.primary, p),
        binding("p, [, Left", "Previous page", p.primary, p),
        binding("r, F5", "Refresh current page", p.primary, p),
        Line::from(""),
        section("ACTIONS", p),
        binding("a", "Shorten a URL", p.success, p),
        binding("d, Delete", "Delete selected URL", p.error, p),
        binding("y", "Copy selected short URL", p.primary, p),
        binding("c, Y", "Copy last shortened URL", p.primary, p),
        binding("Enter, o", "Resolve redirect target", p.primary, p),
        Line::from(""),
        section("SEARCH & SORT (current page)", p),
        binding("/", "Search original and short URLs", p.primary, p),
        binding("Esc", "Clear search", p.primary, p),
        binding("s", "Next sort column", p.primary, p),
        binding("S", "Reverse sort direction", p.primary, p),
        Line::from(""),
        section("OTHER", p),
        binding("t", "Toggle light/dark theme", p.primary, p),
        binding("?, h", "This help", p.primary, p),
        binding("q", "Quit", p.warning, p),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Backend: {} ({})",
                app.service.api_name(),
                app.service.frontend_base()
            ),
            Style::default().fg(p.muted),
        )),
    ];

    let paragraph = Paragraph::new(help_text).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner_area);
}
