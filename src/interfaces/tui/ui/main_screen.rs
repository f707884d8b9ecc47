use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::colors::Palette;
use crate::interfaces::tui::constants::{SHORT_URL_TRUNCATE_LENGTH, URL_TRUNCATE_LENGTH};
use crate::interfaces::tui::ui::widgets::ExpiryIndicator;
use crate::listing::SortKey;
use crate::utils::truncate_display;

/// Format a header cell with sort indicator
fn format_header(name: &str, key: SortKey, app: &App, palette: &Palette) -> Span<'static> {
    let style = Style::default()
        .fg(palette.warning)
        .add_modifier(Modifier::BOLD);
    if app.sort.key == key {
        Span::styled(format!("{} {}", name, app.sort.arrow()), style)
    } else {
        Span::styled(name.to_string(), style)
    }
}

fn draw_empty_state(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let hint = Style::default().fg(palette.muted);
    let key = |k: &'static str| {
        Span::styled(
            k,
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        )
    };

    let (headline, help_line, title) = if app.is_searching() {
        (
            "No URLs match your search",
            Line::from(vec![
                Span::styled("Press ", hint),
                key("[Esc]"),
                Span::styled(" to clear search", hint),
            ]),
            format!("Search Results (\"{}\")", app.search_input),
        )
    } else if app.cursor.has_prev() {
        (
            "This page is empty",
            Line::from(vec![
                Span::styled("Press ", hint),
                key("[p]"),
                Span::styled(" for the previous page", hint),
            ]),
            format!("Shortened URLs (page {})", app.cursor.display_page()),
        )
    } else {
        (
            "No shortened URLs yet",
            Line::from(vec![
                Span::styled("Press ", hint),
                key("[a]"),
                Span::styled(" to shorten your first URL", hint),
            ]),
            "Shortened URLs".to_string(),
        )
    };

    let text = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        help_line,
    ];

    let empty = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.muted))
                .title(title)
                .title_style(Style::default().fg(palette.primary)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(empty, area);
}

pub fn draw_main_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = app.palette();
    let total_on_page = app.display_count();

    if total_on_page == 0 {
        draw_empty_state(frame, app, area);
        return;
    }

    // 计算可见窗口（border 2行 + header 1行 + header margin 1行 = 4行开销）
    let visible_height = (area.height as usize).saturating_sub(4);
    app.last_visible_height = visible_height.max(1);

    // 确保 scroll_offset 合法
    let offset = app.scroll_offset.min(total_on_page.saturating_sub(1));
    app.scroll_offset = offset;
    let end = (offset + app.last_visible_height).min(total_on_page);

    let header = Row::new(vec![
        format_header("Short URL", SortKey::ShortUrl, app, palette),
        format_header("Original URL", SortKey::OriginalUrl, app, palette),
        format_header("Clicks", SortKey::ClickCount, app, palette),
        format_header("Expires", SortKey::ExpirationTime, app, palette),
    ])
    .bottom_margin(1);

    // 虚拟渲染：只构建可见行的 Row
    let records = app.display_records();
    let rows: Vec<Row> = records[offset..end]
        .iter()
        .map(|record| {
            let expiry = ExpiryIndicator::new(&record.expiration_time);
            Row::new(vec![
                Span::styled(
                    truncate_display(&record.shortened_url, SHORT_URL_TRUNCATE_LENGTH),
                    Style::default()
                        .fg(palette.primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    truncate_display(&record.url, URL_TRUNCATE_LENGTH),
                    Style::default().fg(palette.link),
                ),
                Span::styled(
                    record.click_count.clone(),
                    Style::default().fg(palette.success),
                ),
                Span::styled(
                    expiry.status.text(),
                    Style::default().fg(expiry.status.color(palette)),
                ),
            ])
        })
        .collect();

    let mut title_parts = Vec::new();
    if app.is_searching() {
        title_parts.push(format!(
            "Search: \"{}\" ({} found)",
            app.search_input, total_on_page
        ));
    } else {
        title_parts.push(format!("Shortened URLs ({})", total_on_page));
    }
    title_parts.push(format!("Sort: {}", app.sort_label()));
    let title = title_parts.join(" | ");

    let table = Table::new(
        rows,
        [
            Constraint::Length(SHORT_URL_TRUNCATE_LENGTH as u16 + 1),
            Constraint::Min(20),
            Constraint::Length(8),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            ),
    )
    .row_highlight_style(
        Style::default()
            .bg(palette.selection_bg)
            .fg(palette.text),
    )
    .highlight_symbol("▶ ")
    .column_spacing(1);

    // 虚拟 TableState：selected 调整为相对于可见窗口的偏移
    let mut virtual_state = TableState::default();
    if app.selected_index >= offset && app.selected_index < end {
        virtual_state.select(Some(app.selected_index - offset));
    }

    frame.render_stateful_widget(table, area, &mut virtual_state);
}
