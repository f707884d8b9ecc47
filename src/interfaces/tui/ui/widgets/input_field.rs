//! 通用输入框组件
//!
//! 用于表单中的文本输入，支持：
//! - 激活状态高亮
//! - 验证错误显示
//! - 字符计数

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors::Palette;

/// 输入框组件
///
/// ```rust,ignore
/// InputField::new("Long URL", &app.form.url, palette)
///     .active(true)
///     .error(app.form.get_error(EditingField::Url))
///     .required()
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    title: &'a str,
    value: &'a str,
    is_active: bool,
    error: Option<&'a str>,
    /// 空值时显示在标题里的提示
    placeholder: Option<&'a str>,
    required: bool,
    palette: &'a Palette,
}

impl<'a> InputField<'a> {
    pub fn new(title: &'a str, value: &'a str, palette: &'a Palette) -> Self {
        Self {
            title,
            value,
            is_active: false,
            error: None,
            placeholder: None,
            required: false,
            palette,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// 获取显示的标题
    fn display_title(&self) -> String {
        let mut title = self.title.to_string();

        if self.required {
            title.push_str(" *");
        }

        if self.value.is_empty() {
            if let Some(placeholder) = self.placeholder {
                title = format!("{} ({})", title, placeholder);
            }
        } else {
            title = format!("{} ({} chars)", title, self.value.chars().count());
        }

        title
    }

    fn border_style(&self) -> Style {
        if self.error.is_some() && !self.is_active {
            Style::default().fg(self.palette.error)
        } else if self.is_active {
            Style::default()
                .fg(self.palette.highlight_fg)
                .bg(self.palette.highlight_bg)
                .bold()
        } else {
            Style::default().fg(self.palette.text)
        }
    }

    /// 渲染输入框，`area` 高度应为 4（输入框 3 行 + 错误 1 行）
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        let input = Paragraph::new(self.value)
            .style(Style::default().fg(self.palette.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(self.display_title())
                    .border_style(self.border_style()),
            );
        frame.render_widget(input, chunks[0]);

        if let Some(error) = self.error {
            let error_text = Paragraph::new(error).style(Style::default().fg(self.palette.error));
            frame.render_widget(error_text, chunks[1]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::tui::constants::colors::DARK;

    #[test]
    fn test_input_field_title() {
        let field = InputField::new("Alias", "promo", &DARK);
        assert_eq!(field.display_title(), "Alias (5 chars)");

        let field = InputField::new("URL", "", &DARK).required();
        assert_eq!(field.display_title(), "URL *");

        let field = InputField::new("TTL", "", &DARK).placeholder("empty = never");
        assert_eq!(field.display_title(), "TTL (empty = never)");
    }
}
