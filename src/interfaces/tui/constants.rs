//! TUI 常量定义
//!
//! 集中管理所有 UI 相关的常量，避免魔法数字分散在代码各处

/// URL 显示截断长度
pub const URL_TRUNCATE_LENGTH: usize = 48;

/// 短链显示截断长度
pub const SHORT_URL_TRUNCATE_LENGTH: usize = 20;

/// 翻页滚动步长
pub const PAGE_SCROLL_STEP: usize = 10;

/// 即将过期阈值（小时）
pub const EXPIRING_SOON_HOURS: i64 = 24;

/// 弹窗尺寸配置
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    /// 宽度百分比 (0-100)
    pub width: u16,
    /// 高度百分比 (0-100)
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 各弹窗的尺寸配置
pub mod popup {
    use super::PopupSize;

    /// 缩短链接表单
    pub const SHORTEN: PopupSize = PopupSize::new(75, 65);
    /// 帮助弹窗
    pub const HELP: PopupSize = PopupSize::new(80, 85);
    /// 删除确认弹窗
    pub const DELETE_CONFIRM: PopupSize = PopupSize::new(65, 45);
    /// 退出确认
    pub const EXITING: PopupSize = PopupSize::new(50, 25);
}

/// 颜色主题
pub mod colors {
    use ratatui::style::Color;

    use crate::system::Theme;

    /// One theme's colours
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Palette {
        /// 背景色
        pub background: Color,
        /// 正文
        pub text: Color,
        /// 主色调
        pub primary: Color,
        /// 链接色
        pub link: Color,
        /// 成功色
        pub success: Color,
        /// 警告色
        pub warning: Color,
        /// 错误色
        pub error: Color,
        /// 次要文本色
        pub muted: Color,
        /// 高亮背景色
        pub highlight_bg: Color,
        /// 高亮前景色
        pub highlight_fg: Color,
        /// 选中行背景
        pub selection_bg: Color,
    }

    pub const DARK: Palette = Palette {
        background: Color::Reset,
        text: Color::White,
        primary: Color::Cyan,
        link: Color::Blue,
        success: Color::Green,
        warning: Color::Yellow,
        error: Color::Red,
        muted: Color::DarkGray,
        highlight_bg: Color::Yellow,
        highlight_fg: Color::Black,
        selection_bg: Color::DarkGray,
    };

    pub const LIGHT: Palette = Palette {
        background: Color::White,
        text: Color::Black,
        primary: Color::Blue,
        link: Color::Indexed(25),
        success: Color::Indexed(28),
        warning: Color::Indexed(130),
        error: Color::Indexed(160),
        muted: Color::Gray,
        highlight_bg: Color::Indexed(153),
        highlight_fg: Color::Black,
        selection_bg: Color::Indexed(254),
    };

    pub fn palette(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }
}
