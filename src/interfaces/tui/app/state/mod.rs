//! App state definition and basic state management
//!
//! 包含核心 App 结构和基础状态管理

mod form_state;

pub use form_state::{EditingField, FormState};

use std::time::{Duration, Instant};

use crate::activity::ActionLog;
use crate::interfaces::tui::constants::colors::{self, Palette};
use crate::listing::{PageCursor, SortState, filter_and_sort};
use crate::models::{CreationRequest, ShortenedLink, UrlRecord};
use crate::services::{Notice, UrlService};
use crate::system::{Theme, UiStateStore};

use super::clipboard::{ClipboardSink, SystemClipboard};

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Main,
    Shorten,
    DeleteConfirm,
    Help,
    Exiting,
}

/// A message shown in the status bar until it expires
#[derive(Debug, Clone)]
pub struct TransientMessage {
    pub notice: Notice,
    pub shown_at: Instant,
}

/// Last redirect lookup, shown in the detail panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub identifier: String,
    pub target: String,
}

/// A backend call waiting for the next loop iteration
///
/// Queued by key handlers and run after a frame showing the loading state
/// has been drawn. At most one is queued at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingRequest {
    Refresh,
    Shorten(CreationRequest),
    Delete(String),
    Resolve(String),
}

pub struct App {
    pub service: UrlService,
    /// 当前页的记录（服务端顺序）
    pub records: Vec<UrlRecord>,
    pub current_screen: CurrentScreen,

    // Shorten form
    pub form: FormState,
    pub last_shortened: Option<ShortenedLink>,

    // Search & sort (local to the loaded page)
    pub search_input: String,
    pub inline_search_mode: bool,
    pub sort: SortState,

    // Pagination
    pub cursor: PageCursor,

    // UI state
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub last_visible_height: usize,
    pub message: Option<TransientMessage>,
    pub message_ttl: Duration,
    pub action_log: ActionLog,
    pub resolved: Option<ResolvedTarget>,
    pub pending: Option<PendingRequest>,

    // Theme
    pub theme: Theme,
    pub state_store: UiStateStore,

    pub clipboard: Box<dyn ClipboardSink>,
}

impl App {
    pub fn new(
        service: UrlService,
        page_size: usize,
        message_ttl: Duration,
        state_store: UiStateStore,
    ) -> Self {
        let theme = state_store.load().theme;
        App {
            service,
            records: Vec::new(),
            current_screen: CurrentScreen::Main,
            form: FormState::new(),
            last_shortened: None,
            search_input: String::new(),
            inline_search_mode: false,
            sort: SortState::default(),
            cursor: PageCursor::new(page_size),
            selected_index: 0,
            scroll_offset: 0,
            last_visible_height: 1,
            message: None,
            message_ttl,
            action_log: ActionLog::new(),
            resolved: None,
            pending: None,
            theme,
            state_store,
            clipboard: Box::new(SystemClipboard::new()),
        }
    }

    /// 从全局配置创建
    pub fn from_config() -> Self {
        let config = crate::config::get_config();
        Self::new(
            UrlService::from_config(),
            config.list.page_size,
            Duration::from_millis(config.ui.message_ttl_ms),
            UiStateStore::from_config(),
        )
    }

    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardSink>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn palette(&self) -> &'static Palette {
        colors::palette(self.theme)
    }

    /// Records after search and sort, in display order
    pub fn display_records(&self) -> Vec<&UrlRecord> {
        filter_and_sort(&self.records, &self.search_input, self.sort)
    }

    pub fn display_count(&self) -> usize {
        self.display_records().len()
    }

    pub fn get_selected_record(&self) -> Option<&UrlRecord> {
        self.display_records().get(self.selected_index).copied()
    }

    /// A request is queued or running
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_searching(&self) -> bool {
        !self.search_input.is_empty()
    }

    // ============ Transient messages ============

    /// Show a message, replacing any older one and restarting its timer
    pub fn show_notice(&mut self, notice: Notice) {
        self.show_notice_at(notice, Instant::now());
    }

    pub fn show_notice_at(&mut self, notice: Notice, now: Instant) {
        self.message = Some(TransientMessage {
            notice,
            shown_at: now,
        });
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.show_notice(Notice::success(message));
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.show_notice(Notice::error(message));
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.show_notice(Notice::info(message));
    }

    /// Drop the message once it has been visible for `message_ttl`
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(msg) = &self.message
            && now.saturating_duration_since(msg.shown_at) >= self.message_ttl
        {
            self.message = None;
        }
    }

    // ============ Search & sort ============

    /// Keep the selection inside the visible rows
    pub fn clamp_selection(&mut self) {
        let count = self.display_count();
        if self.selected_index >= count {
            self.selected_index = count.saturating_sub(1);
        }
        if self.scroll_offset > self.selected_index {
            self.scroll_offset = self.selected_index;
        }
    }

    pub fn clear_search(&mut self) {
        self.search_input.clear();
        self.inline_search_mode = false;
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_input.push(c);
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn pop_search_char(&mut self) {
        self.search_input.pop();
        self.clamp_selection();
    }

    /// Cycle through sort columns, each starting ascending
    pub fn cycle_sort_column(&mut self) {
        self.sort.select(self.sort.key.next());
        self.clamp_selection();
    }

    /// Toggle sort direction
    pub fn toggle_sort_direction(&mut self) {
        self.sort.select(self.sort.key);
    }

    pub fn sort_label(&self) -> String {
        format!("{} {}", self.sort.key.label(), self.sort.arrow())
    }

    // ============ Theme ============

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.state_store.save(&crate::system::UiState { theme: self.theme });
        self.set_info(format!("Switched to {} theme", self.theme.as_str()));
    }
}
