//! Page cursor with an estimated page count
//!
//! The list endpoint returns at most `page_size` rows and no total, so the
//! number of pages is guessed from the size of each fetched page.

/// 分页游标（页码从 0 开始）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub current_page: usize,
    pub estimated_total_pages: usize,
    pub page_size: usize,
}

impl PageCursor {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 0,
            estimated_total_pages: 1,
            page_size: page_size.max(1),
        }
    }

    /// Update the estimate after a successful fetch of `fetched` rows
    ///
    /// A short page is the last one; a full page means at least one more.
    pub fn record_fetch(&mut self, fetched: usize) {
        if fetched < self.page_size {
            self.estimated_total_pages = self.current_page + 1;
        } else {
            self.estimated_total_pages = self.estimated_total_pages.max(self.current_page + 2);
        }
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 0
    }

    pub fn has_next(&self) -> bool {
        self.current_page + 1 < self.estimated_total_pages
    }

    /// Move back one page; returns whether the page changed
    pub fn prev(&mut self) -> bool {
        if self.has_prev() {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Move forward one page, bounded by the estimate
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.current_page = 0;
    }

    /// 1-based page number for display
    pub fn display_page(&self) -> usize {
        self.current_page + 1
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new(10)
    }
}
