//! Client-side search and sort over the currently loaded page

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use strum::{EnumIter, IntoEnumIterator};

use crate::models::UrlRecord;

/// 排序列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, clap::ValueEnum)]
pub enum SortKey {
    #[default]
    #[value(name = "url")]
    OriginalUrl,
    #[value(name = "short")]
    ShortUrl,
    #[value(name = "clicks")]
    ClickCount,
    #[value(name = "expiration")]
    ExpirationTime,
}

impl SortKey {
    /// 循环切换到下一个排序列
    pub fn next(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let idx = all.iter().position(|k| *k == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::OriginalUrl => "Original URL",
            Self::ShortUrl => "Short URL",
            Self::ClickCount => "Click Count",
            Self::ExpirationTime => "Expiration",
        }
    }
}

/// Current sort selection
///
/// Selecting the active key flips the direction, selecting another key
/// switches to it ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::default(),
            ascending: true,
        }
    }
}

impl SortState {
    pub fn new(key: SortKey, ascending: bool) -> Self {
        Self { key, ascending }
    }

    pub fn select(&mut self, key: SortKey) {
        if key == self.key {
            self.ascending = !self.ascending;
        } else {
            self.key = key;
            self.ascending = true;
        }
    }

    pub fn arrow(&self) -> &'static str {
        if self.ascending { "↑" } else { "↓" }
    }
}

/// Case-insensitive substring match on the original or shortened URL
pub fn matches_search(record: &UrlRecord, term_lower: &str) -> bool {
    term_lower.is_empty()
        || record.url.to_lowercase().contains(term_lower)
        || record.shortened_url.to_lowercase().contains(term_lower)
}

/// Filter by `search` and order by `sort`
pub fn filter_and_sort<'a>(
    records: &'a [UrlRecord],
    search: &str,
    sort: SortState,
) -> Vec<&'a UrlRecord> {
    let term = search.to_lowercase();
    let mut visible: Vec<&UrlRecord> = records
        .iter()
        .filter(|r| matches_search(r, &term))
        .collect();

    visible.sort_by(|a, b| {
        let cmp = compare_by(a, b, sort.key);
        if sort.ascending { cmp } else { cmp.reverse() }
    });
    visible
}

fn compare_by(a: &UrlRecord, b: &UrlRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::OriginalUrl => collate(&a.url, &b.url),
        SortKey::ShortUrl => collate(&a.shortened_url, &b.shortened_url),
        SortKey::ClickCount => {
            parse_click_count(&a.click_count).cmp(&parse_click_count(&b.click_count))
        }
        SortKey::ExpirationTime => expiration_sort_value(&a.expiration_time)
            .cmp(&expiration_sort_value(&b.expiration_time)),
    }
}

/// Case-insensitive first, raw ordering for ties
pub fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Leading-integer parse; anything without digits counts as 0.
/// Digit runs beyond the `i64` range saturate to `i64::MAX` / `i64::MIN`.
pub fn parse_click_count(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first().copied() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let run = &digits[..end];
    if run.is_empty() {
        return 0;
    }
    let signed = if negative {
        format!("-{}", run)
    } else {
        run.to_string()
    };
    // 只剩溢出一种错误
    signed
        .parse::<i64>()
        .unwrap_or(if negative { i64::MIN } else { i64::MAX })
}

/// Milliseconds since epoch, or `None` when empty or unparseable
pub fn parse_expiration(raw: &str) -> Option<i64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

// 无过期时间视为无限远
fn expiration_sort_value(raw: &str) -> i64 {
    parse_expiration(raw).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(short: &str, url: &str, clicks: &str, exp: &str) -> UrlRecord {
        UrlRecord::new(short, url, clicks, exp)
    }

    #[test]
    fn test_sort_key_next_cycles() {
        assert_eq!(SortKey::OriginalUrl.next(), SortKey::ShortUrl);
        assert_eq!(SortKey::ShortUrl.next(), SortKey::ClickCount);
        assert_eq!(SortKey::ClickCount.next(), SortKey::ExpirationTime);
        assert_eq!(SortKey::ExpirationTime.next(), SortKey::OriginalUrl);
    }

    #[test]
    fn test_sort_state_select() {
        let mut state = SortState::default();
        state.select(SortKey::OriginalUrl);
        assert!(!state.ascending);
        state.select(SortKey::ClickCount);
        assert_eq!(state.key, SortKey::ClickCount);
        assert!(state.ascending);
    }

    #[test]
    fn test_parse_click_count() {
        assert_eq!(parse_click_count("42"), 42);
        assert_eq!(parse_click_count("x"), 0);
        assert_eq!(parse_click_count(""), 0);
        assert_eq!(parse_click_count("12abc"), 12);
        assert_eq!(parse_click_count("  -3"), -3);
        assert_eq!(parse_click_count("-"), 0);
    }

    #[test]
    fn test_parse_click_count_saturates() {
        assert_eq!(parse_click_count("99999999999999999999"), i64::MAX);
        assert_eq!(parse_click_count("-99999999999999999999"), i64::MIN);
        assert_eq!(parse_click_count("-9223372036854775808"), i64::MIN);
        assert_eq!(parse_click_count("9223372036854775807x"), i64::MAX);
    }

    #[test]
    fn test_parse_expiration_formats() {
        assert!(parse_expiration("2025-01-01T10:00:00Z").is_some());
        assert!(parse_expiration("2025-01-01T10:00:00.123").is_some());
        assert!(parse_expiration("2025-01-01").is_some());
        assert_eq!(parse_expiration("   "), None);
        assert_eq!(parse_expiration("soon"), None);
        assert_eq!(
            parse_expiration("2025-01-01T10:00:00Z"),
            parse_expiration("2025-01-01T10:00:00")
        );
    }

    #[test]
    fn test_clicks_non_numeric_sorts_as_zero() {
        let records = vec![rec("s1", "a.com", "5", ""), rec("s2", "b.com", "x", "")];
        let sorted = filter_and_sort(&records, "", SortState::new(SortKey::ClickCount, true));
        assert_eq!(sorted[0].url, "b.com");
        assert_eq!(sorted[1].url, "a.com");
    }

    #[test]
    fn test_huge_click_count_sorts_last() {
        let records = vec![
            rec("s1", "huge.com", "99999999999999999999", ""),
            rec("s2", "five.com", "5", ""),
        ];
        let sorted = filter_and_sort(&records, "", SortState::new(SortKey::ClickCount, true));
        assert_eq!(sorted[0].url, "five.com");
        assert_eq!(sorted[1].url, "huge.com");
    }

    #[test]
    fn test_collate_is_case_insensitive() {
        let records = vec![rec("s1", "b.com", "0", ""), rec("s2", "A.com", "0", "")];
        let sorted = filter_and_sort(&records, "", SortState::default());
        assert_eq!(sorted[0].url, "A.com");
    }

    #[test]
    fn test_search_matches_short_url() {
        let records = vec![rec("Promo", "x.com", "0", ""), rec("other", "y.com", "0", "")];
        let found = filter_and_sort(&records, "PROM", SortState::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].shortened_url, "Promo");
    }
}
