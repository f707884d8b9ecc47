//! Search, sort and page-estimation behaviour of the list panel

use linkdeck::activity::{ACTION_LOG_CAPACITY, ActionLog};
use linkdeck::listing::{PageCursor, SortKey, SortState, filter_and_sort};
use linkdeck::models::UrlRecord;

fn rec(short: &str, url: &str, clicks: &str, exp: &str) -> UrlRecord {
    UrlRecord::new(short, url, clicks, exp)
}

fn sample() -> Vec<UrlRecord> {
    vec![
        rec("gh", "https://GitHub.com/rust-lang", "17", "2025-03-01T00:00:00Z"),
        rec("docs", "https://docs.rs", "3", ""),
        rec("Blog", "https://blog.example.com", "n/a", "2025-01-15T08:30:00"),
        rec("news", "https://news.ycombinator.com", "250", "garbage"),
    ]
}

fn shorts(records: &[&UrlRecord]) -> Vec<String> {
    records.iter().map(|r| r.shortened_url.clone()).collect()
}

// =============================================================================
// Filtering
// =============================================================================

#[test]
fn test_empty_search_keeps_everything() {
    let records = sample();
    let visible = filter_and_sort(&records, "", SortState::default());
    assert_eq!(visible.len(), records.len());
}

#[test]
fn test_search_is_case_insensitive_on_both_fields() {
    let records = sample();

    let by_url = filter_and_sort(&records, "github", SortState::default());
    assert_eq!(shorts(&by_url), vec!["gh"]);

    let by_short = filter_and_sort(&records, "BLOG", SortState::default());
    assert_eq!(shorts(&by_short), vec!["Blog"]);
}

#[test]
fn test_search_result_is_subset_and_misses_nothing() {
    let records = sample();
    for term in ["s", "HTTPS", "o", "zzz", "rs"] {
        let visible = filter_and_sort(&records, term, SortState::default());
        let lower = term.to_lowercase();
        for record in &records {
            let should_match = record.url.to_lowercase().contains(&lower)
                || record.shortened_url.to_lowercase().contains(&lower);
            let shown = visible.iter().any(|r| r.shortened_url == record.shortened_url);
            assert_eq!(should_match, shown, "term {:?} record {:?}", term, record);
        }
    }
}

// =============================================================================
// Sorting
// =============================================================================

#[test]
fn test_default_sort_is_original_url_ascending() {
    let records = sample();
    let visible = filter_and_sort(&records, "", SortState::default());
    assert_eq!(shorts(&visible), vec!["Blog", "docs", "gh", "news"]);
}

#[test]
fn test_click_sort_treats_non_numeric_as_zero() {
    let records = vec![
        rec("a", "a.com", "5", ""),
        rec("b", "b.com", "x", ""),
    ];
    let visible = filter_and_sort(&records, "", SortState::new(SortKey::ClickCount, true));
    assert_eq!(shorts(&visible), vec!["b", "a"]);
}

#[test]
fn test_expiration_sort_places_missing_last_then_first() {
    let records = sample();

    let asc = filter_and_sort(&records, "", SortState::new(SortKey::ExpirationTime, true));
    let asc = shorts(&asc);
    assert_eq!(&asc[..2], &["Blog".to_string(), "gh".to_string()]);
    assert!(asc[2..].contains(&"docs".to_string()));
    assert!(asc[2..].contains(&"news".to_string()));

    let desc = filter_and_sort(&records, "", SortState::new(SortKey::ExpirationTime, false));
    let desc = shorts(&desc);
    assert!(desc[..2].contains(&"docs".to_string()));
    assert!(desc[..2].contains(&"news".to_string()));
    assert_eq!(&desc[2..], &["gh".to_string(), "Blog".to_string()]);
}

#[test]
fn test_toggling_same_key_twice_restores_initial_order() {
    let records = sample();
    let initial = shorts(&filter_and_sort(&records, "", SortState::default()));

    let mut state = SortState::default();
    state.select(state.key);
    assert!(!state.ascending);
    let reversed = shorts(&filter_and_sort(&records, "", state));
    assert_ne!(initial, reversed);

    state.select(state.key);
    assert_eq!(initial, shorts(&filter_and_sort(&records, "", state)));
}

#[test]
fn test_short_url_sort_descending() {
    let records = sample();
    let visible = filter_and_sort(&records, "", SortState::new(SortKey::ShortUrl, false));
    assert_eq!(shorts(&visible), vec!["news", "gh", "docs", "Blog"]);
}

// =============================================================================
// Page estimation
// =============================================================================

#[test]
fn test_short_page_marks_last_page() {
    let mut cursor = PageCursor::new(10);
    cursor.current_page = 3;
    cursor.estimated_total_pages = 6;
    cursor.record_fetch(4);
    assert_eq!(cursor.estimated_total_pages, 4);
    assert!(!cursor.has_next());
}

#[test]
fn test_full_page_grows_estimate() {
    let mut cursor = PageCursor::new(10);
    cursor.record_fetch(10);
    assert_eq!(cursor.estimated_total_pages, 2);
    assert!(cursor.next());
    cursor.record_fetch(10);
    assert!(cursor.estimated_total_pages >= 3);
}

#[test]
fn test_navigation_is_bounded() {
    let mut cursor = PageCursor::new(5);
    assert!(!cursor.prev());
    cursor.record_fetch(2);
    assert!(!cursor.next());
    assert_eq!(cursor.current_page, 0);
    assert_eq!(cursor.display_page(), 1);
}

// =============================================================================
// Action log
// =============================================================================

#[test]
fn test_action_log_keeps_five_newest_first() {
    let mut log = ActionLog::new();
    for i in 0..8 {
        log.log(format!("action {}", i));
    }
    assert_eq!(log.len(), ACTION_LOG_CAPACITY);
    let messages: Vec<&str> = log.entries().map(|e| e.message.as_str()).collect();
    assert_eq!(
        messages,
        vec!["action 7", "action 6", "action 5", "action 4", "action 3"]
    );
}
