//! List panel logic: search, sort and page estimation
//!
//! Everything here is pure state; fetching lives in `services`.

mod pagination;
mod view;

pub use pagination::PageCursor;
pub use view::{
    SortKey, SortState, collate, filter_and_sort, matches_search, parse_click_count,
    parse_expiration,
};
