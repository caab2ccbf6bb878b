//! Client-side list helpers: text search and fixed-size paging.
//!
//! Page numbers are 1-based throughout.

use contracts::domain::a001_laundry_transaction::Transaction;

/// Number of rows shown per page.
pub const PAGE_SIZE: usize = 5;

/// Types that can be matched against a free-text search query
pub trait Searchable {
    /// `query` is passed exactly as typed; implementors decide on case folding.
    fn matches_query(&self, query: &str) -> bool;
}

impl Searchable for Transaction {
    /// Case-insensitive substring on the customer name, or a plain substring
    /// of the id as text.
    fn matches_query(&self, query: &str) -> bool {
        self.customer_name
            .to_lowercase()
            .contains(&query.to_lowercase())
            || self.id.to_string().contains(query)
    }
}

/// Returns references to every item matching `query`, in original order.
/// An empty query matches everything.
pub fn filter_list<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return items.iter().collect();
    }
    items.iter().filter(|item| item.matches_query(query)).collect()
}

/// Window `[(page-1)*page_size, page*page_size)` of `items`, clipped to the
/// available data. Page 0 or a page past the end yields an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = page.saturating_mul(page_size).min(items.len());
    &items[start..end]
}

/// "Next" stays enabled only while the current page is full.
pub fn can_go_next(current_slice_len: usize, page_size: usize) -> bool {
    current_slice_len >= page_size
}

pub fn can_go_prev(page: usize) -> bool {
    page > 1
}
