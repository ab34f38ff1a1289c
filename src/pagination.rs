// src/pagination.rs
//! Client-side paging over an already-fetched result set.
//!
//! Pagination never goes back to the backend: one search fetches up to the
//! configured limit and page changes are pure slices over that array.

use crate::types::PaginationInfo;

/// Number of pages needed for `total_results` items, zero when empty.
pub fn page_count(total_results: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_results.div_ceil(page_size)
}

/// The sub-slice visible on a 1-based `page`; empty outside `[1, page_count]`.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 || page > page_count(items.len(), page_size) {
        return &[];
    }
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// 1-based inclusive display range for the pagination strip, e.g. `21 - 40`.
pub fn result_range(page: usize, page_size: usize, total_results: usize) -> (usize, usize) {
    if total_results == 0 || page == 0 {
        return (0, 0);
    }
    let start = (page - 1) * page_size + 1;
    let end = (page * page_size).min(total_results);
    (start, end)
}

impl PaginationInfo {
    /// Recompute pagination from the in-memory result set.
    pub fn derive(total_results: usize, current_page: usize, page_size: usize) -> Self {
        Self {
            total: page_count(total_results, page_size),
            current_page,
            page_size,
            total_results,
        }
    }
}
