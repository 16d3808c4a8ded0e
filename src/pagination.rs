//! Client-side pagination over a fetched collection.
//!
//! Pages are 1-based. An empty collection has zero pages, and the page
//! counter stays at 1 so navigation is simply disabled.

/// Number of pages needed for `len` items, `ceil(len / page_size)`.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Items on `page`: offsets `(page - 1) * page_size` up to `page * page_size`, clamped to the slice.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(items.len());
    let end = page.saturating_mul(page_size).min(items.len());
    &items[start..end]
}

/// Page after `page`, or `page` itself when already on the last one.
pub fn next_page(page: usize, total_pages: usize) -> usize {
    if page < total_pages {
        page + 1
    } else {
        page
    }
}

/// Page before `page`, never below 1.
pub fn prev_page(page: usize) -> usize {
    if page > 1 {
        page - 1
    } else {
        page
    }
}
