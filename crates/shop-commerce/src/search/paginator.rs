//! Forward-only pagination over ranked results.

use crate::error::CommerceError;
use serde::Serialize;

/// Results shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Offset of the first item on this page.
    pub cursor: usize,
    /// Offset where the next page starts.
    pub next_cursor: usize,
    /// Whether a further page exists.
    pub has_more: bool,
}

impl<T> Page<T> {
    /// True for an empty first page: nothing matched at all, as opposed to
    /// having run past the last page.
    pub fn is_no_match(&self) -> bool {
        self.cursor == 0 && self.items.is_empty()
    }
}

/// Return the page of `results` starting at `cursor`.
///
/// A cursor at or past the end yields an empty page with `has_more` false.
pub fn paginate<T: Clone>(
    results: &[T],
    page_size: usize,
    cursor: usize,
) -> Result<Page<T>, CommerceError> {
    if page_size == 0 {
        return Err(CommerceError::ValidationError(
            "page size must be at least 1".into(),
        ));
    }

    let start = cursor.min(results.len());
    let end = start.saturating_add(page_size).min(results.len());

    Ok(Page {
        items: results[start..end].to_vec(),
        cursor,
        next_cursor: end,
        has_more: end < results.len(),
    })
}

/// Yields successive pages until the results run out.
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    results: Vec<T>,
    page_size: usize,
    cursor: usize,
    started: bool,
}

impl<T: Clone> Paginator<T> {
    pub fn new(results: Vec<T>, page_size: usize) -> Result<Self, CommerceError> {
        if page_size == 0 {
            return Err(CommerceError::ValidationError(
                "page size must be at least 1".into(),
            ));
        }
        Ok(Self {
            results,
            page_size,
            cursor: 0,
            started: false,
        })
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Next page, or `None` once every result has been shown.
    ///
    /// The first call always returns a page, empty when there are no results,
    /// so callers can tell "no match" from "no more".
    pub fn next_page(&mut self) -> Option<Page<T>> {
        if self.started && self.cursor >= self.results.len() {
            return None;
        }
        self.started = true;

        let page = paginate(&self.results, self.page_size, self.cursor).ok()?;
        self.cursor = page.next_cursor;
        Some(page)
    }
}

impl<T: Clone> Iterator for Paginator<T> {
    type Item = Page<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_page()
    }
}
