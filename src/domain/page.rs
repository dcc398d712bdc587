//! Paging types: the user's browsing intent and derived pagination metadata.
//!
//! [`PageQuery`] is an immutable snapshot of what the user is currently asking
//! for (page number plus search text); every change produces a new snapshot.
//! [`PaginationInfo`] is derived exclusively from the most recent successful
//! list response and is never inferred independently.

use serde::{Deserialize, Serialize};

/// The tuple of current page number and search text driving what is fetched.
///
/// Page numbers are always at least 1; constructors clamp invalid input rather
/// than rejecting it. Snapshots are value types: mutate by replacing, never in
/// place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageQuery {
    page: u32,
    query: String,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(1, String::new())
    }
}

impl PageQuery {
    /// Creates a page query, clamping `page` to a minimum of 1.
    #[must_use]
    pub fn new(page: u32, query: impl Into<String>) -> Self {
        Self {
            page: page.max(1),
            query: query.into(),
        }
    }

    /// The current page number (always >= 1).
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// The current search text, possibly empty.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns a new snapshot on a different page with the same query.
    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self::new(page, self.query.clone())
    }

    /// Returns a new snapshot with a different query.
    ///
    /// A query change always resets the page to 1: results for the old page
    /// number are meaningless under a new filter.
    #[must_use]
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self::new(1, query)
    }
}

/// Pagination metadata derived from the most recent successful fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    /// Total number of matching records across all pages.
    pub total_count: u32,
    /// Total number of pages for the current filter.
    pub total_pages: u32,
    /// Whether a next page exists.
    pub has_next: bool,
    /// Whether a previous page exists.
    pub has_prev: bool,
}

impl PaginationInfo {
    /// The all-zero metadata used after a failed fetch.
    #[must_use]
    pub const fn zeroed() -> Self {
        Self {
            total_count: 0,
            total_pages: 0,
            has_next: false,
            has_prev: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_below_one_is_clamped() {
        assert_eq!(PageQuery::new(0, "").page(), 1);
        assert_eq!(PageQuery::new(1, "").page(), 1);
        assert_eq!(PageQuery::new(7, "").with_page(0).page(), 1);
    }

    #[test]
    fn default_starts_at_page_one() {
        let q = PageQuery::default();
        assert_eq!(q.page(), 1);
        assert_eq!(q.query(), "");
    }

    #[test]
    fn query_change_resets_page() {
        let q = PageQuery::new(4, "rick");
        let changed = q.with_query("morty");
        assert_eq!(changed.page(), 1);
        assert_eq!(changed.query(), "morty");
        // The original snapshot is unaffected.
        assert_eq!(q.page(), 4);
    }

    #[test]
    fn zeroed_info_has_no_navigation() {
        let info = PaginationInfo::zeroed();
        assert_eq!(info.total_count, 0);
        assert!(!info.has_next);
        assert!(!info.has_prev);
    }
}
