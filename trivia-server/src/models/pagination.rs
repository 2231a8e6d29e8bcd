//! Question list paging
//!
//! The full question list is fetched once and windowed in memory; an empty
//! window means the requested page does not exist.

/// Default questions per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: usize,
    /// Items per page (at least 1)
    pub per_page: usize,
}

impl Pagination {
    /// Create pagination with validation.
    ///
    /// - Page is clamped to minimum of 1
    /// - Per page is clamped to minimum of 1
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Index of the first item on this page.
    pub fn start(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    /// One past the last item on this page.
    pub fn end(&self) -> usize {
        self.start().saturating_add(self.per_page)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: QUESTIONS_PER_PAGE,
        }
    }
}

/// Return the window of `items` selected by `pagination`.
///
/// The window is `[start, end)` clipped to the collection; a page past the
/// end yields an empty slice.
pub fn paginate<T>(items: &[T], pagination: Pagination) -> &[T] {
    let start = pagination.start();
    if start >= items.len() {
        return &[];
    }
    let end = pagination.end().min(items.len());
    &items[start..end]
}

/// Query parameters for pagination
///
/// `page` is kept as raw text so a garbage value falls back to page 1
/// instead of rejecting the request.
#[derive(Debug, Clone, Default)]
pub struct PaginationParams {
    pub page: Option<String>,
}

impl PaginationParams {
    /// Build from raw query pairs; the first `page` wins when repeated.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            page: pairs
                .into_iter()
                .find(|(key, _)| key == "page")
                .map(|(_, value)| value),
        }
    }

    /// Parsed page number; absent, non-numeric, zero or negative gives 1.
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<usize>().ok())
            .filter(|&p| p > 0)
            .unwrap_or(1)
    }

    pub fn with_per_page(&self, per_page: usize) -> Pagination {
        Pagination::new(self.page(), per_page)
    }
}
