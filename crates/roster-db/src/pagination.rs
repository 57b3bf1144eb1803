//! Offset-based pagination types shared by the repository layer.

use serde::Serialize;

/// A zero-based page request with a fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    page: i64,
    size: i64,
}

impl PageRequest {
    /// Creates a request for `page` (zero-based) with `size` rows per page.
    ///
    /// Negative pages are clamped to the first page; the size is clamped to
    /// at least one row.
    pub fn of(page: i64, size: i64) -> Self {
        Self {
            page: page.max(0),
            size: size.max(1),
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    /// Number of rows to skip before this page starts.
    pub fn offset(&self) -> i64 {
        self.page * self.size
    }
}

/// One page of query results together with the total row count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: i64,
    pub size: i64,
    pub total: i64,
}

impl<T> Page<T> {
    /// Builds a page from already-fetched content and a known total.
    pub fn new(content: Vec<T>, request: PageRequest, total: i64) -> Self {
        Self {
            content,
            number: request.page(),
            size: request.size(),
            total,
        }
    }

    /// Builds a page, invoking `total_fn` only when the total cannot be
    /// derived from the page shape itself.
    ///
    /// The count query is skipped when the fetched content already pins the
    /// total down: a first page that is not full, or a partial trailing
    /// page. A full page (or an empty page past the first) says nothing
    /// about the overall count, so `total_fn` runs.
    pub fn from_parts<E, F>(content: Vec<T>, request: PageRequest, total_fn: F) -> Result<Self, E>
    where
        F: FnOnce() -> Result<i64, E>,
    {
        let fetched = content.len() as i64;

        let total = if request.page() == 0 && fetched < request.size() {
            fetched
        } else if fetched > 0 && fetched < request.size() {
            request.offset() + fetched
        } else {
            total_fn()?
        };

        Ok(Self::new(content, request, total))
    }

    pub fn total_pages(&self) -> i64 {
        if self.total == 0 {
            0
        } else {
            (self.total + self.size - 1) / self.size
        }
    }

    pub fn has_next(&self) -> bool {
        self.number + 1 < self.total_pages()
    }

    pub fn is_first(&self) -> bool {
        self.number == 0
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::{Page, PageRequest};

    fn counting_total(called: &Cell<bool>, total: i64) -> impl FnOnce() -> Result<i64, ()> + '_ {
        move || {
            called.set(true);
            Ok(total)
        }
    }

    #[test]
    fn request_clamps_page_and_size() {
        let request = PageRequest::of(-3, 0);
        assert_eq!(request.page(), 0);
        assert_eq!(request.size(), 1);
        assert_eq!(request.offset(), 0);

        assert_eq!(PageRequest::of(2, 10).offset(), 20);
    }

    #[test]
    fn short_first_page_skips_the_count() {
        let called = Cell::new(false);
        let page =
            Page::from_parts(vec![1, 2], PageRequest::of(0, 5), counting_total(&called, 99))
                .unwrap();

        assert!(!called.get());
        assert_eq!(page.total, 2);
        assert!(page.is_last());
    }

    #[test]
    fn partial_trailing_page_skips_the_count() {
        let called = Cell::new(false);
        let page =
            Page::from_parts(vec![7], PageRequest::of(1, 3), counting_total(&called, 99)).unwrap();

        assert!(!called.get());
        assert_eq!(page.total, 4);
        assert_eq!(page.total_pages(), 2);
        assert!(page.is_last());
    }

    #[test]
    fn full_page_runs_the_count() {
        let called = Cell::new(false);
        let page = Page::from_parts(
            vec![1, 2, 3],
            PageRequest::of(0, 3),
            counting_total(&called, 4),
        )
        .unwrap();

        assert!(called.get());
        assert_eq!(page.total, 4);
        assert!(page.has_next());
        assert!(!page.is_last());
    }

    #[test]
    fn empty_page_past_the_first_runs_the_count() {
        let called = Cell::new(false);
        let page = Page::<i32>::from_parts(
            Vec::new(),
            PageRequest::of(3, 10),
            counting_total(&called, 12),
        )
        .unwrap();

        assert!(called.get());
        assert_eq!(page.total, 12);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = Page::new(vec![1, 2, 3], PageRequest::of(0, 3), 7);
        assert_eq!(page.total_pages(), 3);
        assert!(page.is_first());
        assert!(page.has_next());

        let empty = Page::<i32>::new(Vec::new(), PageRequest::of(0, 3), 0);
        assert_eq!(empty.total_pages(), 0);
        assert!(empty.is_last());
    }
}
