//! Offset-based pagination types
//!
//! Leaderboard pages are classic page-number/page-size requests. Totals for
//! windowed metrics come from a separate distinct-count query, so `Page`
//! carries `total_elements` independently of the item count.

use serde::{Deserialize, Serialize};

/// Default page size
const DEFAULT_SIZE: i64 = 10;
/// Maximum page size
const MAX_SIZE: i64 = 100;

/// Validated page request (zero-based page number)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
}

/// Deserialization routes through `new` so clamping holds on every path
impl<'de> Deserialize<'de> for PageRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            page: i64,
            #[serde(default = "default_size")]
            size: i64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Self::new(raw.page, raw.size))
    }
}

fn default_size() -> i64 {
    DEFAULT_SIZE
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_SIZE,
        }
    }
}

impl PageRequest {
    /// Create a page request, clamping page to >= 0 and size to 1..=100
    #[must_use]
    pub fn new(page: i64, size: i64) -> Self {
        Self {
            page: page.max(0),
            size: size.clamp(1, MAX_SIZE),
        }
    }

    /// Row offset for SQL queries
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.page * self.size
    }

    /// Row limit for SQL queries
    #[inline]
    #[must_use]
    pub const fn limit(&self) -> i64 {
        self.size
    }
}

/// One page of results with pagination metadata
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    /// Build a page from its items and the independently computed total
    #[must_use]
    pub fn new(items: Vec<T>, request: PageRequest, total_elements: i64) -> Self {
        // Guard against hand-built requests that skipped `new`
        let size = request.size.max(1);
        let total_pages = if total_elements == 0 {
            0
        } else {
            (total_elements + size - 1) / size
        };
        Self {
            items,
            page: request.page,
            size,
            total_elements,
            total_pages,
        }
    }

    /// Map the page contents, preserving metadata
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }

    /// Check whether the page holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let req = PageRequest::default();
        assert_eq!(req.page, 0);
        assert_eq!(req.size, DEFAULT_SIZE);
    }

    #[test]
    fn test_request_clamping() {
        let req = PageRequest::new(-3, 500);
        assert_eq!(req.page, 0);
        assert_eq!(req.size, MAX_SIZE);

        let req = PageRequest::new(2, 0);
        assert_eq!(req.size, 1);
    }

    #[test]
    fn test_offset_computation() {
        let req = PageRequest::new(3, 20);
        assert_eq!(req.offset(), 60);
        assert_eq!(req.limit(), 20);
    }

    #[test]
    fn test_deserialization_clamps_like_new() {
        let req: PageRequest = serde_json::from_str(r#"{"page":0,"size":0}"#).unwrap();
        assert_eq!(req.size, 1);

        let req: PageRequest = serde_json::from_str(r#"{"page":-2,"size":500}"#).unwrap();
        assert_eq!(req.page, 0);
        assert_eq!(req.size, MAX_SIZE);

        let req: PageRequest = serde_json::from_str(r"{}").unwrap();
        assert_eq!(req, PageRequest::default());
    }

    #[test]
    fn test_zero_size_request_cannot_divide_by_zero() {
        // Struct-literal request bypassing the clamped constructor
        let req = PageRequest { page: 0, size: 0 };
        let page: Page<i32> = Page::new(vec![], req, 5);
        assert_eq!(page.size, 1);
        assert_eq!(page.total_pages, 5);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let page = Page::new(vec![1, 2, 3], PageRequest::new(0, 3), 7);
        assert_eq!(page.total_pages, 3);

        let page = Page::new(vec![1, 2, 3], PageRequest::new(0, 3), 6);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_empty_total() {
        let page: Page<i32> = Page::new(vec![], PageRequest::default(), 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.is_empty());
    }

    #[test]
    fn test_map_preserves_metadata() {
        let page = Page::new(vec![1, 2], PageRequest::new(1, 2), 10);
        let mapped = page.map(|n| n * 2);
        assert_eq!(mapped.items, vec![2, 4]);
        assert_eq!(mapped.page, 1);
        assert_eq!(mapped.total_elements, 10);
    }
}
