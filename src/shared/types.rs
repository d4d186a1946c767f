use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::MAX_PAGE_SIZE;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    pub total: i64,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// A 1-indexed page number that is always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct PageRequest(i64);

impl PageRequest {
    pub const FIRST: PageRequest = PageRequest(1);

    /// Parse a raw `page` query value.
    ///
    /// Missing, non-numeric and non-positive inputs all resolve to page 1.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<i64>().ok())
            .map(Self::new)
            .unwrap_or(Self::FIRST)
    }

    pub fn new(page: i64) -> Self {
        Self(page.max(1))
    }

    pub fn number(&self) -> i64 {
        self.0
    }

    /// SQL OFFSET for this page at the given page size
    pub fn offset(&self, page_size: i64) -> i64 {
        (self.0 - 1).saturating_mul(page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Pagination metadata for a listing response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: i64,
    pub page_size: i64,
    pub total_items: i64,
    /// ceil(total_items / page_size), never less than 1
    pub total_pages: i64,
    pub has_previous: bool,
    pub has_next: bool,
}

impl Pagination {
    pub fn new(page: PageRequest, page_size: i64, total_items: i64) -> Self {
        let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        let total_items = total_items.max(0);
        let total_pages = ((total_items + page_size - 1) / page_size).max(1);
        let page = page.number();

        Self {
            page,
            page_size,
            total_items,
            total_pages,
            has_previous: page > 1,
            has_next: page < total_pages,
        }
    }

    pub fn previous_page(&self) -> Option<i64> {
        self.has_previous.then(|| self.page - 1)
    }

    pub fn next_page(&self) -> Option<i64> {
        self.has_next.then(|| self.page + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_parse() {
        assert_eq!(PageRequest::parse(None).number(), 1);
        assert_eq!(PageRequest::parse(Some("")).number(), 1);
        assert_eq!(PageRequest::parse(Some("abc")).number(), 1);
        assert_eq!(PageRequest::parse(Some("0")).number(), 1);
        assert_eq!(PageRequest::parse(Some("-4")).number(), 1);
        assert_eq!(PageRequest::parse(Some("2.5")).number(), 1);
        assert_eq!(PageRequest::parse(Some(" 3 ")).number(), 3);
    }

    #[test]
    fn test_page_request_offset() {
        assert_eq!(PageRequest::new(1).offset(24), 0);
        assert_eq!(PageRequest::new(3).offset(24), 48);
    }

    #[test]
    fn test_pagination_first_of_three() {
        let p = Pagination::new(PageRequest::FIRST, 24, 50);
        assert_eq!(p.total_pages, 3);
        assert!(!p.has_previous);
        assert!(p.has_next);
        assert_eq!(p.previous_page(), None);
        assert_eq!(p.next_page(), Some(2));
    }

    #[test]
    fn test_pagination_last_page() {
        let p = Pagination::new(PageRequest::new(3), 24, 50);
        assert!(p.has_previous);
        assert!(!p.has_next);
        assert_eq!(p.previous_page(), Some(2));
    }

    #[test]
    fn test_pagination_exact_multiple() {
        let p = Pagination::new(PageRequest::FIRST, 24, 48);
        assert_eq!(p.total_pages, 2);
    }

    #[test]
    fn test_pagination_empty_has_one_page() {
        let p = Pagination::new(PageRequest::FIRST, 24, 0);
        assert_eq!(p.total_pages, 1);
        assert!(!p.has_previous);
        assert!(!p.has_next);
    }

    #[test]
    fn test_pagination_total_pages_is_ceiling() {
        for total in 0..=200_i64 {
            let p = Pagination::new(PageRequest::FIRST, 24, total);
            let expected = ((total as f64) / 24.0).ceil().max(1.0) as i64;
            assert_eq!(p.total_pages, expected, "total={}", total);
        }
    }
}
