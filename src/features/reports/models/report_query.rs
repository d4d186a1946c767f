use crate::core::error::{AppError, Result};
use crate::features::reports::models::{Report, ReportStatus};
use crate::shared::constants::{MAX_PAGE_SIZE, REPORT_PAGE_SIZE};
use crate::shared::types::{PageRequest, Pagination};

/// Filter, ordering window and page for a report listing.
///
/// Ordering is fixed: newest first, ties broken by id so pages never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportListOptions {
    status: Option<ReportStatus>,
    page: PageRequest,
    page_size: i64,
}

impl ReportListOptions {
    pub fn new(status: Option<ReportStatus>, page: PageRequest, page_size: i64) -> Result<Self> {
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(AppError::Validation(format!(
                "page_size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }

        Ok(Self {
            status,
            page,
            page_size,
        })
    }

    /// Public listing: approved reports only
    pub fn approved(page: PageRequest) -> Self {
        Self {
            status: Some(ReportStatus::Approved),
            page,
            page_size: REPORT_PAGE_SIZE,
        }
    }

    /// Moderation listing: every state, optionally narrowed to one
    pub fn all(page: PageRequest, status: Option<ReportStatus>) -> Self {
        Self {
            status,
            page,
            page_size: REPORT_PAGE_SIZE,
        }
    }

    /// The `limit` most recent approved reports
    pub fn latest_approved(limit: i64) -> Result<Self> {
        Self::new(Some(ReportStatus::Approved), PageRequest::FIRST, limit)
    }

    pub fn status(&self) -> Option<ReportStatus> {
        self.status
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }

    pub fn offset(&self) -> i64 {
        self.page.offset(self.page_size)
    }

    pub fn cache_key(&self) -> String {
        format!(
            "reports:{}:{}:{}",
            self.status.map(|s| s.as_str()).unwrap_or("ALL"),
            self.page.number(),
            self.page_size
        )
    }
}

/// One page of reports plus the numbers needed to render navigation
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPage {
    pub reports: Vec<Report>,
    pub pagination: Pagination,
}

impl ReportPage {
    pub fn new(reports: Vec<Report>, options: &ReportListOptions, total_items: i64) -> Self {
        Self {
            reports,
            pagination: Pagination::new(options.page(), options.page_size(), total_items),
        }
    }
}
