use serde::Deserialize;
use utoipa::IntoParams;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::ReportStatus;
use crate::shared::types::{PageRequest, Pagination};

/// Query params for the moderation listing
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct AdminReportsQuery {
    /// Page number (1-indexed). Invalid values fall back to 1.
    pub page: Option<String>,

    /// Restrict to one state: PENDING, APPROVED or REJECTED
    pub status: Option<String>,
}

impl AdminReportsQuery {
    pub fn page(&self) -> PageRequest {
        PageRequest::parse(self.page.as_deref())
    }

    /// Blank means no filter; anything else must name a state
    pub fn status(&self) -> Result<Option<ReportStatus>> {
        match self.status.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(AppError::BadRequest),
        }
    }
}

/// Link to another page of the moderation listing, keeping the state filter
pub fn page_link(page: i64, status: Option<ReportStatus>) -> String {
    match status {
        Some(status) => format!("/admin/denuncias?page={}&status={}", page, status),
        None => format!("/admin/denuncias?page={}", page),
    }
}

/// Previous/next links; `None` renders as an inert control
pub fn navigation(
    pagination: &Pagination,
    status: Option<ReportStatus>,
) -> (Option<String>, Option<String>) {
    (
        pagination.previous_page().map(|p| page_link(p, status)),
        pagination.next_page().map(|p| page_link(p, status)),
    )
}
