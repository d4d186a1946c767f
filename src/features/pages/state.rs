use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;

use crate::features::dashboard::services::DashboardService;
use crate::features::reports::services::ReportService;

/// Shared state for the HTML pages
#[derive(Clone)]
pub struct PageState {
    pub reports: Arc<ReportService>,
    pub dashboard: Arc<DashboardService>,
    /// How long browsers and the in-process cache may reuse a public page
    pub revalidate: Duration,
}

impl PageState {
    pub fn new(
        reports: Arc<ReportService>,
        dashboard: Arc<DashboardService>,
        revalidate: Duration,
    ) -> Self {
        Self {
            reports,
            dashboard,
            revalidate,
        }
    }

    /// `Cache-Control` for public listing and statistics pages
    pub fn public_cache_control(&self) -> HeaderValue {
        if self.revalidate.is_zero() {
            return HeaderValue::from_static("no-cache");
        }
        HeaderValue::from_str(&format!("public, max-age={}", self.revalidate.as_secs()))
            .unwrap_or_else(|_| HeaderValue::from_static("no-cache"))
    }
}
