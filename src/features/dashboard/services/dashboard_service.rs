use std::sync::Arc;
use std::time::Duration;

use crate::core::error::Result;
use crate::features::categories::repositories::CategoryRepository;
use crate::features::dashboard::dtos::DashboardSummaryDto;
use crate::features::documents::repositories::DocumentRepository;
use crate::features::reports::models::{ReportListOptions, ReportStatus};
use crate::features::reports::repositories::ReportRepository;
use crate::shared::cache::TtlCache;
use crate::shared::constants::HOME_LATEST_LIMIT;

const SUMMARY_CACHE_KEY: &str = "dashboard:summary";

/// Service for public dashboard queries
pub struct DashboardService {
    reports: Arc<dyn ReportRepository>,
    documents: Arc<dyn DocumentRepository>,
    categories: Arc<dyn CategoryRepository>,
    cache: TtlCache<DashboardSummaryDto>,
}

impl DashboardService {
    pub fn new(
        reports: Arc<dyn ReportRepository>,
        documents: Arc<dyn DocumentRepository>,
        categories: Arc<dyn CategoryRepository>,
        revalidate: Duration,
    ) -> Self {
        Self {
            reports,
            documents,
            categories,
            cache: TtlCache::new(revalidate),
        }
    }

    /// Counts and latest items for the home page
    pub async fn get_summary(&self) -> Result<DashboardSummaryDto> {
        self.cache
            .get_or_try_load(SUMMARY_CACHE_KEY, || self.load_summary())
            .await
    }

    async fn load_summary(&self) -> Result<DashboardSummaryDto> {
        let latest = ReportListOptions::latest_approved(HOME_LATEST_LIMIT)?;

        let (approved_reports, public_documents, categories, (latest_reports, _), documents) =
            tokio::try_join!(
                self.reports.count_by_status(ReportStatus::Approved),
                self.documents.count_public(),
                self.categories.count(),
                self.reports.list(&latest),
                self.documents.list_public(Some(HOME_LATEST_LIMIT)),
            )?;

        Ok(DashboardSummaryDto {
            approved_reports,
            public_documents,
            categories,
            latest_reports: latest_reports.into_iter().map(|r| r.into()).collect(),
            featured_documents: documents.into_iter().map(|d| d.into()).collect(),
        })
    }
}
