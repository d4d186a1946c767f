use std::sync::Arc;
use std::time::Duration;

use crate::core::error::Result;
use crate::features::reports::dtos::ReportSubmission;
use crate::features::reports::models::{Report, ReportListOptions, ReportPage, ReportStatus};
use crate::features::reports::repositories::ReportRepository;
use crate::features::reports::services::intake;
use crate::shared::cache::TtlCache;
use crate::shared::types::PageRequest;

/// Result of a citizen submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Stored as pending
    Accepted(Report),
    /// Rejected before touching storage
    Invalid(Vec<String>),
    /// Valid input, but the insert failed (already logged)
    StorageFailed,
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted(_))
    }
}

/// Service for report intake and listing
pub struct ReportService {
    repository: Arc<dyn ReportRepository>,
    public_cache: TtlCache<ReportPage>,
}

impl ReportService {
    pub fn new(repository: Arc<dyn ReportRepository>, revalidate: Duration) -> Self {
        Self {
            repository,
            public_cache: TtlCache::new(revalidate),
        }
    }

    /// Validate and store a citizen submission.
    ///
    /// Never returns an error: every failure is logged here and reported
    /// through the outcome so callers can pick their own response.
    pub async fn submit(&self, submission: ReportSubmission) -> SubmissionOutcome {
        let new_report = match intake::normalize(submission) {
            Ok(report) => report,
            Err(errors) => {
                tracing::warn!("Report submission rejected: {}", errors.join("; "));
                return SubmissionOutcome::Invalid(errors);
            }
        };

        match self.repository.insert(&new_report).await {
            Ok(report) => {
                tracing::info!(
                    "Report submitted: id={}, department={}, anonymous={}",
                    report.id,
                    report.department,
                    report.is_anonymous
                );
                SubmissionOutcome::Accepted(report)
            }
            Err(e) => {
                tracing::error!("Failed to store report submission: {}", e);
                SubmissionOutcome::StorageFailed
            }
        }
    }

    /// Approved reports for public pages, served through the revalidation cache
    pub async fn list_approved(&self, page: PageRequest) -> Result<ReportPage> {
        let options = ReportListOptions::approved(page);
        let key = options.cache_key();
        // Pages past the end are client-chosen and never cached
        let page = self
            .public_cache
            .get_or_try_load_if(&key, || self.list(options), |page| {
                page.pagination.page <= page.pagination.total_pages
            })
            .await?;
        debug_assert!(page.reports.iter().all(|r| r.status.is_public()));
        Ok(page)
    }

    /// Every report regardless of state, for moderators. Never cached.
    pub async fn list_all(
        &self,
        page: PageRequest,
        status: Option<ReportStatus>,
    ) -> Result<ReportPage> {
        self.list(ReportListOptions::all(page, status)).await
    }

    async fn list(&self, options: ReportListOptions) -> Result<ReportPage> {
        let (reports, total) = self.repository.list(&options).await?;
        Ok(ReportPage::new(reports, &options, total))
    }
}
