use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::documents::dtos::DocumentSummaryDto;
use crate::features::reports::dtos::ReportCardDto;

/// Public counts plus the latest approved reports and published documents
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummaryDto {
    pub approved_reports: i64,
    pub public_documents: i64,
    pub categories: i64,
    pub latest_reports: Vec<ReportCardDto>,
    pub featured_documents: Vec<DocumentSummaryDto>,
}
