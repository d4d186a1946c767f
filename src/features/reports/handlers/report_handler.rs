use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::reports::dtos::{
    CreateReportDto, ListReportsQuery, ReportPageDto, ReportResponseDto,
};
use crate::features::reports::services::{ReportService, SubmissionOutcome};
use crate::shared::types::{ApiResponse, Meta, PageRequest};

/// Submit a citizen report
///
/// The report is stored as PENDING and stays hidden until moderated.
/// Any client-supplied status is ignored.
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body = CreateReportDto,
    responses(
        (status = 201, description = "Report accepted for moderation", body = ApiResponse<ReportResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Report could not be stored")
    ),
    tag = "reports"
)]
pub async fn create_report(
    State(service): State<Arc<ReportService>>,
    AppJson(dto): AppJson<CreateReportDto>,
) -> Result<(StatusCode, Json<ApiResponse<ReportResponseDto>>)> {
    match service.submit(dto.into()).await {
        SubmissionOutcome::Accepted(report) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(
                Some(report.into()),
                Some("¡Gracias! Tu denuncia fue enviada y está en revisión.".to_string()),
                None,
            )),
        )),
        SubmissionOutcome::Invalid(errors) => Err(AppError::Validation(errors.join("; "))),
        SubmissionOutcome::StorageFailed => Err(AppError::OperationFailed(
            "Failed to submit report".to_string(),
        )),
    }
}

/// List approved reports, newest first
#[utoipa::path(
    get,
    path = "/api/reports",
    params(ListReportsQuery),
    responses(
        (status = 200, description = "Paginated approved reports", body = ApiResponse<ReportPageDto>),
        (status = 500, description = "Internal server error")
    ),
    tag = "reports"
)]
pub async fn list_reports(
    State(service): State<Arc<ReportService>>,
    Query(query): Query<ListReportsQuery>,
) -> Result<Json<ApiResponse<ReportPageDto>>> {
    let page = service
        .list_approved(PageRequest::parse(query.page.as_deref()))
        .await?;
    let total = page.pagination.total_items;

    Ok(Json(ApiResponse::success(
        Some(page.into()),
        None,
        Some(Meta { total }),
    )))
}
