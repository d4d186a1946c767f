use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use minijinja::context;

use crate::core::error::Result;
use crate::features::admin::dtos::{navigation, AdminReportsQuery};
use crate::features::reports::dtos::ReportPageDto;
use crate::features::reports::services::ReportService;
use crate::shared::types::{ApiResponse, Meta};
use crate::shared::views::render_page;

/// List reports in every state (paginated)
#[utoipa::path(
    get,
    path = "/api/admin/reports",
    params(AdminReportsQuery),
    responses(
        (status = 200, description = "Paginated reports in all states", body = ApiResponse<ReportPageDto>),
        (status = 400, description = "Unknown status filter"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin",
    security(
        ("basic_auth" = [])
    )
)]
pub async fn list_reports(
    State(service): State<Arc<ReportService>>,
    Query(query): Query<AdminReportsQuery>,
) -> Result<Json<ApiResponse<ReportPageDto>>> {
    let page = service.list_all(query.page(), query.status()?).await?;
    let total = page.pagination.total_items;

    Ok(Json(ApiResponse::success(
        Some(page.into()),
        None,
        Some(Meta { total }),
    )))
}

/// Moderation page: every report with its state badge
pub async fn reports_page(
    State(service): State<Arc<ReportService>>,
    Query(query): Query<AdminReportsQuery>,
) -> Result<impl IntoResponse> {
    let status = query.status()?;
    let page = service.list_all(query.page(), status).await?;
    let (previous_url, next_url) = navigation(&page.pagination, status);

    let html = render_page(
        "admin_reports.jinja",
        context! {
            page => ReportPageDto::from(page),
            previous_url,
            next_url,
        },
    )?;

    Ok(([(header::CACHE_CONTROL, "no-store")], Html(html)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::admin::routes::routes;
    use crate::features::reports::models::ReportStatus;
    use crate::shared::test_helpers::{report_fixture, InMemoryReportRepository};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::{Duration as ChronoDuration, Utc};
    use serde_json::Value;
    use std::time::Duration;

    fn server(reports: Vec<crate::features::reports::models::Report>) -> TestServer {
        let repository = Arc::new(InMemoryReportRepository::with_reports(reports));
        let service = Arc::new(ReportService::new(repository, Duration::from_secs(60)));
        TestServer::new(routes(service)).unwrap()
    }

    fn mixed_reports(count: i64) -> Vec<crate::features::reports::models::Report> {
        let now = Utc::now();
        (0..count)
            .map(|i| {
                let status = ReportStatus::ALL[(i % 3) as usize];
                report_fixture(status, now - ChronoDuration::minutes(i))
            })
            .collect()
    }

    #[tokio::test]
    async fn test_list_reports_includes_every_state() {
        let server = server(mixed_reports(50));

        let response = server.get("/api/admin/reports").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["meta"]["total"], 50);
        assert_eq!(body["data"]["pagination"]["totalPages"], 3);
        let statuses: Vec<&str> = body["data"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|r| r["status"].as_str())
            .collect();
        assert!(statuses.contains(&"PENDING"));
        assert!(statuses.contains(&"REJECTED"));
    }

    #[tokio::test]
    async fn test_list_reports_filters_by_status() {
        let server = server(mixed_reports(9));

        let response = server
            .get("/api/admin/reports")
            .add_query_param("status", "rejected")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["meta"]["total"], 3);
    }

    #[tokio::test]
    async fn test_list_reports_rejects_unknown_status() {
        let server = server(Vec::new());

        let response = server
            .get("/api/admin/reports")
            .add_query_param("status", "archived")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_reports_page_first_page_has_inert_previous() {
        let server = server(mixed_reports(50));

        let response = server.get("/admin/denuncias").await;

        response.assert_status_ok();
        assert_eq!(response.header("cache-control"), "no-store");
        let html = response.text();
        assert!(html.contains("página 1 de 3"));
        assert!(html.contains(r#"<span class="disabled" aria-disabled="true">Anterior</span>"#));
        assert!(html.contains(r#"?page=2" rel="#));
        assert!(html.contains("Pendiente"));
        assert!(html.contains("Rechazada"));
    }

    #[tokio::test]
    async fn test_reports_page_last_page_has_inert_next() {
        let server = server(mixed_reports(50));

        let response = server
            .get("/admin/denuncias")
            .add_query_param("page", "3")
            .await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains(r#"?page=2" rel="#));
        assert!(html.contains(r#"<span class="disabled" aria-disabled="true">Siguiente</span>"#));
    }
}
