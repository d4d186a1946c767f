use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::admin::handlers;
use crate::features::reports::services::ReportService;

/// Create moderation routes. Callers are expected to wrap these in basic auth.
pub fn routes(report_service: Arc<ReportService>) -> Router {
    Router::new()
        .route("/api/admin/reports", get(handlers::list_reports))
        .route("/admin/denuncias", get(handlers::reports_page))
        .with_state(report_service)
}
