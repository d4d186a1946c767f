use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::documents::handlers;
use crate::features::documents::services::DocumentService;

/// Create routes for the documents feature
pub fn routes(service: Arc<DocumentService>) -> Router {
    Router::new()
        .route(
            "/api/documents",
            get(handlers::list_documents).post(handlers::create_document),
        )
        .with_state(service)
}
