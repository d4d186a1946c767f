use axum::{routing::get, Router};

use crate::features::pages::handlers;
use crate::features::pages::state::PageState;

/// Create the public HTML page routes
pub fn routes(state: PageState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/denuncias", get(handlers::reports))
        .route(
            "/denunciar",
            get(handlers::report_form).post(handlers::submit_report),
        )
        .with_state(state)
}
