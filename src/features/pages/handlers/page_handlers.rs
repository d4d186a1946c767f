use axum::{
    extract::{rejection::FormRejection, Query, State},
    http::{header, HeaderValue},
    response::{Html, IntoResponse, Redirect},
    Form,
};
use minijinja::context;

use crate::core::error::Result;
use crate::features::pages::dtos::FormBannerQuery;
use crate::features::pages::state::PageState;
use crate::features::reports::dtos::{ReportCardDto, ReportFormDto};
use crate::features::reports::models::Department;
use crate::shared::types::PageRequest;
use crate::shared::views::render_page;

const SUBMITTED_REDIRECT: &str = "/denunciar?gracias=1";
const FAILED_REDIRECT: &str = "/denunciar?error=1";

fn no_store() -> (header::HeaderName, HeaderValue) {
    (header::CACHE_CONTROL, HeaderValue::from_static("no-store"))
}

/// Home page: public counts, latest approved reports and featured documents
pub async fn home(State(state): State<PageState>) -> Result<impl IntoResponse> {
    let summary = state.dashboard.get_summary().await?;
    let html = render_page("home.jinja", context! { summary })?;

    Ok((
        [(header::CACHE_CONTROL, state.public_cache_control())],
        Html(html),
    ))
}

/// The most recent approved reports. No filters and no paging controls.
pub async fn reports(State(state): State<PageState>) -> Result<impl IntoResponse> {
    let page = state.reports.list_approved(PageRequest::FIRST).await?;
    let reports: Vec<ReportCardDto> = page.reports.into_iter().map(|r| r.into()).collect();
    let html = render_page("reports.jinja", context! { reports })?;

    Ok((
        [(header::CACHE_CONTROL, state.public_cache_control())],
        Html(html),
    ))
}

/// Submission form, with the thank-you or error banner after a redirect
pub async fn report_form(Query(query): Query<FormBannerQuery>) -> Result<impl IntoResponse> {
    let departments: Vec<&str> = Department::ALL.iter().map(|d| d.label()).collect();
    let html = render_page(
        "report_form.jinja",
        context! {
            departments,
            submitted => query.submitted(),
            failed => query.failed(),
        },
    )?;

    Ok(([no_store()], Html(html)))
}

/// Form submission. Always answers with a redirect back to the form; the
/// caller only learns whether it worked.
pub async fn submit_report(
    State(state): State<PageState>,
    form: std::result::Result<Form<ReportFormDto>, FormRejection>,
) -> impl IntoResponse {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => {
            tracing::warn!("Unreadable report form: {}", rejection);
            return ([no_store()], Redirect::to(FAILED_REDIRECT));
        }
    };

    // Invalid input and storage failures look the same to the citizen
    let target = if state.reports.submit(form.into()).await.is_accepted() {
        SUBMITTED_REDIRECT
    } else {
        FAILED_REDIRECT
    };

    ([no_store()], Redirect::to(target))
}
