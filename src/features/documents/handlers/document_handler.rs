use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::documents::dtos::{CreateDocumentDto, DocumentResponseDto};
use crate::features::documents::services::DocumentService;
use crate::shared::types::{ApiResponse, Meta};

/// List public documents, most recently published first
#[utoipa::path(
    get,
    path = "/api/documents",
    responses(
        (status = 200, description = "List of public documents", body = ApiResponse<Vec<DocumentResponseDto>>),
        (status = 500, description = "Failed to list documents")
    ),
    tag = "documents"
)]
pub async fn list_documents(
    State(service): State<Arc<DocumentService>>,
) -> Result<Json<ApiResponse<Vec<DocumentResponseDto>>>> {
    let documents = service
        .list_public()
        .await
        .map_err(|e| e.collapse("Failed to list documents"))?;
    let total = documents.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(documents),
        None,
        Some(Meta { total }),
    )))
}

/// Publish a document
#[utoipa::path(
    post,
    path = "/api/documents",
    request_body = CreateDocumentDto,
    responses(
        (status = 201, description = "Document created", body = ApiResponse<DocumentResponseDto>),
        (status = 500, description = "Failed to create document")
    ),
    tag = "documents"
)]
pub async fn create_document(
    State(service): State<Arc<DocumentService>>,
    AppJson(dto): AppJson<CreateDocumentDto>,
) -> Result<(StatusCode, Json<ApiResponse<DocumentResponseDto>>)> {
    let document = service
        .create(dto)
        .await
        .map_err(|e| e.collapse("Failed to create document"))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(document), None, None)),
    ))
}
