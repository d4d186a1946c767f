use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::categories::dtos::{CategoryResponseDto, CreateCategoryDto};
use crate::features::categories::services::CategoryService;
use crate::shared::types::{ApiResponse, Meta};

/// List all categories ordered by name
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponseDto>>),
        (status = 500, description = "Failed to list categories")
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    let categories = service
        .list()
        .await
        .map_err(|e| e.collapse("Failed to list categories"))?;
    let total = categories.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(categories),
        None,
        Some(Meta { total }),
    )))
}

/// Create a category
///
/// Any failure, including invalid input or a duplicate name, is reported as a
/// generic 500.
#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponseDto>),
        (status = 500, description = "Failed to create category")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<(StatusCode, Json<ApiResponse<CategoryResponseDto>>)> {
    let category = service
        .create(dto)
        .await
        .map_err(|e| e.collapse("Failed to create category"))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(category), None, None)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::routes::routes;
    use crate::shared::test_helpers::InMemoryCategoryRepository;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server(repository: InMemoryCategoryRepository) -> TestServer {
        let service = Arc::new(CategoryService::new(Arc::new(repository)));
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let server = server(InMemoryCategoryRepository::new());

        let created = server
            .post("/api/categories")
            .json(&json!({ "name": "Informes", "description": "Rendición de cuentas" }))
            .await;
        created.assert_status(StatusCode::CREATED);
        let body: Value = created.json();
        assert_eq!(body["data"]["name"], "Informes");

        let listed = server.get("/api/categories").await;
        listed.assert_status_ok();
        let body: Value = listed.json();
        assert_eq!(body["meta"]["total"], 1);
        assert_eq!(body["data"][0]["description"], "Rendición de cuentas");
    }

    #[tokio::test]
    async fn test_duplicate_name_is_generic_500() {
        let server = server(InMemoryCategoryRepository::new());
        let payload = json!({ "name": "Contratos" });

        server
            .post("/api/categories")
            .json(&payload)
            .await
            .assert_status(StatusCode::CREATED);
        let duplicate = server.post("/api/categories").json(&payload).await;

        duplicate.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = duplicate.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Failed to create category");
    }

    #[tokio::test]
    async fn test_list_failure_is_generic_500() {
        let server = server(InMemoryCategoryRepository::failing());

        let response = server.get("/api/categories").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["message"], "Failed to list categories");
    }
}
