use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::admin::handlers as admin_handlers;
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::documents::{dtos as documents_dtos, handlers as documents_handlers};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::shared::types::{ApiResponse, Meta, Pagination};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reports (public)
        reports_handlers::create_report,
        reports_handlers::list_reports,
        // Categories (public)
        categories_handlers::list_categories,
        categories_handlers::create_category,
        // Documents (public)
        documents_handlers::list_documents,
        documents_handlers::create_document,
        // Dashboard (public)
        dashboard_handlers::get_summary,
        // Admin
        admin_handlers::list_reports,
    ),
    components(
        schemas(
            // Shared
            Meta,
            Pagination,
            // Reports
            reports_models::ReportStatus,
            reports_models::Department,
            reports_dtos::CoordinateInput,
            reports_dtos::CreateReportDto,
            reports_dtos::ReportResponseDto,
            reports_dtos::ReportCardDto,
            reports_dtos::ReportPageDto,
            ApiResponse<reports_dtos::ReportResponseDto>,
            ApiResponse<reports_dtos::ReportPageDto>,
            // Categories
            categories_dtos::CreateCategoryDto,
            categories_dtos::CategoryResponseDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            // Documents
            documents_dtos::CreateDocumentDto,
            documents_dtos::DocumentResponseDto,
            documents_dtos::DocumentSummaryDto,
            ApiResponse<Vec<documents_dtos::DocumentResponseDto>>,
            ApiResponse<documents_dtos::DocumentResponseDto>,
            // Dashboard
            dashboard_dtos::DashboardSummaryDto,
            ApiResponse<dashboard_dtos::DashboardSummaryDto>,
        )
    ),
    tags(
        (name = "reports", description = "Citizen report intake and approved listings (public)"),
        (name = "categories", description = "Document categories (public)"),
        (name = "documents", description = "Published institutional documents (public)"),
        (name = "dashboard", description = "Public statistics and latest items"),
        (name = "admin", description = "Moderation listing (basic auth)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Transparencia API",
        version = "0.1.0",
        description = "API documentation for the Transparencia citizen reporting platform",
    )
)]
pub struct ApiDoc;

/// Adds the HTTP basic security scheme used by the admin routes
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_public_and_admin_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/reports",
            "/api/categories",
            "/api/documents",
            "/api/dashboard/summary",
            "/api/admin/reports",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Denuncias".to_string(),
            version: "2.0.0".to_string(),
            description: "Docs".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Denuncias");
        assert_eq!(doc.info.version, "2.0.0");
    }
}
