use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;
use crate::shared::types::ApiResponse;

/// JSON body extractor for the create endpoints.
///
/// Rejections use the same envelope as every other error. A body that parses
/// but has a wrongly typed field is reported as a validation error naming the
/// field, so API clients see it next to the intake validation messages.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(AppJsonRejection)
    }
}

pub struct AppJsonRejection(JsonRejection);

/// Drop axum's generic prefix, keeping `field: reason`
fn field_error(body_text: &str) -> String {
    body_text
        .split_once(": ")
        .map(|(_, detail)| detail.to_string())
        .unwrap_or_else(|| body_text.to_string())
}

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        let status = self.0.status();
        tracing::debug!("Rejected JSON body: {}", self.0.body_text());

        let error = match self.0 {
            JsonRejection::JsonDataError(err) => AppError::Validation(field_error(&err.body_text())),
            JsonRejection::JsonSyntaxError(_) => {
                AppError::BadRequest("Request body is not valid JSON".to_string())
            }
            JsonRejection::MissingJsonContentType(_) => {
                AppError::BadRequest("Expected Content-Type: application/json".to_string())
            }
            _ if status == StatusCode::PAYLOAD_TOO_LARGE => {
                let body = Json(ApiResponse::<()>::error(
                    Some("Request body too large".to_string()),
                    None,
                ));
                return (status, body).into_response();
            }
            _ => AppError::BadRequest("Failed to read request body".to_string()),
        };

        error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::post, Router};
    use axum_test::TestServer;
    use serde::Deserialize;
    use serde_json::Value;

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Submission {
        city: String,
        is_anonymous: bool,
    }

    fn server() -> TestServer {
        let app = Router::new().route(
            "/submit",
            post(|AppJson(s): AppJson<Submission>| async move {
                format!("{}:{}", s.city, s.is_anonymous)
            }),
        );
        TestServer::new(app).unwrap()
    }

    #[test]
    fn test_field_error_strips_prefix() {
        assert_eq!(
            field_error("Failed to deserialize the JSON body into the target type: city: missing"),
            "city: missing"
        );
        assert_eq!(field_error("plain"), "plain");
    }

    #[tokio::test]
    async fn test_wrong_field_type_is_a_validation_error() {
        let response = server()
            .post("/submit")
            .json(&serde_json::json!({ "city": "Sucre", "isAnonymous": "yes" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["errors"][0].as_str().unwrap().starts_with("isAnonymous"));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let response = server()
            .post("/submit")
            .text("{ not json")
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "Request body is not valid JSON");
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let response = server().post("/submit").text("{}").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "Expected Content-Type: application/json");
    }
}
