//! HTTP error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// API error types
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error("internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_name, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NotFound", msg),
            ApiError::Template(err) => {
                tracing::error!("failed to render page: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "TemplateError",
                    err.to_string(),
                )
            }
            ApiError::Internal(err) => {
                tracing::error!("internal error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    format!("{:#}", err),
                )
            }
        };

        let body = Json(json!({
            "error": error_name,
            "message": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use http_body_util::BodyExt;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_template_error_is_500_json() {
        let response = ApiError::Template(askama::Error::Fmt(std::fmt::Error)).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "TemplateError");
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_internal_error_keeps_context() {
        let err = Err::<(), _>(std::fmt::Error)
            .context("encoding course list")
            .unwrap_err();
        let response = ApiError::from(err).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "InternalServerError");
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("encoding course list"));
    }

    #[tokio::test]
    async fn test_not_found_is_404_json() {
        let response = ApiError::NotFound("no route for /x".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "NotFound");
        assert_eq!(body["message"], "no route for /x");
    }
}
