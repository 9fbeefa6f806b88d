//! Mapping of application errors onto HTTP responses.

use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use podcast_core::catalog::CatalogError;
use podcast_shared::AppError;
use serde_json::json;
use tracing::{debug, error};

/// Error returned by every handler.
///
/// Renders as `{"error": code, "message": msg}` with the status of the
/// wrapped [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// Create a validation error (400).
    #[must_use]
    pub fn validation(msg: impl Into<String>) -> Self {
        Self(AppError::Validation(msg.into()))
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        let app = match err {
            CatalogError::NotFound { .. } => AppError::NotFound(err.to_string()),
            CatalogError::Upload(upload) => AppError::ExternalService(upload.to_string()),
            CatalogError::Repository(msg) => AppError::Database(msg),
        };
        Self(app)
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self(AppError::PayloadTooLarge(err.body_text()));
        }
        Self::validation(format!("malformed multipart body: {}", err.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        } else {
            debug!(error = %self.0, "Client error");
        }

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": self.0.message(),
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use podcast_core::catalog::EntityKind;
    use podcast_core::storage::{StorageError, UploadError};
    use serde_json::Value;

    async fn render(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn test_not_found_is_404() {
        let (status, body) =
            render(CatalogError::not_found(EntityKind::Podcast, 999).into()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
        assert_eq!(body["message"], "podcast not found with id: 999");
    }

    #[tokio::test]
    async fn test_upload_failure_embeds_cause() {
        let err = CatalogError::from(UploadError::from(StorageError::operation("bucket gone")));
        let (status, body) = render(err.into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "EXTERNAL_SERVICE_ERROR");
        assert!(body["message"].as_str().expect("message").contains("bucket gone"));
    }

    #[tokio::test]
    async fn test_repository_failure_is_database_error() {
        let (status, body) = render(CatalogError::repository("pool timed out").into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "DATABASE_ERROR");
        assert_eq!(body["message"], "pool timed out");
    }

    #[tokio::test]
    async fn test_validation_is_400() {
        let (status, body) = render(ApiError::validation("missing field: audio")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }
}
