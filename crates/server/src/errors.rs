use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::RegistryError;
use thiserror::Error;
use tracing::{error, info};

/// JSON error body: `{"error": <title>, "detail": <message>}`
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", Some(detail.into()))
    }

    pub fn validation(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error", Some(detail.into()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, detail = ?self.detail, "request failed");
        }
        let body = serde_json::json!({"error": self.title, "detail": self.detail});
        (self.status, Json(body)).into_response()
    }
}

impl From<RegistryError> for JsonApiError {
    fn from(e: RegistryError) -> Self {
        Self::not_found(e.to_string())
    }
}

// 请求体格式错误统一返回 422，不进入 registry
impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        info!(event = "invalid_body", reason = %rejection.body_text(), "rejecting request body");
        Self::validation(rejection.body_text())
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(rejection: PathRejection) -> Self {
        info!(event = "invalid_path", reason = %rejection.body_text(), "rejecting path parameters");
        Self::validation(rejection.body_text())
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_errors_map_to_404_with_message() {
        let err: JsonApiError = RegistryError::StudentNotFound(7).into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.detail.as_deref(), Some("Student not found"));

        let err: JsonApiError = RegistryError::EnrollmentNotFound { class_id: 1, student_id: 2 }.into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.detail.as_deref(), Some("Class or student not found"));
    }

    #[test]
    fn validation_error_is_422() {
        let res = JsonApiError::validation("missing field `age`").into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
