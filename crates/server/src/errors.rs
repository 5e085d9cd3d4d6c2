use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::clips::ClipError;
use thiserror::Error;
use tracing::error;

/// JSON error body: `{"title", "detail", "code"}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
    pub code: Option<u16>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail, code: None }
    }
}

impl From<ClipError> for JsonApiError {
    fn from(e: ClipError) -> Self {
        let (status, title) = match &e {
            ClipError::UserNotFound(_) => (StatusCode::NOT_FOUND, "User Not Found"),
            ClipError::ClipNotFound { .. } => (StatusCode::NOT_FOUND, "Clip Not Found"),
            ClipError::MalformedIdentifier(_) => (StatusCode::BAD_REQUEST, "Malformed Identifier"),
            ClipError::UserExists(_) => (StatusCode::CONFLICT, "User Exists"),
            ClipError::Validation(_) => (StatusCode::BAD_REQUEST, "Validation Error"),
            ClipError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Storage Error"),
        };
        Self { status, title, detail: Some(e.to_string()), code: Some(e.code()) }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, detail = ?self.detail, "request failed");
        }
        let body = serde_json::json!({"title": self.title, "detail": self.detail, "code": self.code});
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
}
