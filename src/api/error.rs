use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::Notice;
use crate::domain::{DomainError, Language, Localizer};

/// Error response carrying a message in the workspace's language.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
    pub notices: Vec<Notice>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    notices: Vec<Notice>,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            notices: Vec::new(),
        }
    }

    pub fn from_domain(locales: &Localizer, lang: Language, err: &DomainError) -> Self {
        let (status, code) = match err {
            DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            DomainError::Busy => (StatusCode::CONFLICT, "busy"),
            DomainError::Extraction { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "extraction_failed"),
            DomainError::NoContent => (StatusCode::UNPROCESSABLE_ENTITY, "no_content"),
            DomainError::ModelInit(_) => (StatusCode::BAD_GATEWAY, "model_init_failed"),
            DomainError::Stream(_) => (StatusCode::BAD_GATEWAY, "generation_failed"),
            DomainError::Config(_) | DomainError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal")
            }
        };
        if status.is_server_error() {
            tracing::error!(error = %err, "request failed");
        }
        Self::new(status, code, locales.describe(err, lang))
    }

    pub fn with_notices(mut self, notices: Vec<Notice>) -> Self {
        self.notices = notices;
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.code,
            message: self.message,
            notices: self.notices,
        };
        (self.status, Json(body)).into_response()
    }
}
