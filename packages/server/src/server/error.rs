//! HTTP mapping for access-layer errors

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::common::DirectoryError;

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl DirectoryError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DirectoryError::NotFound { .. } => StatusCode::NOT_FOUND,
            DirectoryError::Validation(_) => StatusCode::BAD_REQUEST,
            DirectoryError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });
        (status, body).into_response()
    }
}

// Malformed bodies and path parameters are client errors, always 400

impl From<JsonRejection> for DirectoryError {
    fn from(rejection: JsonRejection) -> Self {
        DirectoryError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for DirectoryError {
    fn from(rejection: PathRejection) -> Self {
        DirectoryError::Validation(rejection.body_text())
    }
}
