use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Response bodies are always `{"error": "<message>"}` with a fixed message per
/// variant; underlying causes are logged and never sent to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing id parameter")]
    MissingId,

    #[error("Invalid id parameter: {0}")]
    InvalidId(String),

    #[error("Resume not found: {0}")]
    NotFound(uuid::Uuid),

    #[error("Error saving resume: {0}")]
    Save(#[source] StoreError),

    #[error("Error reading resume body: {0}")]
    Body(#[from] BytesRejection),

    #[error("Error retrieving resume: {0}")]
    Retrieve(#[source] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingId => (StatusCode::BAD_REQUEST, "Missing id parameter"),
            AppError::InvalidId(raw) => {
                tracing::debug!("Rejected malformed resume id '{raw}'");
                (StatusCode::BAD_REQUEST, "Invalid id parameter")
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "Resume not found"),
            AppError::Save(e) => {
                tracing::error!("Error saving resume: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error saving resume")
            }
            AppError::Body(e) => {
                tracing::error!("Error reading resume body: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error saving resume")
            }
            AppError::Retrieve(e) => {
                tracing::error!("Error retrieving resume: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving resume")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::MissingId.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidId("nope".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound(uuid::Uuid::nil()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Save(StoreError::NotAnObject).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
