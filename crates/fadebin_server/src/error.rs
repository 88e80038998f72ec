//! HTTP error mapping for API handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fadebin_core::AppError;
use serde_json::json;

/// Wrapper that renders [`AppError`] as a JSON HTTP response.
///
/// `Expired` and `Exhausted` both map to 410 Gone but keep distinct
/// bodies, and stay distinct from the 404 for a missing id, so clients
/// can render a specific message for each case.
#[derive(Debug)]
pub struct HttpError(AppError);

impl From<AppError> for HttpError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.0 {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Paste not found".to_string()),
            AppError::Expired => (StatusCode::GONE, "Paste has expired".to_string()),
            AppError::Exhausted => (
                StatusCode::GONE,
                "Paste has reached maximum views".to_string(),
            ),
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            err => {
                tracing::error!("Storage error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Storage error".to_string())
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
