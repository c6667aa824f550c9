use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::orders::client::OrderApiError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// An unavailable price estimate is not an error: handlers answer it with a
/// `null` quotation or a zero price.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Order backend error: {0}")]
    Upstream(#[from] OrderApiError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Upstream(e @ OrderApiError::Api { message, .. }) if e.is_rejection() => {
                // Pass the backend's rejection of the order through to the caller.
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "ORDER_REJECTED",
                    message.clone(),
                )
            }
            AppError::Upstream(e) => {
                tracing::error!("Order backend error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "The order service is unavailable".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
