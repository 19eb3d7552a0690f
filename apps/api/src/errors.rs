use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Layout measurement produced an unusable result (non-positive page
    /// budget, geometry out of range). The document cannot be paginated.
    #[error("Measurement error: {0}")]
    Measurement(String),

    /// A template failed while rendering one page. Contained per page by the
    /// renderer host; surfaces only when the whole document is unusable.
    #[error("Template render error in '{template_id}' page {page}: {message}")]
    TemplateRender {
        template_id: String,
        page: u32,
        message: String,
    },

    /// The external PDF capture service rejected or failed the request.
    #[error("PDF capture error: {0}")]
    PdfCapture(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required".to_string(),
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Measurement(msg) => {
                tracing::error!("Measurement error: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "MEASUREMENT_ERROR",
                    "The resume could not be laid out".to_string(),
                )
            }
            AppError::TemplateRender {
                template_id,
                page,
                message,
            } => {
                tracing::error!("Template '{template_id}' failed on page {page}: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "TEMPLATE_RENDER_ERROR",
                    format!("Template '{template_id}' failed to render"),
                )
            }
            AppError::PdfCapture(msg) => {
                tracing::error!("PDF capture error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "PDF_CAPTURE_ERROR",
                    "The PDF service failed to capture the document".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
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
