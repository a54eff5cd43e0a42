use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown workflow: {0}")]
    InvalidWorkflow(String),

    #[error("Incorrect code: {0}")]
    InvalidOtp(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error payload returned to terminals: a machine-readable code plus a
/// human-readable message.
#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "FAILED", msg.clone()),
            ApiError::InvalidWorkflow(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_WORKFLOW_ID", msg.clone())
            }
            ApiError::InvalidOtp(msg) => (StatusCode::BAD_REQUEST, "INVALID_OTP", msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "FAILED", msg.clone()),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "FAILED",
                    "An internal error occurred".into(),
                )
            }
        };

        let body = ErrorBody {
            code: code.into(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".into()),
            _ => ApiError::Internal(format!("Database error: {}", err)),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    e.message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
            })
            .collect();

        ApiError::Validation(messages.join("; "))
    }
}
