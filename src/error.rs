//! Application error type and its HTTP rendering.
//!
//! Every error is rendered as a flat JSON body:
//!
//! ```json
//! { "error": "URL inválida" }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::utils::url_normalizer::UrlNormalizationError;

/// Message returned when link creation fails for a non-validation reason.
pub const CREATE_LINK_FAILED: &str = "Erro ao criar link";

/// Message returned for database failures that escape a handler unmapped.
const DATABASE_FAILED: &str = "Erro interno";

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors produced by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Caller supplied bad input. Rendered as 400 with the message as-is.
    #[error("{0}")]
    Validation(String),

    /// A unique constraint rejected the write.
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true for errors caused by the caller's input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<UrlNormalizationError> for AppError {
    fn from(e: UrlNormalizationError) -> Self {
        Self::Validation(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match self {
            Self::Validation(message) | Self::Conflict(message) | Self::Internal(message) => {
                message
            }
            Self::Database(e) => {
                tracing::error!(error = %e, "Unhandled database error");
                DATABASE_FAILED.to_string()
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::conflict("x").status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_normalization_error_becomes_validation() {
        let err: AppError = UrlNormalizationError::Missing.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "URL é obrigatória");
    }

    #[test]
    fn test_database_error_is_not_validation() {
        assert!(!AppError::Database(sqlx::Error::PoolTimedOut).is_validation());
    }
}
