//! API error types with IntoResponse
//!
//! Errors are converted to JSON bodies of the form
//! `{"message": ..., "details"?: [...]}` with the matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::db::repos::DbError;
use crate::models::{ValidationError, Violation};

/// Message returned for every 500; the cause is only logged.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Message returned alongside validation details.
pub const INVALID_INPUT_MESSAGE: &str = "invalid item data";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn item_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            resource: "item",
            id: id.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<Violation>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(e) => {
                tracing::debug!("Rejected input: {}", e);
                ErrorBody {
                    message: INVALID_INPUT_MESSAGE.to_string(),
                    details: Some(e.violations().to_vec()),
                }
            }
            Self::NotFound { resource, id } => ErrorBody {
                message: format!("{} '{}' not found", resource, id),
                details: None,
            },
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                ErrorBody {
                    message: INTERNAL_ERROR_MESSAGE.to_string(),
                    details: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
