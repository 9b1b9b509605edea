//! Error types and error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::forms::ValidationErrors;

/// Admin framework error type
#[derive(Debug, Error)]
pub enum AdminError {
    /// Bad request error
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Not Found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// No action with this URI key is registered on the resource
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// A record with this primary key already exists
    #[error("Conflict: {0}")]
    Conflict(String),

    /// No resource is registered under this name
    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    /// Submitted data failed field validation
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// A table or column name that is not a plain SQL identifier
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Database error
    #[cfg(feature = "postgres")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AdminError {
    /// HTTP status code this error maps to
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::InvalidIdentifier(_) | Self::Serialization(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) | Self::UnknownAction(_) | Self::UnknownResource(_) => {
                StatusCode::NOT_FOUND
            }
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            #[cfg(feature = "postgres")]
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Admin request failed");
        } else {
            tracing::debug!(error = %self, "Admin request rejected");
        }

        let body = match &self {
            Self::Validation(errors) => json!({
                "type": "error",
                "message": self.to_string(),
                "errors": errors,
            }),
            // Internal details stay in the logs
            _ if status.is_server_error() => json!({
                "type": "error",
                "message": "Internal server error",
            }),
            _ => json!({
                "type": "error",
                "message": self.to_string(),
            }),
        };

        (status, Json(body)).into_response()
    }
}
