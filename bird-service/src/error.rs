//! Error types and HTTP response conversion
//!
//! Every handler returns [`Result`], so axum converts any [`Error`] into a
//! response through the single [`IntoResponse`] implementation below. This is
//! the one place that decides what a failed request looks like on the wire.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::repository::{RepositoryError, RepositoryErrorKind};

/// Result type alias
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Service error types
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No resource matches the requested identifier
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity type, e.g. "Bird"
        entity: String,
        /// Identifier exactly as it appeared in the request
        id: String,
    },

    /// Resource conflict (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Structured store error
    #[error("{0}")]
    Repository(RepositoryError),
}

impl Error {
    /// Create a not-found error for the given entity type and identifier
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Returns true if this is a not-found failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Optional error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
        }
    }

    /// Create error response with a code
    pub fn with_code(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: Some(code.into()),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            Error::NotFound { entity, id } => {
                tracing::warn!(entity = %entity, id = %id, "Resource not found");
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new(format!("{} not found", entity)),
                )
            }

            Error::Conflict(msg) => (
                StatusCode::CONFLICT,
                ErrorResponse::with_code("CONFLICT", msg),
            ),

            Error::Repository(e) => {
                tracing::error!(
                    operation = %e.operation,
                    kind = %e.kind,
                    entity_type = ?e.entity_type,
                    entity_id = ?e.entity_id,
                    "Repository error: {}", e.message
                );

                // Internal details stay in the log
                let code = format!("REPOSITORY_{}", e.kind.to_string().to_uppercase());
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_code(code, "An internal error occurred"),
                )
            }

            Error::Config(e) => {
                tracing::error!("Configuration error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_code("CONFIG_ERROR", "Service misconfigured"),
                )
            }

            Error::Io(e) => {
                tracing::error!("I/O error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_code("IO_ERROR", "An internal error occurred"),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        // A row removed between lookup and write is still a plain miss
        match (err.kind, err.entity_type.as_deref(), err.entity_id.as_deref()) {
            (RepositoryErrorKind::NotFound, Some(entity), Some(id)) => Error::not_found(entity, id),
            _ => Error::Repository(err),
        }
    }
}
