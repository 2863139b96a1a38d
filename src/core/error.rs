//! Typed error handling for the biztime API
//!
//! Every handler returns [`BizResult`]. Failures short-circuit the handler and
//! are translated into a status code and a JSON body at the HTTP boundary:
//!
//! ```json
//! { "error": { "message": "Company code 'ibm' not found", "status": 404 } }
//! ```
//!
//! # Error Categories
//!
//! - [`BizError::NotFound`]: the addressed key has no row (404)
//! - [`BizError::BadRequest`]: missing or malformed caller input, including
//!   store-level rejections caused by that input (400)
//! - [`BizError::Internal`]: unexpected store failures and data-integrity
//!   anomalies (500)
//!
//! Store backends report failures as [`StoreError`]; the conversion into
//! [`BizError`] only blames the caller for errors known to stem from the
//! request payload (constraint violations and type rejections).

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::core::entity::EntityKind;

/// The error type returned by every route handler
#[derive(Debug, Error)]
pub enum BizError {
    /// The addressed resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// The request body is missing, malformed, or rejected by the store
    #[error("{0}")]
    BadRequest(String),

    /// Unexpected failure that is not the caller's fault
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BizError {
    /// A point lookup for `key` returned zero rows
    pub fn missing(kind: EntityKind, key: impl fmt::Display) -> Self {
        BizError::NotFound(format!(
            "{} {} '{}' not found",
            kind,
            kind.key_name(),
            key
        ))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        BizError::BadRequest(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        BizError::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BizError::NotFound(_) => StatusCode::NOT_FOUND,
            BizError::BadRequest(_) => StatusCode::BAD_REQUEST,
            BizError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to the serializable error body
    ///
    /// Internal details stay in the logs; clients only see a generic message.
    pub fn to_response(&self) -> ErrorResponse {
        let status = self.status_code();
        let message = match self {
            BizError::Internal(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        };

        ErrorResponse {
            error: ErrorDetail {
                message,
                status: status.as_u16(),
            },
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Human-readable error message
    pub message: String,
    /// Mirrors the HTTP status code of the response
    pub status: u16,
}

impl IntoResponse for BizError {
    fn into_response(self) -> Response {
        match &self {
            BizError::Internal(detail) => tracing::error!(error = %detail, "internal server error"),
            BizError::BadRequest(message) => tracing::debug!(%message, "rejected request"),
            BizError::NotFound(message) => tracing::debug!(%message, "resource not found"),
        }

        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

impl From<PathRejection> for BizError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(e) => BizError::BadRequest(e.body_text()),
            // A handler extracting a key its route does not declare
            other => BizError::Internal(other.body_text()),
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Which relational constraint a write violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    ForeignKey,
    NotNull,
    Check,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConstraintKind::Unique => "unique",
            ConstraintKind::ForeignKey => "foreign key",
            ConstraintKind::NotNull => "not-null",
            ConstraintKind::Check => "check",
        };
        f.write_str(name)
    }
}

/// Errors reported by store backends
#[derive(Debug, Error)]
pub enum StoreError {
    /// A write violated a schema constraint
    #[error("{message}")]
    Constraint {
        kind: ConstraintKind,
        message: String,
    },

    /// The store rejected a value's type or format
    #[error("{0}")]
    InvalidInput(String),

    /// Connectivity, protocol or other backend failure
    #[error("{backend} error: {message}")]
    Backend {
        backend: &'static str,
        message: String,
    },
}

impl StoreError {
    pub fn constraint(kind: ConstraintKind, message: impl Into<String>) -> Self {
        StoreError::Constraint {
            kind,
            message: message.into(),
        }
    }

    /// Whether the failure stems from the values supplied by the caller
    pub fn is_caller_fault(&self) -> bool {
        matches!(
            self,
            StoreError::Constraint { .. } | StoreError::InvalidInput(_)
        )
    }
}

impl From<StoreError> for BizError {
    fn from(err: StoreError) -> Self {
        if err.is_caller_fault() {
            BizError::BadRequest(err.to_string())
        } else {
            BizError::Internal(err.to_string())
        }
    }
}

// =============================================================================
// Result type aliases
// =============================================================================

/// Result type returned by route handlers
pub type BizResult<T> = Result<T, BizError>;

/// Result type returned by store backends
pub type StoreResult<T> = Result<T, StoreError>;
