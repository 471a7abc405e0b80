//! Error responses
//!
//! Every failure is rendered as `{ "success": false, "errors": { key: message } }`.
//! Internal faults are logged in full and answered with a generic message.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::registration::GENERAL_ERROR_KEY;
use crate::domain::DomainError;

/// Message returned for any unexpected fault
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Error body returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub errors: BTreeMap<String, String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error for a single key
    pub fn new(status: StatusCode, field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.into(), message.into());

        Self {
            status,
            response: ApiErrorResponse {
                success: false,
                errors,
            },
        }
    }

    /// Bad request attributed to a field
    pub fn bad_request(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, field, message)
    }

    /// Bad request not tied to a field
    pub fn general(message: impl Into<String>) -> Self {
        Self::bad_request(GENERAL_ERROR_KEY, message)
    }

    /// Internal server error with the generic message
    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            GENERAL_ERROR_KEY,
            INTERNAL_ERROR_MESSAGE,
        )
    }

    /// Message reported under a key, if any
    pub fn message(&self, field: &str) -> Option<&str> {
        self.response.errors.get(field).map(String::as_str)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Registration(e) => Self::bad_request(e.field(), e.to_string()),
            DomainError::Validation { message } => Self::general(message),
            DomainError::Configuration { .. } | DomainError::Internal { .. } => {
                error!(error = %err, "Registration request failed");
                Self::internal()
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let details: Vec<String> = self
            .response
            .errors
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect();

        write!(f, "{} ({})", self.status, details.join(", "))
    }
}

impl std::error::Error for ApiError {}
