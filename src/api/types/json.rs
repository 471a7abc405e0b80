//! Custom JSON extractor that reports rejections in the registration error format

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::ApiError;

/// Message returned for bodies that cannot be decoded
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Wrapper around `axum::Json` whose rejection is an `ApiError`
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Consume the extractor and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// JSON rejection rendered as a `general` error
#[derive(Debug)]
pub struct JsonRejection {
    detail: String,
}

impl IntoResponse for JsonRejection {
    fn into_response(self) -> Response {
        debug!(detail = %self.detail, "Rejected request body");
        ApiError::general(INVALID_BODY_MESSAGE).into_response()
    }
}

/// The body is decoded whatever the `Content-Type` header says
impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| JsonRejection {
                detail: format!("Failed to read request body: {}", e.body_text()),
            })?;

        serde_json::from_slice(&body)
            .map(Json)
            .map_err(|e| JsonRejection {
                detail: format!("Invalid JSON: {}", e),
            })
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}
