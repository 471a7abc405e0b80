//! Panic handler for `CatchPanicLayer`

use std::any::Any;

use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::api::types::ApiError;

/// Turn a handler panic into the generic 500 body. The panic message is logged only.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!(panic = %detail, "Request handler panicked");
    ApiError::internal().into_response()
}
