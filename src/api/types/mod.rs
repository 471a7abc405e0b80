//! Request and response types for the registration API

pub mod error;
pub mod json;
pub mod registration;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
pub use registration::{RegisterResponse, TrackResponse, TracksResponse};
