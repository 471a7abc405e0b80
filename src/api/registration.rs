//! Registration endpoint

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, RegisterResponse};
use crate::domain::RegistrationRequest;

/// POST /register
///
/// The relay task started by the service is detached; the response is sent
/// without waiting for it.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegistrationRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    debug!(members = request.members.len(), "Registration received");

    let receipt = state.registration_service.register(&request)?;

    Ok(Json(RegisterResponse::accepted(receipt.team_id)))
}
