//! Track catalog endpoint

use crate::api::types::{Json, TracksResponse};

/// GET /tracks
pub async fn list_tracks() -> Json<TracksResponse> {
    Json(TracksResponse::catalog())
}
