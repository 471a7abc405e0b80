//! Registration and track catalog responses

use serde::{Deserialize, Serialize};

use crate::domain::registration::TRACK_CATALOG_VERSION;
use crate::domain::ProblemTrack;

/// Message returned with every accepted registration
pub const REGISTRATION_RECEIVED_MESSAGE: &str = "Registration received successfully";

/// Successful registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub team_id: String,
}

impl RegisterResponse {
    pub fn accepted(team_id: impl Into<String>) -> Self {
        Self {
            success: true,
            message: REGISTRATION_RECEIVED_MESSAGE.to_string(),
            team_id: team_id.into(),
        }
    }
}

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackResponse {
    pub number: usize,
    pub slug: String,
    pub title: String,
}

impl From<ProblemTrack> for TrackResponse {
    fn from(track: ProblemTrack) -> Self {
        Self {
            number: track.number(),
            slug: track.slug().to_string(),
            title: track.title().to_string(),
        }
    }
}

/// The full catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracksResponse {
    pub version: String,
    pub tracks: Vec<TrackResponse>,
}

impl TracksResponse {
    pub fn catalog() -> Self {
        Self {
            version: TRACK_CATALOG_VERSION.to_string(),
            tracks: ProblemTrack::ALL.into_iter().map(TrackResponse::from).collect(),
        }
    }
}
