//! Hackathon team registration
//!
//! A four-step client wizard collects a team's details and submits them once
//! to a stateless endpoint. The endpoint validates the payload, assigns a team
//! identifier and forwards the row to a spreadsheet service on a best-effort
//! basis.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod wizard;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::DomainError;
use infrastructure::registration::RegistrationService;
use infrastructure::relay::create_relay;
use tracing::info;

/// Create the application state from configuration
pub fn create_app_state(config: &AppConfig) -> Result<AppState, DomainError> {
    let relay = create_relay(&config.relay)?;
    let service = RegistrationService::from_config(relay, &config.registration);

    info!(
        relay_enabled = service.relay_enabled(),
        enforce_track_catalog = config.registration.enforce_track_catalog,
        "Registration service configured"
    );

    Ok(AppState::new(Arc::new(service)))
}
