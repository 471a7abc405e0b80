//! Registration service
//!
//! Validates a submission, assigns it a team id and hands a copy to the
//! spreadsheet relay on a detached task. The relay outcome is logged and never
//! reaches the caller.

use std::sync::Arc;

use chrono::Utc;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::config::RegistrationConfig;
use crate::domain::{
    validate_registration, DomainError, RegistrationRequest, RelayRecord, SpreadsheetRelay,
    TeamId, ValidationOptions,
};
use crate::infrastructure::observability::{
    record_registration, record_relay_delivery, RegistrationOutcome,
};

/// Result of an accepted registration
#[derive(Debug)]
pub struct RegistrationReceipt {
    pub team_id: TeamId,
    /// Relay delivery running in the background; `None` when the relay is disabled
    pub relay_task: Option<JoinHandle<()>>,
}

/// Registration service
pub struct RegistrationService {
    relay: Arc<dyn SpreadsheetRelay>,
    options: ValidationOptions,
    team_id_prefix: String,
}

impl RegistrationService {
    pub fn new(
        relay: Arc<dyn SpreadsheetRelay>,
        options: ValidationOptions,
        team_id_prefix: impl Into<String>,
    ) -> Self {
        Self {
            relay,
            options,
            team_id_prefix: team_id_prefix.into(),
        }
    }

    pub fn from_config(relay: Arc<dyn SpreadsheetRelay>, config: &RegistrationConfig) -> Self {
        Self::new(relay, config.validation_options(), &config.team_id_prefix)
    }

    pub fn relay_enabled(&self) -> bool {
        self.relay.is_enabled()
    }

    /// Validate and accept a registration
    pub fn register(&self, request: &RegistrationRequest) -> Result<RegistrationReceipt, DomainError> {
        let registration = validate_registration(request, &self.options).map_err(|e| {
            info!(field = e.field(), reason = %e, "Registration rejected");
            record_registration(RegistrationOutcome::Rejected, Some(e.field()));
            e
        })?;

        let team_id = TeamId::generate(&self.team_id_prefix);
        let received_at = Utc::now();

        info!(
            team_id = %team_id,
            team_name = %registration.team_name,
            team_size = %registration.team_size,
            problem_track = %registration.problem_track,
            "Registration accepted"
        );
        record_registration(RegistrationOutcome::Accepted, None);

        let relay_task = if self.relay.is_enabled() {
            let record = RelayRecord::new(&team_id, &registration, received_at);
            Some(self.dispatch_relay(record))
        } else {
            None
        };

        Ok(RegistrationReceipt {
            team_id,
            relay_task,
        })
    }

    fn dispatch_relay(&self, record: RelayRecord) -> JoinHandle<()> {
        let relay = Arc::clone(&self.relay);

        tokio::spawn(async move {
            match relay.relay(&record).await {
                Ok(()) => {
                    info!(team_id = %record.team_id(), "Registration relayed to spreadsheet");
                    record_relay_delivery(true);
                }
                Err(e) => {
                    error!(team_id = %record.team_id(), error = %e, "Failed to relay registration");
                    record_relay_delivery(false);
                }
            }
        })
    }
}
