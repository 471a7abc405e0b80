//! Spreadsheet relay contract
//!
//! After a registration is accepted it is forwarded to an external
//! spreadsheet service. Delivery is best-effort: the caller logs a
//! `RelayError` and moves on.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use crate::domain::registration::{Registration, TeamId};

/// Team positions that get their own columns in the sheet (leader is 1)
const MEMBER_POSITIONS: [usize; 2] = [2, 3];

/// Errors from a relay attempt
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("Relay transport error: {0}")]
    Transport(String),

    #[error("Relay returned HTTP status {0}")]
    Status(u16),

    #[error("Relay is disabled")]
    Disabled,
}

/// One spreadsheet row, flattened to fixed column names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayRecord {
    fields: Vec<(String, String)>,
}

impl RelayRecord {
    /// Flatten an accepted registration into sheet columns
    pub fn new(team_id: &TeamId, registration: &Registration, received_at: DateTime<Utc>) -> Self {
        let mut fields = vec![
            (
                "timestamp".to_string(),
                received_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            ),
            ("teamId".to_string(), team_id.to_string()),
            ("teamName".to_string(), registration.team_name.clone()),
            (
                "teamLeaderName".to_string(),
                registration.team_leader_name.clone(),
            ),
            (
                "teamLeaderEmail".to_string(),
                registration.team_leader_email.clone(),
            ),
            (
                "teamLeaderPhone".to_string(),
                registration.team_leader_phone.clone(),
            ),
            ("teamSize".to_string(), registration.team_size.to_string()),
        ];

        for position in MEMBER_POSITIONS {
            let (name, email, phone) = registration
                .member_at(position)
                .map(|m| (m.name.clone(), m.email.clone(), m.phone.clone()))
                .unwrap_or_default();

            fields.push((format!("member{}Name", position), name));
            fields.push((format!("member{}Email", position), email));
            fields.push((format!("member{}Phone", position), phone));
        }

        fields.push((
            "problemTrack".to_string(),
            registration.problem_track.clone(),
        ));

        Self { fields }
    }

    /// Form fields in column order
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Value of a single column
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn team_id(&self) -> &str {
        self.get("teamId").unwrap_or_default()
    }
}

/// Destination for accepted registrations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpreadsheetRelay: Send + Sync {
    /// Whether the relay will actually deliver anything
    fn is_enabled(&self) -> bool;

    /// Deliver one row
    async fn relay(&self, record: &RelayRecord) -> Result<(), RelayError>;
}
