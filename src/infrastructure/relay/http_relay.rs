//! Form-encoded HTTP relay to a spreadsheet web app

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::RelayConfig;
use crate::domain::{DomainError, RelayError, RelayRecord, SpreadsheetRelay};

/// Posts each accepted registration as one form-encoded row
#[derive(Debug, Clone)]
pub struct HttpSpreadsheetRelay {
    url: String,
    http_client: Client,
}

impl HttpSpreadsheetRelay {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            url: url.into(),
            http_client,
        })
    }

    pub fn from_config(config: &RelayConfig) -> Result<Self, DomainError> {
        Self::new(&config.url, Duration::from_secs(config.timeout_secs))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SpreadsheetRelay for HttpSpreadsheetRelay {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn relay(&self, record: &RelayRecord) -> Result<(), RelayError> {
        let response = self
            .http_client
            .post(&self.url)
            .form(record.fields())
            .send()
            .await
            .map_err(|e| {
                let message = if e.is_timeout() {
                    "Request timed out".to_string()
                } else if e.is_connect() {
                    "Connection failed".to_string()
                } else {
                    format!("Request failed: {}", e)
                };

                warn!(team_id = %record.team_id(), error = %message, "Relay request failed");
                RelayError::Transport(message)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Status(status.as_u16()));
        }

        debug!(team_id = %record.team_id(), status = status.as_u16(), "Relay accepted row");
        Ok(())
    }
}
