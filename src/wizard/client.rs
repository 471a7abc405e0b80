//! Submission client used by the wizard

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

#[cfg(test)]
use mockall::automock;

use crate::api::types::{ApiErrorResponse, RegisterResponse};
use crate::domain::RegistrationRequest;

/// Errors from a submission attempt
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Registration rejected with HTTP status {status}")]
    Rejected {
        status: u16,
        errors: BTreeMap<String, String>,
    },

    #[error("Unexpected HTTP status {0}")]
    UnexpectedStatus(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Client configuration error: {0}")]
    Configuration(String),
}

/// Sends an assembled registration to the endpoint
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RegistrationClient: Send + Sync {
    async fn register(&self, request: &RegistrationRequest)
        -> Result<RegisterResponse, ClientError>;
}

/// JSON client posting to `{base_url}/register`
#[derive(Debug, Clone)]
pub struct HttpRegistrationClient {
    endpoint: String,
    http_client: Client,
}

impl HttpRegistrationClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: format!("{}/register", base_url.trim_end_matches('/')),
            http_client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RegistrationClient for HttpRegistrationClient {
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegisterResponse, ClientError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(request)
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

                warn!(endpoint = %self.endpoint, error = %message, "Registration request failed");
                ClientError::Transport(message)
            })?;

        let status = response.status();
        if status.is_success() {
            let body = response
                .json::<RegisterResponse>()
                .await
                .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

            debug!(team_id = %body.team_id, "Registration accepted");
            return Ok(body);
        }

        match response.json::<ApiErrorResponse>().await {
            Ok(body) => Err(ClientError::Rejected {
                status: status.as_u16(),
                errors: body.errors,
            }),
            Err(_) => Err(ClientError::UnexpectedStatus(status.as_u16())),
        }
    }
}
