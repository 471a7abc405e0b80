use serde::Deserialize;

use crate::domain::{DomainError, ValidationOptions};
use crate::infrastructure::observability::ObservabilityConfig;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub registration: RegistrationConfig,
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Registration rules
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationConfig {
    /// Prefix of generated team identifiers
    #[serde(default = "default_team_id_prefix")]
    pub team_id_prefix: String,
    /// Reject problem tracks missing from the catalog
    #[serde(default = "default_true")]
    pub enforce_track_catalog: bool,
}

/// Spreadsheet relay settings
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Web app URL accepting form-encoded rows
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_relay_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_team_id_prefix() -> String {
    "nutpam-2025".to_string()
}

fn default_true() -> bool {
    true
}

fn default_relay_timeout_secs() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            team_id_prefix: default_team_id_prefix(),
            enforce_track_catalog: true,
        }
    }
}

impl RegistrationConfig {
    pub fn validation_options(&self) -> ValidationOptions {
        ValidationOptions {
            enforce_track_catalog: self.enforce_track_catalog,
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: String::new(),
            timeout_secs: default_relay_timeout_secs(),
        }
    }
}

impl RelayConfig {
    /// Reject an enabled relay without a usable URL
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.enabled {
            return Ok(());
        }

        if self.url.is_empty() {
            return Err(DomainError::configuration(
                "relay.url is required when the relay is enabled",
            ));
        }

        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(DomainError::configuration(
                "relay.url must start with http:// or https://",
            ));
        }

        if self.timeout_secs == 0 {
            return Err(DomainError::configuration(
                "relay.timeout_secs must be greater than zero",
            ));
        }

        Ok(())
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.registration.team_id_prefix, "nutpam-2025");
        assert!(config.registration.enforce_track_catalog);
        assert!(!config.relay.enabled);
        assert_eq!(config.relay.timeout_secs, 30);
    }

    #[test]
    fn test_deserialize_partial_sections() {
        let source = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                [relay]
                enabled = true
                url = "https://script.example.com/exec"

                [registration]
                enforce_track_catalog = false
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let config: AppConfig = source.try_deserialize().unwrap();

        assert!(config.relay.enabled);
        assert_eq!(config.relay.timeout_secs, 30);
        assert!(!config.registration.enforce_track_catalog);
        assert_eq!(config.registration.team_id_prefix, "nutpam-2025");
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.relay.validate().is_ok());
    }

    #[test]
    fn test_disabled_relay_needs_no_url() {
        assert!(RelayConfig::default().validate().is_ok());
    }

    #[test]
    fn test_enabled_relay_requires_http_url() {
        let missing = RelayConfig {
            enabled: true,
            ..Default::default()
        };
        assert!(matches!(
            missing.validate(),
            Err(DomainError::Configuration { .. })
        ));

        let ftp = RelayConfig {
            enabled: true,
            url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(ftp.validate().is_err());
    }

    #[test]
    fn test_validation_options_follow_config() {
        let config = RegistrationConfig {
            enforce_track_catalog: false,
            ..Default::default()
        };
        assert!(!config.validation_options().enforce_track_catalog);
    }
}
