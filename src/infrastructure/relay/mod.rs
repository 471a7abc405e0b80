//! Spreadsheet relay implementations

mod disabled;
mod http_relay;

pub use disabled::DisabledRelay;
pub use http_relay::HttpSpreadsheetRelay;

use std::sync::Arc;

use crate::config::RelayConfig;
use crate::domain::{DomainError, SpreadsheetRelay};

/// Build the relay described by the configuration
pub fn create_relay(config: &RelayConfig) -> Result<Arc<dyn SpreadsheetRelay>, DomainError> {
    config.validate()?;

    if !config.enabled {
        tracing::info!("Spreadsheet relay disabled");
        return Ok(Arc::new(DisabledRelay));
    }

    tracing::info!(url = %config.url, "Spreadsheet relay enabled");
    Ok(Arc::new(HttpSpreadsheetRelay::from_config(config)?))
}
