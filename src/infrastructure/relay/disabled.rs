use async_trait::async_trait;

use crate::domain::{RelayError, RelayRecord, SpreadsheetRelay};

/// Relay used when no spreadsheet is configured
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledRelay;

#[async_trait]
impl SpreadsheetRelay for DisabledRelay {
    fn is_enabled(&self) -> bool {
        false
    }

    async fn relay(&self, _record: &RelayRecord) -> Result<(), RelayError> {
        Err(RelayError::Disabled)
    }
}
