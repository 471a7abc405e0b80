//! Infrastructure layer - Registration service, relay clients, logging and metrics

pub mod logging;
pub mod observability;
pub mod registration;
pub mod relay;
