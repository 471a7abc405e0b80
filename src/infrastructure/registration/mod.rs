//! Registration infrastructure

mod service;

pub use service::{RegistrationReceipt, RegistrationService};
