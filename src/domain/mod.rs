//! Domain layer - Registration model, validation rules and relay contract

pub mod error;
pub mod registration;
pub mod relay;

pub use error::DomainError;
pub use registration::{
    validate_registration, Member, MemberRequest, ProblemTrack, Registration,
    RegistrationRequest, RegistrationValidationError, TeamId, TeamSize, TeamSizeValue,
    ValidationOptions,
};
pub use relay::{RelayError, RelayRecord, SpreadsheetRelay};
