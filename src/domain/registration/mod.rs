//! Registration domain module
//!
//! A registration is built by the wizard, sent once, validated by the endpoint
//! and then forgotten. Nothing here is persisted.

mod entity;
mod team_id;
mod track;
mod validation;

pub use entity::{
    Member, MemberRequest, Registration, RegistrationRequest, TeamSize, TeamSizeValue,
};
pub use team_id::TeamId;
pub use track::{ProblemTrack, UnknownTrack, TRACK_CATALOG_VERSION};
pub use validation::{
    is_present, is_valid_email, is_valid_phone, validate_member, validate_registration,
    RegistrationValidationError, ValidationOptions, GENERAL_ERROR_KEY,
};
