//! Registration validation
//!
//! Rules run in a fixed order and stop at the first failure. The wizard reuses
//! the field checks for its advisory step validation; the endpoint runs
//! `validate_registration` on every request regardless of what the client did.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::entity::{Member, MemberRequest, Registration, RegistrationRequest, TeamSize};
use super::track::ProblemTrack;

/// `local@domain.tld`, no whitespace and a single `@`
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Optional leading `+`, then ASCII digits or separators
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+]?[0-9\-()]+$").unwrap());

/// Allowed phone length after whitespace removal, `+` included
const PHONE_LENGTH: std::ops::RangeInclusive<usize> = 10..=15;

/// Response key for errors not tied to a single field
pub const GENERAL_ERROR_KEY: &str = "general";

/// Errors that can occur during registration validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistrationValidationError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidLeaderEmail,

    #[error("Invalid phone format")]
    InvalidLeaderPhone,

    #[error("Team must have 2-3 members")]
    InvalidTeamSize,

    #[error("Invalid member count")]
    InvalidMemberCount { expected: usize, actual: usize },

    #[error("Member {position} details incomplete")]
    MemberIncomplete { position: usize },

    #[error("Member {position} has invalid email")]
    MemberInvalidEmail { position: usize },

    #[error("Member {position} has invalid phone")]
    MemberInvalidPhone { position: usize },

    #[error("Unknown problem track")]
    UnknownTrack(String),
}

impl RegistrationValidationError {
    /// Key the error is reported under in the response body
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingFields => GENERAL_ERROR_KEY,
            Self::InvalidLeaderEmail => "teamLeaderEmail",
            Self::InvalidLeaderPhone => "teamLeaderPhone",
            Self::InvalidTeamSize => "teamSize",
            Self::InvalidMemberCount { .. }
            | Self::MemberIncomplete { .. }
            | Self::MemberInvalidEmail { .. }
            | Self::MemberInvalidPhone { .. } => "members",
            Self::UnknownTrack(_) => "problemTrack",
        }
    }
}

/// Knobs for the server-side rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Reject `problemTrack` values missing from the catalog
    pub enforce_track_catalog: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            enforce_track_catalog: true,
        }
    }
}

/// Whether a text field counts as filled in
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Phone numbers are checked after removing all whitespace
pub fn is_valid_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_LENGTH.contains(&compact.chars().count()) && PHONE_PATTERN.is_match(&compact)
}

/// Validate a single member at its 1-based team position
pub fn validate_member(
    member: &MemberRequest,
    position: usize,
) -> Result<Member, RegistrationValidationError> {
    let (Some(name), Some(email), Some(phone)) = (
        present(member.name.as_deref()),
        present(member.email.as_deref()),
        present(member.phone.as_deref()),
    ) else {
        return Err(RegistrationValidationError::MemberIncomplete { position });
    };

    if !is_valid_email(email) {
        return Err(RegistrationValidationError::MemberInvalidEmail { position });
    }

    if !is_valid_phone(phone) {
        return Err(RegistrationValidationError::MemberInvalidPhone { position });
    }

    Ok(Member {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
    })
}

/// Validate a full registration payload
pub fn validate_registration(
    request: &RegistrationRequest,
    options: &ValidationOptions,
) -> Result<Registration, RegistrationValidationError> {
    let (
        Some(team_name),
        Some(team_leader_name),
        Some(team_leader_email),
        Some(team_leader_phone),
        Some(team_size),
        Some(problem_track),
    ) = (
        present(request.team_name.as_deref()),
        present(request.team_leader_name.as_deref()),
        present(request.team_leader_email.as_deref()),
        present(request.team_leader_phone.as_deref()),
        request.team_size.as_ref().filter(|size| size.is_present()),
        present(request.problem_track.as_deref()),
    )
    else {
        return Err(RegistrationValidationError::MissingFields);
    };

    if !is_valid_email(team_leader_email) {
        return Err(RegistrationValidationError::InvalidLeaderEmail);
    }

    if !is_valid_phone(team_leader_phone) {
        return Err(RegistrationValidationError::InvalidLeaderPhone);
    }

    let team_size = team_size
        .as_integer()
        .and_then(|n| TeamSize::try_from(n).ok())
        .ok_or(RegistrationValidationError::InvalidTeamSize)?;

    let expected = team_size.additional_members();
    if request.members.len() != expected {
        return Err(RegistrationValidationError::InvalidMemberCount {
            expected,
            actual: request.members.len(),
        });
    }

    let members = request
        .members
        .iter()
        .enumerate()
        .map(|(index, member)| validate_member(member, index + 2))
        .collect::<Result<Vec<_>, _>>()?;

    let track = problem_track.parse::<ProblemTrack>().ok();
    if options.enforce_track_catalog && track.is_none() {
        return Err(RegistrationValidationError::UnknownTrack(
            problem_track.to_string(),
        ));
    }

    Ok(Registration {
        team_name: team_name.to_string(),
        team_leader_name: team_leader_name.to_string(),
        team_leader_email: team_leader_email.to_string(),
        team_leader_phone: team_leader_phone.to_string(),
        team_size,
        members,
        problem_track: problem_track.to_string(),
        track,
    })
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
