//! Registration entities
//!
//! `RegistrationRequest` is the wire shape exchanged between the wizard and
//! the endpoint. Every field is optional so that absent or blank values can be
//! reported as validation errors instead of JSON decoding failures.
//! `Registration` is the validated form produced by `validate_registration`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::track::ProblemTrack;

/// Team size as sent on the wire: a JSON number or a decimal string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TeamSizeValue {
    Number(serde_json::Number),
    Text(String),
}

impl TeamSizeValue {
    /// Whether the value counts as filled in
    pub fn is_present(&self) -> bool {
        match self {
            Self::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Self::Text(s) => !s.trim().is_empty(),
        }
    }

    /// Integer value, if the input is a whole number
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for TeamSizeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u8> for TeamSizeValue {
    fn from(value: u8) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for TeamSizeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Member entry as sent on the wire
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl MemberRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            phone: Some(phone.into()),
        }
    }
}

/// Registration payload as sent on the wire
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_leader_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_leader_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_leader_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_size: Option<TeamSizeValue>,
    #[serde(default)]
    pub members: Vec<MemberRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_track: Option<String>,
}

/// Number of people on a team, leader included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TeamSize {
    Two,
    Three,
}

impl TeamSize {
    pub const MIN: u8 = 2;
    pub const MAX: u8 = 3;

    pub fn get(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Number of members besides the leader
    pub fn additional_members(self) -> usize {
        usize::from(self.get()) - 1
    }
}

impl TryFrom<i64> for TeamSize {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(other),
        }
    }
}

impl TryFrom<u8> for TeamSize {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
            .map_err(|v| format!("team size must be 2 or 3, got {}", v))
    }
}

impl From<TeamSize> for u8 {
    fn from(size: TeamSize) -> Self {
        size.get()
    }
}

impl fmt::Display for TeamSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// A validated team member
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A validated registration
///
/// `problem_track` keeps the submitted slug; `track` is set when the slug is
/// part of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub team_name: String,
    pub team_leader_name: String,
    pub team_leader_email: String,
    pub team_leader_phone: String,
    pub team_size: TeamSize,
    pub members: Vec<Member>,
    pub problem_track: String,
    #[serde(skip)]
    pub track: Option<ProblemTrack>,
}

impl Registration {
    /// The member at a 1-based team position (the leader is position 1)
    pub fn member_at(&self, position: usize) -> Option<&Member> {
        position
            .checked_sub(2)
            .and_then(|index| self.members.get(index))
    }
}
