//! Four-step registration form
//!
//! Step checks are advisory: they keep obviously broken input from being
//! sent, but the endpoint re-validates everything it receives.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::registration::{is_present, is_valid_email, is_valid_phone};
use crate::domain::{MemberRequest, ProblemTrack, RegistrationRequest, TeamSizeValue};

use super::client::{ClientError, RegistrationClient};

/// Notice shown after a successful submission
pub const SUBMIT_SUCCESS_NOTICE: &str = "Registration submitted successfully!";

/// Notice shown after any failed submission
pub const SUBMIT_FAILURE_NOTICE: &str = "Registration failed. Please try again.";

/// Wizard screens in order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    #[default]
    TeamInfo,
    Members,
    Track,
    Review,
}

impl WizardStep {
    /// 1-based step number
    pub fn number(self) -> u8 {
        match self {
            Self::TeamInfo => 1,
            Self::Members => 2,
            Self::Track => 3,
            Self::Review => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::TeamInfo => "Team Info",
            Self::Members => "Members",
            Self::Track => "Problem Track",
            Self::Review => "Review",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::TeamInfo => Self::Members,
            Self::Members => Self::Track,
            Self::Track | Self::Review => Self::Review,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::TeamInfo | Self::Members => Self::TeamInfo,
            Self::Track => Self::Members,
            Self::Review => Self::Track,
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.title())
    }
}

/// Top-level form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    TeamName,
    TeamLeaderName,
    TeamLeaderEmail,
    TeamLeaderPhone,
    TeamSize,
    ProblemTrack,
}

/// Per-member form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberField {
    Name,
    Email,
    Phone,
}

/// One member as typed into the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Raw form state, everything kept as text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistrationForm {
    pub team_name: String,
    pub team_leader_name: String,
    pub team_leader_email: String,
    pub team_leader_phone: String,
    pub team_size: String,
    pub members: Vec<MemberForm>,
    pub problem_track: String,
}

impl RegistrationForm {
    /// Members the current team size asks for; 0 when the size is not a number
    pub fn required_members(&self) -> usize {
        self.team_size
            .trim()
            .parse::<usize>()
            .map(|size| size.saturating_sub(1))
            .unwrap_or(0)
    }

    /// Wire payload with exactly the members the team size asks for
    pub fn to_request(&self) -> RegistrationRequest {
        RegistrationRequest {
            team_name: Some(self.team_name.clone()),
            team_leader_name: Some(self.team_leader_name.clone()),
            team_leader_email: Some(self.team_leader_email.clone()),
            team_leader_phone: Some(self.team_leader_phone.clone()),
            team_size: Some(TeamSizeValue::Text(self.team_size.clone())),
            members: self
                .members
                .iter()
                .take(self.required_members())
                .map(|m| MemberRequest::new(&m.name, &m.email, &m.phone))
                .collect(),
            problem_track: Some(self.problem_track.clone()),
        }
    }
}

/// Errors reported by the wizard
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("Please fill in all required fields")]
    MissingFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid phone number (10-15 digits)")]
    InvalidPhone,

    #[error("Please fill in all team member details")]
    MemberIncomplete { position: usize },

    #[error("Please enter a valid email address for Member {position}")]
    MemberInvalidEmail { position: usize },

    #[error("Please enter a valid phone number for Member {position}")]
    MemberInvalidPhone { position: usize },

    #[error("Please select a problem statement")]
    TrackNotSelected,

    #[error("Please select a problem statement from the list")]
    UnknownTrack(String),

    #[error("Registration failed. Please try again.")]
    SubmitFailed(#[source] ClientError),
}

/// Result of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub team_id: String,
    pub notice: &'static str,
}

/// Step-gated registration form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormWizard {
    step: WizardStep,
    form: RegistrationForm,
}

impl From<RegistrationForm> for FormWizard {
    /// Start at the first step with a pre-filled form
    fn from(form: RegistrationForm) -> Self {
        Self {
            step: WizardStep::TeamInfo,
            form,
        }
    }
}

impl FormWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    /// Validate the current step and move forward; stays put on error
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        self.validate_step()?;
        self.step = self.step.next();
        Ok(self.step)
    }

    /// Move back one step without validation
    pub fn retreat(&mut self) -> WizardStep {
        self.step = self.step.previous();
        self.step
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        let target = match field {
            FormField::TeamName => &mut self.form.team_name,
            FormField::TeamLeaderName => &mut self.form.team_leader_name,
            FormField::TeamLeaderEmail => &mut self.form.team_leader_email,
            FormField::TeamLeaderPhone => &mut self.form.team_leader_phone,
            FormField::TeamSize => &mut self.form.team_size,
            FormField::ProblemTrack => &mut self.form.problem_track,
        };
        *target = value;
    }

    /// Set a member field; `index` 0 is the first member after the leader.
    /// The list grows with blank members when `index` is past its end.
    pub fn update_member(&mut self, index: usize, field: MemberField, value: impl Into<String>) {
        if index >= self.form.members.len() {
            self.form.members.resize_with(index + 1, MemberForm::default);
        }

        let member = &mut self.form.members[index];
        let target = match field {
            MemberField::Name => &mut member.name,
            MemberField::Email => &mut member.email,
            MemberField::Phone => &mut member.phone,
        };
        *target = value.into();
    }

    /// Payload that `submit` would send
    pub fn payload(&self) -> RegistrationRequest {
        self.form.to_request()
    }

    /// Send the form once. Success resets the wizard; failure leaves it as is.
    pub async fn submit(
        &mut self,
        client: &dyn RegistrationClient,
    ) -> Result<Submission, WizardError> {
        match client.register(&self.payload()).await {
            Ok(response) => {
                info!(team_id = %response.team_id, "Registration submitted");
                *self = Self::default();
                Ok(Submission {
                    team_id: response.team_id,
                    notice: SUBMIT_SUCCESS_NOTICE,
                })
            }
            Err(e) => {
                warn!(error = %e, "Registration submission failed");
                Err(WizardError::SubmitFailed(e))
            }
        }
    }

    fn validate_step(&self) -> Result<(), WizardError> {
        match self.step {
            WizardStep::TeamInfo => self.validate_team_info(),
            WizardStep::Members => self.validate_members(),
            WizardStep::Track => self.validate_track(),
            WizardStep::Review => Ok(()),
        }
    }

    fn validate_team_info(&self) -> Result<(), WizardError> {
        let form = &self.form;
        let required = [
            &form.team_name,
            &form.team_leader_name,
            &form.team_leader_email,
            &form.team_leader_phone,
            &form.team_size,
        ];
        if !required.iter().all(|value| is_present(Some(value.as_str()))) {
            return Err(WizardError::MissingFields);
        }

        if !is_valid_email(&form.team_leader_email) {
            return Err(WizardError::InvalidEmail);
        }

        if !is_valid_phone(&form.team_leader_phone) {
            return Err(WizardError::InvalidPhone);
        }

        Ok(())
    }

    fn validate_members(&self) -> Result<(), WizardError> {
        let blank = MemberForm::default();

        for index in 0..self.form.required_members() {
            let position = index + 2;
            let member = self.form.members.get(index).unwrap_or(&blank);

            let complete = [&member.name, &member.email, &member.phone]
                .iter()
                .all(|value| is_present(Some(value.as_str())));
            if !complete {
                return Err(WizardError::MemberIncomplete { position });
            }

            if !is_valid_email(&member.email) {
                return Err(WizardError::MemberInvalidEmail { position });
            }

            if !is_valid_phone(&member.phone) {
                return Err(WizardError::MemberInvalidPhone { position });
            }
        }

        Ok(())
    }

    fn validate_track(&self) -> Result<(), WizardError> {
        let track = self.form.problem_track.trim();
        if track.is_empty() {
            return Err(WizardError::TrackNotSelected);
        }

        track
            .parse::<ProblemTrack>()
            .map(|_| ())
            .map_err(|_| WizardError::UnknownTrack(track.to_string()))
    }
}
