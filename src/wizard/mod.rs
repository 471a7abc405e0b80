//! Client-side registration wizard
//!
//! `FormWizard` holds the form state and gates each step; `RegistrationClient`
//! is the seam to the registration endpoint.

pub mod client;
pub mod form;

pub use client::{ClientError, HttpRegistrationClient, RegistrationClient};
pub use form::{
    FormField, FormWizard, MemberField, MemberForm, RegistrationForm, Submission, WizardError,
    WizardStep, SUBMIT_FAILURE_NOTICE, SUBMIT_SUCCESS_NOTICE,
};
