//! Submission identifiers
//!
//! Format: `<prefix>-<unix millis>-<6 chars of [0-9a-z]>`. Uniqueness is
//! best-effort; collisions are not checked.

use std::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

const SUFFIX_LENGTH: usize = 6;
const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Identifier handed back to a team after a successful registration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(String);

impl TeamId {
    /// Generate an identifier for a submission received now
    pub fn generate(prefix: &str) -> Self {
        Self::generate_at(prefix, Utc::now(), &mut rand::thread_rng())
    }

    /// Generate an identifier for the given instant and random source
    pub fn generate_at<R: Rng + ?Sized>(prefix: &str, at: DateTime<Utc>, rng: &mut R) -> Self {
        let suffix: String = (0..SUFFIX_LENGTH)
            .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
            .collect();

        Self(format!("{}-{}-{}", prefix, at.timestamp_millis(), suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TeamId> for String {
    fn from(id: TeamId) -> Self {
        id.0
    }
}
