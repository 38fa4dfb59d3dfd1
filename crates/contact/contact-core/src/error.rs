//! Error types for the contact flow.

use serde::{Deserialize, Serialize};

/// Why a submission was refused before anything was sent.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ContactError {
    #[error("All fields are required")]
    MissingFields { fields: Vec<String> },

    #[error("Invalid email format")]
    InvalidEmail { email: String },

    #[error("Invalid request body: {reason}")]
    MalformedBody { reason: String },

    #[error("Missing configuration: {key}")]
    MissingConfig { key: String },
}

/// Failure to reach the form endpoint at all (DNS, TLS, connection reset...).
/// Non-2xx responses are not transport errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("transport error: {reason}")]
pub struct TransportError {
    pub reason: String,
}

impl TransportError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Failure reported by the outbound mail collaborator.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("mail delivery failed: {reason}")]
pub struct MailError {
    pub reason: String,
}

impl MailError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<askama::Error> for MailError {
    fn from(err: askama::Error) -> Self {
        Self::new(format!("render failed: {err}"))
    }
}

impl From<serde_json::Error> for ContactError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedBody {
            reason: err.to_string(),
        }
    }
}
