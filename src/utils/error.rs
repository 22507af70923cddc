use thiserror::Error;

use crate::models::ErrorReason;

/// Returned by [`crate::parse`] when the input is not exactly 13 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed identity number: expected 13 decimal digits ({length} characters given)")]
    Malformed { length: usize },
}

impl ParseError {
    pub fn reason(&self) -> ErrorReason {
        match self {
            ParseError::Malformed { .. } => ErrorReason::MalformedInput,
        }
    }
}

/// Failure of the full check, structural or remote.
///
/// `Display` renders the message meant for the person who typed the number.
#[derive(Debug, Error)]
pub enum IdCheckError {
    #[error("{0}")]
    Invalid(ErrorReason),
    #[error("{}", ErrorReason::RemoteValidationFailed)]
    Remote(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IdCheckError {
    pub fn reason(&self) -> ErrorReason {
        match self {
            IdCheckError::Invalid(reason) => *reason,
            IdCheckError::Remote(_) => ErrorReason::RemoteValidationFailed,
        }
    }
}

impl From<ParseError> for IdCheckError {
    fn from(err: ParseError) -> Self {
        IdCheckError::Invalid(err.reason())
    }
}
