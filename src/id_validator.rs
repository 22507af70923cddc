use crate::models::{IdentifierFields, ValidationVerdict};
use crate::processing;
use crate::utils::{IdCheckError, ParseError};
use crate::validation::{self, CheckDigit, NoCheckDigit};
use crate::verification::{self, RemoteIdService};

/// Entry point for UI callers: parse, classify, describe, and hand valid
/// numbers to the remote services.
pub struct IdNumberValidator {
    check_digit: Box<dyn CheckDigit>,
}

impl IdNumberValidator {
    pub fn new() -> Self {
        IdNumberValidator {
            check_digit: Box::new(NoCheckDigit),
        }
    }

    /// Adds a check-digit gate after the field range checks.
    pub fn with_check_digit(check_digit: impl CheckDigit + 'static) -> Self {
        IdNumberValidator {
            check_digit: Box::new(check_digit),
        }
    }

    pub fn parse(&self, raw: &str) -> Result<IdentifierFields, ParseError> {
        processing::parse(raw)
    }

    pub fn classify(&self, raw: &str) -> ValidationVerdict {
        validation::classify_with(raw, self.check_digit.as_ref())
    }

    /// The message to show for `raw`, or `None` if it is valid.
    pub fn message(&self, raw: &str) -> Option<String> {
        validation::verdict_message(&self.classify(raw))
    }

    pub fn check_remote<S: RemoteIdService>(
        &self,
        raw: &str,
        service: &S,
    ) -> Result<S::Payload, IdCheckError> {
        verification::check_remote_with(raw, self.check_digit.as_ref(), service)
    }
}

impl Default for IdNumberValidator {
    fn default() -> Self {
        Self::new()
    }
}
