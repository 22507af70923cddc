use std::fmt;

use crate::models::{ErrorReason, ValidationVerdict};

/// Title shown above the message when a number is rejected.
pub const INVALID_ID_TITLE: &str = "Invalid ID Number";

const INVALID_ID_MESSAGE: &str = "The provided South African ID number is invalid";

impl ErrorReason {
    /// Text appended to the generic message for this reason.
    pub fn suffix(&self) -> &'static str {
        match self {
            ErrorReason::MalformedInput => "",
            ErrorReason::InvalidMonth => ", Invalid month.",
            ErrorReason::InvalidDay => ", Invalid day.",
            ErrorReason::InvalidSequence => ", Invalid gender number.",
            ErrorReason::InvalidCitizenship => ", Invalid citizen number.",
            ErrorReason::InvalidCheckDigit => ", Invalid check digit.",
            ErrorReason::RemoteValidationFailed => {
                " - Something went wrong while validating the ID."
            }
        }
    }
}

impl fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", INVALID_ID_MESSAGE, self.suffix())
    }
}

pub fn format_error(reason: ErrorReason) -> String {
    reason.to_string()
}

/// The message to display for a verdict, `None` when there is nothing to report.
pub fn verdict_message(verdict: &ValidationVerdict) -> Option<String> {
    verdict.reason().map(format_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_table() {
        assert_eq!(
            format_error(ErrorReason::MalformedInput),
            "The provided South African ID number is invalid"
        );
        assert_eq!(
            format_error(ErrorReason::InvalidMonth),
            "The provided South African ID number is invalid, Invalid month."
        );
        assert_eq!(
            format_error(ErrorReason::InvalidDay),
            "The provided South African ID number is invalid, Invalid day."
        );
        assert_eq!(
            format_error(ErrorReason::InvalidSequence),
            "The provided South African ID number is invalid, Invalid gender number."
        );
        assert_eq!(
            format_error(ErrorReason::InvalidCitizenship),
            "The provided South African ID number is invalid, Invalid citizen number."
        );
        assert_eq!(
            format_error(ErrorReason::RemoteValidationFailed),
            "The provided South African ID number is invalid - Something went wrong while validating the ID."
        );
    }

    #[test]
    fn test_format_error_is_total() {
        for reason in ErrorReason::ALL {
            let message = format_error(reason);
            assert!(!message.is_empty());
            assert!(message.starts_with(INVALID_ID_MESSAGE));
        }
    }

    #[test]
    fn test_valid_has_no_message() {
        assert_eq!(verdict_message(&ValidationVerdict::Valid), None);
        assert_eq!(
            verdict_message(&ValidationVerdict::Invalid(ErrorReason::InvalidDay)).as_deref(),
            Some("The provided South African ID number is invalid, Invalid day.")
        );
    }
}
