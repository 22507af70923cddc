use log::debug;

use crate::models::{ErrorReason, ValidationVerdict};
use crate::processing::parse;
use crate::utils::mask;
use crate::validation::{CheckDigit, FieldValidator, NoCheckDigit};

/// Structural verdict for `raw` with no check-digit gate.
pub fn classify(raw: &str) -> ValidationVerdict {
    classify_with(raw, &NoCheckDigit)
}

/// Runs the gates in order and reports the first one that fails: format,
/// then each field range, then `check_digit`.
pub fn classify_with(raw: &str, check_digit: &dyn CheckDigit) -> ValidationVerdict {
    let fields = match parse(raw) {
        Ok(fields) => fields,
        Err(err) => {
            debug!("rejected {}: {}", mask(raw), err);
            return ValidationVerdict::Invalid(err.reason());
        }
    };

    if let Some(reason) = FieldValidator::first_violation(&fields) {
        debug!(
            "rejected {}: {:?} (all violations: {:?})",
            mask(raw),
            reason,
            FieldValidator::violations(&fields)
        );
        return ValidationVerdict::Invalid(reason);
    }

    if !check_digit.verify(raw) {
        debug!("rejected {}: check digit mismatch", mask(raw));
        return ValidationVerdict::Invalid(ErrorReason::InvalidCheckDigit);
    }

    ValidationVerdict::Valid
}
