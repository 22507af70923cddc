use crate::models::{ErrorReason, IdentifierFields, SA_ID_RULES};

pub struct FieldValidator;

impl FieldValidator {
    /// Range-checks every field and returns the reason of the first one out
    /// of range, in year, month, day, sequence, citizenship order.
    pub fn first_violation(fields: &IdentifierFields) -> Option<ErrorReason> {
        SA_ID_RULES
            .iter()
            .find(|rule| !rule.accepts(fields.get(rule.field)))
            .map(|rule| rule.reason)
    }

    /// Every violated field, in gate order. Only the first is ever shown to
    /// a user; the rest are useful when logging a rejected number.
    pub fn violations(fields: &IdentifierFields) -> Vec<ErrorReason> {
        SA_ID_RULES
            .iter()
            .filter(|rule| !rule.accepts(fields.get(rule.field)))
            .map(|rule| rule.reason)
            .collect()
    }
}
