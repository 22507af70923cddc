use serde::Serialize;

use crate::models::rules::Field;

/// Fields decoded from a 13-digit identity number.
///
/// Outside this crate the record can only come from [`crate::parse`], which
/// builds it after the input passed the format gate, so every field holds the
/// digits it was sliced from. Ranges are not guaranteed: a month of 13 parses
/// fine and is rejected later by classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdentifierFields {
    pub(crate) year_digits: u8,
    pub(crate) month: u8,
    pub(crate) day: u8,
    pub(crate) sequence_gender: u16,
    pub(crate) citizenship_digit: u8,
}

impl IdentifierFields {
    /// Last two digits of the birth year. The century is not encoded.
    pub fn year_digits(&self) -> u8 {
        self.year_digits
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn sequence_gender(&self) -> u16 {
        self.sequence_gender
    }

    pub fn citizenship_digit(&self) -> u8 {
        self.citizenship_digit
    }

    pub fn get(&self, field: Field) -> u16 {
        match field {
            Field::Year => self.year_digits.into(),
            Field::Month => self.month.into(),
            Field::Day => self.day.into(),
            Field::Sequence => self.sequence_gender,
            Field::Citizenship => self.citizenship_digit.into(),
        }
    }

    pub fn gender(&self) -> Gender {
        if self.sequence_gender < 5000 {
            Gender::Female
        } else {
            Gender::Male
        }
    }

    pub fn citizenship(&self) -> Option<Citizenship> {
        match self.citizenship_digit {
            0 => Some(Citizenship::Citizen),
            1 => Some(Citizenship::PermanentResident),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Citizenship {
    Citizen,
    PermanentResident,
}

/// Why an identity number was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorReason {
    /// Not exactly 13 ASCII digits.
    MalformedInput,
    InvalidMonth,
    InvalidDay,
    InvalidSequence,
    InvalidCitizenship,
    /// Reported by a caller supplied [`crate::validation::CheckDigit`].
    InvalidCheckDigit,
    /// One of the remote collaborators failed after structural validation passed.
    RemoteValidationFailed,
}

impl ErrorReason {
    pub const ALL: [ErrorReason; 7] = [
        ErrorReason::MalformedInput,
        ErrorReason::InvalidMonth,
        ErrorReason::InvalidDay,
        ErrorReason::InvalidSequence,
        ErrorReason::InvalidCitizenship,
        ErrorReason::InvalidCheckDigit,
        ErrorReason::RemoteValidationFailed,
    ];

    /// True for the reasons decided locally from the digits alone.
    pub fn is_structural(&self) -> bool {
        !matches!(self, ErrorReason::RemoteValidationFailed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", content = "reason", rename_all = "snake_case")]
pub enum ValidationVerdict {
    Valid,
    Invalid(ErrorReason),
}

impl ValidationVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationVerdict::Valid)
    }

    pub fn reason(&self) -> Option<ErrorReason> {
        match self {
            ValidationVerdict::Valid => None,
            ValidationVerdict::Invalid(reason) => Some(*reason),
        }
    }
}

impl From<Option<ErrorReason>> for ValidationVerdict {
    fn from(violation: Option<ErrorReason>) -> Self {
        match violation {
            Some(reason) => ValidationVerdict::Invalid(reason),
            None => ValidationVerdict::Valid,
        }
    }
}
