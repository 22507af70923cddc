use std::ops::{Range, RangeInclusive};

use crate::models::ErrorReason;

/// Total number of characters in an identity number, check digit included.
pub const ID_LENGTH: usize = 13;

/// Offset of the trailing check digit. It is not decoded into the field record.
pub const CHECK_DIGIT_OFFSET: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Year,
    Month,
    Day,
    Sequence,
    Citizenship,
}

/// Where a field lives in the 13-digit string and which values it may take.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: Field,
    pub offsets: Range<usize>,
    pub allowed: RangeInclusive<u16>,
    pub reason: ErrorReason,
}

impl FieldRule {
    pub fn accepts(&self, value: u16) -> bool {
        self.allowed.contains(&value)
    }
}

/// Layout of a South African identity number, in gate order.
///
/// The classifier walks this table front to back and reports the reason of
/// the first rule that rejects its field, so reordering the entries changes
/// which error a user sees when several fields are wrong at once.
pub static SA_ID_RULES: [FieldRule; 5] = [
    // Two digits can't exceed 99; kept so a century rule has somewhere to go.
    // MalformedInput is a placeholder while this gate cannot fail. A rule
    // that can reject a year needs its own reason and message.
    FieldRule {
        field: Field::Year,
        offsets: 0..2,
        allowed: 0..=99,
        reason: ErrorReason::MalformedInput,
    },
    FieldRule {
        field: Field::Month,
        offsets: 2..4,
        allowed: 1..=12,
        reason: ErrorReason::InvalidMonth,
    },
    // Structural range only, no days-in-month or leap year check.
    FieldRule {
        field: Field::Day,
        offsets: 4..6,
        allowed: 1..=31,
        reason: ErrorReason::InvalidDay,
    },
    FieldRule {
        field: Field::Sequence,
        offsets: 6..10,
        allowed: 0..=9999,
        reason: ErrorReason::InvalidSequence,
    },
    FieldRule {
        field: Field::Citizenship,
        offsets: 10..11,
        allowed: 0..=1,
        reason: ErrorReason::InvalidCitizenship,
    },
];

pub fn rule_for(field: Field) -> &'static FieldRule {
    // Every Field variant has exactly one entry in the table.
    match field {
        Field::Year => &SA_ID_RULES[0],
        Field::Month => &SA_ID_RULES[1],
        Field::Day => &SA_ID_RULES[2],
        Field::Sequence => &SA_ID_RULES[3],
        Field::Citizenship => &SA_ID_RULES[4],
    }
}
