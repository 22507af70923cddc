use log::trace;

use crate::models::rules::rule_for;
use crate::models::{Field, IdentifierFields};
use crate::utils::{mask, ParseError};
use crate::validation::FormatValidator;

/// Splits an identity number into its fields.
///
/// The format gate runs first. Once it has passed, every slice is known to
/// be ASCII digits and decoding cannot fail, so there is exactly one way for
/// this to return an error.
pub fn parse(raw: &str) -> Result<IdentifierFields, ParseError> {
    if !FormatValidator::is_well_formed(raw) {
        return Err(ParseError::Malformed {
            length: raw.chars().count(),
        });
    }

    let digits = raw.as_bytes();
    let fields = IdentifierFields {
        year_digits: decode(digits, Field::Year) as u8,
        month: decode(digits, Field::Month) as u8,
        day: decode(digits, Field::Day) as u8,
        sequence_gender: decode(digits, Field::Sequence),
        citizenship_digit: decode(digits, Field::Citizenship) as u8,
    };
    trace!("parsed {}: {:?}", mask(raw), fields);

    Ok(fields)
}

// At most four digits, so the value fits in u16 and the narrowing casts
// above never truncate two-digit and one-digit fields.
fn decode(digits: &[u8], field: Field) -> u16 {
    digits[rule_for(field).offsets.clone()]
        .iter()
        .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'))
}
