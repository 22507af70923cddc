use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // `\d` would also match non-ASCII digits, so the class is spelled out.
    static ref ID_NUMBER_PATTERN: Regex = Regex::new(r"^[0-9]{13}$").unwrap();
}

pub struct FormatValidator;

impl FormatValidator {
    /// True when `raw` is exactly 13 ASCII decimal digits.
    pub fn is_well_formed(raw: &str) -> bool {
        ID_NUMBER_PATTERN.is_match(raw)
    }
}
