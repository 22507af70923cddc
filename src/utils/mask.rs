const MASK_CHARACTER: char = '*';
const VISIBLE_CHARACTERS: usize = 3;

/// Redacts everything but the last three characters, for log lines.
///
/// An identity number carries a birth date and gender, so it never appears
/// in logs in full. Inputs of three characters or fewer are redacted entirely.
pub fn mask(raw: &str) -> String {
    let len = raw.chars().count();
    if len <= VISIBLE_CHARACTERS {
        return MASK_CHARACTER.to_string().repeat(len);
    }

    let hidden = len - VISIBLE_CHARACTERS;
    raw.chars()
        .enumerate()
        .map(|(i, c)| if i < hidden { MASK_CHARACTER } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_keeps_last_three() {
        assert_eq!(mask("8001015009087"), "**********087");
    }

    #[test]
    fn test_mask_short_input() {
        assert_eq!(mask(""), "");
        assert_eq!(mask("12"), "**");
        assert_eq!(mask("123"), "***");
        assert_eq!(mask("1234"), "*234");
    }

    #[test]
    fn test_mask_counts_chars_not_bytes() {
        assert_eq!(mask("é1234"), "**234");
    }
}
