use regex::Regex;

pub fn validate_username(username: &str) -> bool {
    let re = Regex::new(r"^[a-zA-Z0-9_]+$").unwrap();
    re.is_match(username)
}

pub fn validate_generic(input: &str) -> bool {
    //* disallows dangerous characters (example: <, >, ', ", &, etc.)
    let re = Regex::new("^[^<>'\"&]+$").unwrap();
    re.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_accepts_word_characters() {
        assert!(validate_username("budi_123"));
        assert!(validate_username("Admin"));
    }

    #[test]
    fn username_rejects_spaces_and_symbols() {
        assert!(!validate_username("budi 123"));
        assert!(!validate_username("budi@home"));
        assert!(!validate_username(""));
    }

    #[test]
    fn generic_rejects_markup_characters() {
        assert!(validate_generic("plain text 42"));
        assert!(!validate_generic("<script>"));
        assert!(!validate_generic("a\"b"));
        assert!(!validate_generic(""));
    }
}
