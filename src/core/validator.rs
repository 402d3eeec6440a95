use crate::utils::error::ValidationError;
use lazy_static::lazy_static;
use regex::Regex;

/// Names are refused once they reach this many characters.
pub const MAX_NAME_LENGTH: usize = 255;

lazy_static! {
    static ref NAME_PATTERN: Regex = Regex::new(r"^[A-Za-z\s]*$").unwrap();
}

/// Checks a raw name. Rules are applied in order and the first failure wins.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::Empty);
    }

    if !NAME_PATTERN.is_match(name) {
        return Err(ValidationError::InvalidCharacters);
    }

    if name.chars().count() >= MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_letters_and_spaces() {
        assert!(validate_name("Alice").is_ok());
        assert!(validate_name("Mary Ann").is_ok());
        assert!(validate_name("Jean\tLuc").is_ok());
        // whitespace-only passes the pattern
        assert!(validate_name("   ").is_ok());
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(validate_name(""), Err(ValidationError::Empty));
    }

    #[test]
    fn test_digits_and_punctuation_rejected() {
        for name in ["Alice1", "O'Brien", "Jean-Luc", "Bob!", "42", "Ana.", "名前", "José"] {
            assert_eq!(
                validate_name(name),
                Err(ValidationError::InvalidCharacters),
                "{name}"
            );
        }
    }

    #[test]
    fn test_length_boundary() {
        let ok = "a".repeat(MAX_NAME_LENGTH - 1);
        assert!(validate_name(&ok).is_ok());

        let too_long = "a".repeat(MAX_NAME_LENGTH);
        assert_eq!(validate_name(&too_long), Err(ValidationError::TooLong));

        let spaced = "ab ".repeat(100);
        assert_eq!(validate_name(&spaced), Err(ValidationError::TooLong));
    }

    #[test]
    fn test_character_rule_checked_before_length() {
        let name = format!("{}1", "a".repeat(300));
        assert_eq!(validate_name(&name), Err(ValidationError::InvalidCharacters));
    }
}
