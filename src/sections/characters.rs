//! Character composition profile.

use serde::Serialize;

/// Composition of a password, one pass over its characters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterAnalysis {
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digits: bool,
    pub has_special: bool,
    pub lowercase_count: usize,
    pub uppercase_count: usize,
    pub digit_count: usize,
    pub special_count: usize,
    pub unique_chars: usize,
    /// `unique_chars / length`, 0 for the empty string.
    pub char_diversity: f64,
    /// How many of the four classes are present.
    pub character_types: u8,
}

/// Classifies every character as lowercase, uppercase, ASCII digit or special.
///
/// Non-ASCII letters count by their Unicode case; everything else that is not
/// an ASCII digit (spaces, punctuation, symbols) is special.
pub fn profile_characters(password: &str) -> CharacterAnalysis {
    let mut lowercase_count = 0;
    let mut uppercase_count = 0;
    let mut digit_count = 0;
    let mut special_count = 0;
    let mut seen = std::collections::HashSet::new();
    let mut length = 0usize;

    for c in password.chars() {
        length += 1;
        seen.insert(c);
        if c.is_lowercase() {
            lowercase_count += 1;
        } else if c.is_uppercase() {
            uppercase_count += 1;
        } else if c.is_ascii_digit() {
            digit_count += 1;
        } else {
            special_count += 1;
        }
    }

    let unique_chars = seen.len();
    let char_diversity = if length == 0 {
        0.0
    } else {
        unique_chars as f64 / length as f64
    };
    let character_types = [lowercase_count, uppercase_count, digit_count, special_count]
        .iter()
        .filter(|&&n| n > 0)
        .count() as u8;

    CharacterAnalysis {
        has_lowercase: lowercase_count > 0,
        has_uppercase: uppercase_count > 0,
        has_digits: digit_count > 0,
        has_special: special_count > 0,
        lowercase_count,
        uppercase_count,
        digit_count,
        special_count,
        unique_chars,
        char_diversity,
        character_types,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_only() {
        for pwd in ["a", "abc", "zzzz", "hello"] {
            let profile = profile_characters(pwd);
            assert!(profile.has_lowercase);
            assert!(!profile.has_uppercase);
            assert!(!profile.has_digits);
            assert!(!profile.has_special);
            assert_eq!(profile.character_types, 1);
        }
    }

    #[test]
    fn test_all_classes() {
        let profile = profile_characters("Password1!");
        assert!(profile.has_lowercase && profile.has_uppercase);
        assert!(profile.has_digits && profile.has_special);
        assert_eq!(profile.lowercase_count, 7);
        assert_eq!(profile.uppercase_count, 1);
        assert_eq!(profile.digit_count, 1);
        assert_eq!(profile.special_count, 1);
        assert_eq!(profile.character_types, 4);
        // "ss" collapses to one
        assert_eq!(profile.unique_chars, 9);
        assert!((profile.char_diversity - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_space_and_unicode() {
        let profile = profile_characters("é É 7");
        assert!(profile.has_lowercase);
        assert!(profile.has_uppercase);
        assert!(profile.has_digits);
        assert_eq!(profile.special_count, 2);
    }

    #[test]
    fn test_empty_string() {
        let profile = profile_characters("");
        assert_eq!(profile.unique_chars, 0);
        assert_eq!(profile.char_diversity, 0.0);
        assert_eq!(profile.character_types, 0);
        assert!(!profile.has_lowercase);
    }
}
