//! Pattern analysis section - detects weak structures in a password.

use serde::Serialize;

use super::keyboard::find_keyboard_patterns;
use crate::dictionary::find_dictionary_words;
use crate::wordlist::LEET_TABLE;

/// Shortest run reported as a repeat, sequence or keyboard walk.
pub const MIN_RUN_LENGTH: usize = 3;

/// Well-known password fragments, matched case-insensitively.
pub const COMMON_PATTERNS: &[&str] = &[
    "password", "123456", "qwerty", "abc123", "letmein", "admin", "welcome", "monkey", "dragon",
    "master",
];

/// Matches per pattern family; an empty list means no hit.
///
/// Families are independent: one substring may be reported by several.
/// Leet substitutions are informational and never count as a hit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PatternFindings {
    #[serde(rename = "has_common_patterns")]
    pub common_patterns: Vec<String>,
    #[serde(rename = "has_keyboard_patterns")]
    pub keyboard_patterns: Vec<String>,
    #[serde(rename = "has_repeated_chars")]
    pub repeated_chars: Vec<String>,
    #[serde(rename = "has_sequential_chars")]
    pub sequential_chars: Vec<String>,
    #[serde(rename = "contains_dictionary_words")]
    pub dictionary_words: Vec<String>,
    /// `"<glyph> -> <letter>"` for every leet glyph present.
    pub common_substitutions: Vec<String>,
}

impl PatternFindings {
    /// Number of penalized families with at least one match.
    pub fn families_hit(&self) -> usize {
        [
            &self.common_patterns,
            &self.keyboard_patterns,
            &self.repeated_chars,
            &self.sequential_chars,
            &self.dictionary_words,
        ]
        .iter()
        .filter(|family| !family.is_empty())
        .count()
    }
}

/// Runs every scan over the password.
pub fn detect_patterns(password: &str) -> PatternFindings {
    PatternFindings {
        common_patterns: find_common_patterns(password),
        keyboard_patterns: find_keyboard_patterns(password),
        repeated_chars: find_repeated_chars(password),
        sequential_chars: find_sequential_chars(password),
        dictionary_words: find_dictionary_words(password),
        common_substitutions: find_leet_substitutions(password),
    }
}

/// Leet glyphs present in the password, in table order. A glyph standing in
/// for several letters is reported once per letter.
pub fn find_leet_substitutions(password: &str) -> Vec<String> {
    LEET_TABLE
        .iter()
        .flat_map(|(letter, glyphs)| glyphs.iter().map(move |glyph| (*letter, *glyph)))
        .filter(|(_, glyph)| password.contains(*glyph))
        .map(|(letter, glyph)| format!("{} -> {}", glyph, letter))
        .collect()
}

pub fn find_common_patterns(password: &str) -> Vec<String> {
    let lower = password.to_lowercase();
    COMMON_PATTERNS
        .iter()
        .filter(|p| lower.contains(*p))
        .map(|p| p.to_string())
        .collect()
}

/// Maximal runs of one character repeated at least three times.
pub fn find_repeated_chars(password: &str) -> Vec<String> {
    let chars: Vec<char> = password.chars().collect();
    collect_runs(&chars, &chars, MIN_RUN_LENGTH, |a, b| (a == b).then_some(()))
}

/// Maximal ascending or descending runs of letters or digits, e.g. "abc", "321".
///
/// Letters compare case-insensitively; a letter never chains into a digit.
pub fn find_sequential_chars(password: &str) -> Vec<String> {
    let chars: Vec<char> = password.chars().collect();
    let keys: Vec<Option<(bool, i32)>> = chars
        .iter()
        .map(|c| {
            if c.is_ascii_digit() {
                Some((true, *c as i32))
            } else if c.is_ascii_alphabetic() {
                Some((false, c.to_ascii_lowercase() as i32))
            } else {
                None
            }
        })
        .collect();

    collect_runs(&chars, &keys, MIN_RUN_LENGTH, |a, b| match (a, b) {
        (Some((da, va)), Some((db, vb))) if da == db && (vb - va).abs() == 1 => Some(vb - va),
        _ => None,
    })
}

/// Scans `items` for maximal runs where every adjacent pair yields the same
/// step, returning the matching slices of `chars` as distinct strings.
///
/// `items[i]` must describe `chars[i]`.
pub(crate) fn collect_runs<T, D, F>(chars: &[char], items: &[T], min_len: usize, step: F) -> Vec<String>
where
    D: PartialEq,
    F: Fn(&T, &T) -> Option<D>,
{
    let mut found: Vec<String> = Vec::new();
    let mut i = 0;

    while i + 1 < items.len() {
        let Some(first) = step(&items[i], &items[i + 1]) else {
            i += 1;
            continue;
        };

        let mut j = i + 1;
        while j + 1 < items.len() && step(&items[j], &items[j + 1]).as_ref() == Some(&first) {
            j += 1;
        }

        if j - i + 1 >= min_len {
            let run: String = chars[i..=j].iter().collect();
            if !found.contains(&run) {
                found.push(run);
            }
        }
        // the last element of a run may open the next one
        i = j;
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_chars() {
        assert_eq!(find_repeated_chars("aaaa"), vec!["aaaa"]);
        assert_eq!(find_repeated_chars("x111y222"), vec!["111", "222"]);
        assert_eq!(find_repeated_chars("aaXaaa"), vec!["aaa"]);
        assert!(find_repeated_chars("aabb").is_empty());
    }

    #[test]
    fn test_repeated_chars_distinct() {
        assert_eq!(find_repeated_chars("zzz-zzz"), vec!["zzz"]);
    }

    #[test]
    fn test_sequential_chars() {
        assert_eq!(find_sequential_chars("abcdef"), vec!["abcdef"]);
        assert_eq!(find_sequential_chars("zyx987"), vec!["zyx", "987"]);
        assert_eq!(find_sequential_chars("abc123"), vec!["abc", "123"]);
        assert_eq!(find_sequential_chars("xAbCx"), vec!["AbC"]);
    }

    #[test]
    fn test_sequential_direction_change_splits() {
        // "123" then "321" share the 3
        assert_eq!(find_sequential_chars("12321"), vec!["123", "321"]);
    }

    #[test]
    fn test_sequential_ignores_non_alphanumeric() {
        assert!(find_sequential_chars("!\"#").is_empty());
        assert!(find_sequential_chars("ab").is_empty());
        assert!(find_sequential_chars("Password1!").is_empty());
    }

    #[test]
    fn test_common_patterns_case_insensitive() {
        assert_eq!(find_common_patterns("MyQWERTY!"), vec!["qwerty"]);
        assert_eq!(
            find_common_patterns("password123456"),
            vec!["password".to_string(), "123456".to_string()]
        );
        assert!(find_common_patterns("Tr0ub4dor&3").is_empty());
    }

    #[test]
    fn test_leet_substitutions() {
        assert_eq!(find_leet_substitutions("P@ssw0rd"), vec!["@ -> a", "0 -> o"]);
        assert_eq!(find_leet_substitutions("h1"), vec!["1 -> i", "1 -> l"]);
        assert!(find_leet_substitutions("plain").is_empty());
    }

    #[test]
    fn test_leet_substitutions_not_counted_as_hit() {
        let findings = detect_patterns("Xk9#mQ2$vL7!pR4&");
        assert!(findings.common_substitutions.contains(&"$ -> s".to_string()));
        assert_eq!(findings.families_hit(), 0);
    }

    #[test]
    fn test_detect_patterns_qwerty() {
        let findings = detect_patterns("qwerty");
        assert!(!findings.keyboard_patterns.is_empty() || !findings.common_patterns.is_empty());
        assert_eq!(findings.common_patterns, vec!["qwerty"]);
    }

    #[test]
    fn test_detect_patterns_password1() {
        let findings = detect_patterns("Password1!");
        assert!(findings.dictionary_words.contains(&"password".to_string()));
        assert_eq!(findings.common_patterns, vec!["password"]);
        assert!(findings.keyboard_patterns.is_empty());
        assert!(findings.repeated_chars.is_empty());
        assert!(findings.sequential_chars.is_empty());
        assert_eq!(findings.families_hit(), 2);
    }

    #[test]
    fn test_detect_patterns_empty() {
        let findings = detect_patterns("");
        assert_eq!(findings.families_hit(), 0);
    }

    #[test]
    fn test_findings_serialize_with_contract_keys() {
        let json = serde_json::to_value(detect_patterns("aaa")).unwrap();
        assert_eq!(json["has_repeated_chars"], serde_json::json!(["aaa"]));
        assert_eq!(json["contains_dictionary_words"], serde_json::json!([]));
        assert!(json.get("has_common_patterns").is_some());
        assert!(json.get("has_keyboard_patterns").is_some());
        assert!(json.get("has_sequential_chars").is_some());
        assert_eq!(json["common_substitutions"], serde_json::json!([]));
    }
}
