//! Per-token expansion into case, leet, year and affix variants.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{InsightError, Result};

/// Leet substitutions, primary glyph first.
pub const LEET_TABLE: &[(char, &[char])] = &[
    ('a', &['4', '@']),
    ('e', &['3']),
    ('i', &['1', '!']),
    ('o', &['0']),
    ('s', &['5', '$']),
    ('t', &['7']),
    ('l', &['1']),
    ('g', &['9']),
];

/// Leet variants kept per token, across all of its case forms.
pub const MAX_LEET_VARIANTS: usize = 64;

pub const VARIATION_SUFFIXES: &[&str] = &["1", "12", "123", "1234", "!", "!!", "?", "@", "#", "01", "001"];
pub const VARIATION_PREFIXES: &[&str] = &["1", "12", "@", "#"];

/// Variants outside this character range are dropped.
pub const MIN_VARIANT_LENGTH: usize = 2;
pub const MAX_VARIANT_LENGTH: usize = 64;

/// Which expansion rules run. Every flag defaults to off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct WordlistOptions {
    pub include_years: bool,
    pub include_leet: bool,
    pub include_common: bool,
    pub include_variations: bool,
}

/// Expands single tokens. Built once per generation run.
#[derive(Debug, Clone)]
pub struct TokenExpander {
    options: WordlistOptions,
    year_suffixes: Vec<String>,
    max_variants: usize,
}

impl TokenExpander {
    /// `years` run newest first; each contributes a four- and a two-digit suffix.
    pub fn new(options: WordlistOptions, years: impl IntoIterator<Item = i32>, max_variants: usize) -> Self {
        let year_suffixes = years
            .into_iter()
            .flat_map(|y| [y.to_string(), format!("{:02}", y.rem_euclid(100))])
            .collect();
        Self {
            options,
            year_suffixes,
            max_variants,
        }
    }

    /// All variants of `token`, in generation order and free of duplicates:
    /// case forms, then leet, then years, then affixes.
    ///
    /// # Errors
    /// `LimitExceeded` when the token yields more than `max_variants`.
    pub fn expand(&self, token: &str) -> Result<Vec<String>> {
        let mut variants = Variants::default();

        let forms = case_forms(token);
        for form in &forms {
            variants.push(form.clone());
        }

        if self.options.include_leet {
            let mut added = 0;
            'forms: for form in &forms {
                for leet in leet_variants(form) {
                    if added == MAX_LEET_VARIANTS {
                        break 'forms;
                    }
                    if variants.push(leet) {
                        added += 1;
                    }
                }
            }
        }

        if self.options.include_years {
            for form in &forms {
                for year in &self.year_suffixes {
                    variants.push(format!("{}{}", form, year));
                }
            }
        }

        if self.options.include_variations {
            for variation in affix_variations(token) {
                variants.push(variation);
            }
        }

        if variants.list.len() > self.max_variants {
            return Err(InsightError::limit(
                "variants per token",
                self.max_variants,
                variants.list.len(),
            ));
        }
        Ok(variants.list)
    }
}

#[derive(Default)]
struct Variants {
    list: Vec<String>,
    seen: HashSet<String>,
}

impl Variants {
    fn push(&mut self, word: String) -> bool {
        let len = word.chars().count();
        if !(MIN_VARIANT_LENGTH..=MAX_VARIANT_LENGTH).contains(&len) || self.seen.contains(&word) {
            return false;
        }
        self.seen.insert(word.clone());
        self.list.push(word);
        true
    }
}

/// Token as given, lowercase, uppercase, capitalized; duplicates removed.
pub fn case_forms(token: &str) -> Vec<String> {
    let mut forms: Vec<String> = Vec::with_capacity(4);
    for form in [
        token.to_string(),
        token.to_lowercase(),
        token.to_uppercase(),
        capitalize(token),
    ] {
        if !forms.contains(&form) {
            forms.push(form);
        }
    }
    forms
}

/// First character uppercased, the rest lowercased.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Bounded leet expansion of one word.
///
/// With `k` distinct substitutable letters the output is at most: every
/// glyph of every letter on its own, the primary glyphs of the first
/// `2..=k` letters together, and all letters on their last glyph.
/// Substitution matches letters case-insensitively.
pub fn leet_variants(word: &str) -> Vec<String> {
    let mut letters: Vec<(char, &[char])> = Vec::new();
    for c in word.chars().map(|c| c.to_ascii_lowercase()) {
        if letters.iter().any(|(l, _)| *l == c) {
            continue;
        }
        if let Some(&(letter, glyphs)) = LEET_TABLE.iter().find(|(l, _)| *l == c) {
            letters.push((letter, glyphs));
        }
    }

    let mut out: Vec<String> = Vec::new();
    let mut emit = |subs: &[(char, char)]| {
        let leet = substitute(word, subs);
        if leet != word && !out.contains(&leet) {
            out.push(leet);
        }
    };

    for (letter, glyphs) in &letters {
        for glyph in glyphs.iter() {
            emit(&[(*letter, *glyph)][..]);
        }
    }
    for n in 2..=letters.len() {
        let subs: Vec<(char, char)> = letters[..n].iter().map(|(l, g)| (*l, g[0])).collect();
        emit(subs.as_slice());
    }
    let alternate: Vec<(char, char)> = letters
        .iter()
        .map(|(l, g)| (*l, g.last().copied().unwrap_or(*l)))
        .collect();
    emit(alternate.as_slice());

    out
}

fn substitute(word: &str, subs: &[(char, char)]) -> String {
    word.chars()
        .map(|c| {
            let lower = c.to_ascii_lowercase();
            subs.iter()
                .find(|(l, _)| *l == lower)
                .map(|(_, g)| *g)
                .unwrap_or(c)
        })
        .collect()
}

/// Reversal, case tweaks, vowel stripping, doubling and common affixes.
pub fn affix_variations(token: &str) -> Vec<String> {
    let mut out = vec![token.chars().rev().collect::<String>()];

    let mut chars = token.chars();
    if let Some(first) = chars.next() {
        if token.chars().count() >= 3 {
            let rest: String = chars.collect();
            out.push(format!("{}{}", first, rest.to_uppercase()));
            out.push(format!("{}{}", first.to_uppercase(), rest));
        }
    }

    let no_vowels: String = token.chars().filter(|c| !"aeiouAEIOU".contains(*c)).collect();
    if !no_vowels.is_empty() && no_vowels != token {
        out.push(no_vowels);
    }

    if token.chars().count() <= 6 {
        out.push(token.repeat(2));
    }

    out.extend(VARIATION_SUFFIXES.iter().map(|s| format!("{}{}", token, s)));
    out.extend(VARIATION_PREFIXES.iter().map(|p| format!("{}{}", p, token)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expander(options: WordlistOptions) -> TokenExpander {
        TokenExpander::new(options, (2020..=2024).rev(), 1_000)
    }

    #[test]
    fn test_case_forms() {
        assert_eq!(case_forms("Rex"), vec!["Rex", "rex", "REX"]);
        assert_eq!(case_forms("mIxEd"), vec!["mIxEd", "mixed", "MIXED", "Mixed"]);
        assert_eq!(case_forms("2020"), vec!["2020"]);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("bUDDY"), "Buddy");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_leet_single_substitution() {
        assert_eq!(leet_variants("Rex"), vec!["R3x"]);
        assert_eq!(leet_variants("REX"), vec!["R3X"]);
        assert!(leet_variants("xyz").is_empty());
    }

    #[test]
    fn test_leet_multiple_substitutions() {
        // letters in order of appearance: s, a
        assert_eq!(
            leet_variants("sam"),
            vec!["5am", "$am", "s4m", "s@m", "54m", "$@m"]
        );
    }

    #[test]
    fn test_leet_is_bounded() {
        // every table letter present: 8 letters, 11 glyphs
        let word = "aeiostlg";
        let variants = leet_variants(word);
        assert!(variants.len() <= 11 + 7 + 1);
        assert!(variants.contains(&"43105719".to_string()));

        let expanded = expander(WordlistOptions {
            include_leet: true,
            ..Default::default()
        })
        .expand("AgileStorage")
        .unwrap();
        let leet_count = expanded.len() - case_forms("AgileStorage").len();
        assert!(leet_count <= MAX_LEET_VARIANTS);
    }

    #[test]
    fn test_expand_case_only_by_default() {
        let variants = expander(WordlistOptions::default()).expand("Buddy").unwrap();
        assert_eq!(variants, vec!["Buddy", "buddy", "BUDDY"]);
    }

    #[test]
    fn test_expand_years() {
        let options = WordlistOptions {
            include_years: true,
            ..Default::default()
        };
        let variants = expander(options).expand("rex").unwrap();
        assert_eq!(&variants[..4], &["rex", "REX", "Rex", "rex2024"]);
        assert!(variants.contains(&"Rex20".to_string()));
        assert!(variants.contains(&"REX2020".to_string()));
        assert!(!variants.contains(&"rex2019".to_string()));
        // 3 case forms, 5 years, two forms each
        assert_eq!(variants.len(), 3 + 3 * 10);
    }

    #[test]
    fn test_expand_variations() {
        let options = WordlistOptions {
            include_variations: true,
            ..Default::default()
        };
        let variants = expander(options).expand("rex").unwrap();
        assert!(variants.contains(&"xer".to_string()));
        assert!(variants.contains(&"rEX".to_string()));
        assert!(variants.contains(&"rx".to_string()));
        assert!(variants.contains(&"rexrex".to_string()));
        assert!(variants.contains(&"rex123".to_string()));
        assert!(variants.contains(&"@rex".to_string()));
    }

    #[test]
    fn test_expand_is_deterministic() {
        let options = WordlistOptions {
            include_years: true,
            include_leet: true,
            include_common: true,
            include_variations: true,
        };
        let first = expander(options).expand("Shadow").unwrap();
        let second = expander(options).expand("Shadow").unwrap();
        assert_eq!(first, second);
        let unique: HashSet<&String> = first.iter().collect();
        assert_eq!(unique.len(), first.len());
    }

    #[test]
    fn test_expand_variant_cap() {
        let options = WordlistOptions {
            include_years: true,
            ..Default::default()
        };
        let tight = TokenExpander::new(options, (2000..=2024).rev(), 10);
        assert!(matches!(
            tight.expand("rex"),
            Err(InsightError::LimitExceeded { what: "variants per token", limit: 10, .. })
        ));
    }

    #[test]
    fn test_options_json_shape() {
        let options: WordlistOptions =
            serde_json::from_str(r#"{"includeLeet": true}"#).unwrap();
        assert!(options.include_leet);
        assert!(!options.include_years);
        assert!(serde_json::from_str::<WordlistOptions>(r#"{"includeSymbols": true}"#).is_err());
        assert!(serde_json::from_str::<WordlistOptions>(r#"{"includeLeet": "yes"}"#).is_err());
    }
}
