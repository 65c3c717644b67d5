//! Strength score, label and advice.

use serde::Serialize;

use super::characters::CharacterAnalysis;
use super::patterns::PatternFindings;
use crate::error::{InsightError, Result};

/// Entropy at which the base score saturates.
pub const FULL_SCORE_ENTROPY: f64 = 100.0;

pub const COMMON_PATTERN_PENALTY: f64 = 15.0;
pub const DICTIONARY_PENALTY: f64 = 10.0;
pub const KEYBOARD_PENALTY: f64 = 10.0;
pub const REPEATED_PENALTY: f64 = 10.0;
pub const SEQUENTIAL_PENALTY: f64 = 10.0;

/// Characters beyond this length earn a bonus.
pub const LENGTH_BONUS_THRESHOLD: usize = 12;
pub const LENGTH_BONUS_STEP: usize = 4;
pub const LENGTH_BONUS_POINTS: f64 = 5.0;
pub const LENGTH_BONUS_CAP: f64 = 15.0;

pub const MAX_RECOMMENDATIONS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthLabel {
    #[serde(rename = "Very Weak")]
    VeryWeak,
    Weak,
    Fair,
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthColor {
    Red,
    Orange,
    Yellow,
    Blue,
    Green,
}

impl StrengthLabel {
    /// Fixed cut points: 20, 40, 60, 80.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=19 => StrengthLabel::VeryWeak,
            20..=39 => StrengthLabel::Weak,
            40..=59 => StrengthLabel::Fair,
            60..=79 => StrengthLabel::Strong,
            _ => StrengthLabel::VeryStrong,
        }
    }

    pub fn color(self) -> StrengthColor {
        match self {
            StrengthLabel::VeryWeak => StrengthColor::Red,
            StrengthLabel::Weak => StrengthColor::Orange,
            StrengthLabel::Fair => StrengthColor::Yellow,
            StrengthLabel::Strong => StrengthColor::Blue,
            StrengthLabel::VeryStrong => StrengthColor::Green,
        }
    }
}

/// Combines entropy, length and pattern hits into a 0-100 score.
///
/// Each pattern family costs its penalty once, however many matches it has.
pub fn calculate_score(entropy: f64, length: usize, patterns: &PatternFindings) -> Result<u8> {
    if !entropy.is_finite() || entropy < 0.0 {
        #[cfg(feature = "tracing")]
        tracing::error!("Scoring received invalid entropy: {}", entropy);
        return Err(InsightError::Internal(format!("invalid entropy {}", entropy)));
    }

    let mut score = entropy.min(FULL_SCORE_ENTROPY) / FULL_SCORE_ENTROPY * 100.0;

    let penalties = [
        (&patterns.common_patterns, COMMON_PATTERN_PENALTY),
        (&patterns.dictionary_words, DICTIONARY_PENALTY),
        (&patterns.keyboard_patterns, KEYBOARD_PENALTY),
        (&patterns.repeated_chars, REPEATED_PENALTY),
        (&patterns.sequential_chars, SEQUENTIAL_PENALTY),
    ];
    for (family, penalty) in penalties {
        if !family.is_empty() {
            score -= penalty;
        }
    }
    score = score.max(0.0);

    let extra = length.saturating_sub(LENGTH_BONUS_THRESHOLD) / LENGTH_BONUS_STEP;
    score += (extra as f64 * LENGTH_BONUS_POINTS).min(LENGTH_BONUS_CAP);

    Ok(score.round().clamp(0.0, 100.0) as u8)
}

/// Advice in fixed priority order, capped at [`MAX_RECOMMENDATIONS`].
pub fn recommendations(
    length: usize,
    characters: &CharacterAnalysis,
    patterns: &PatternFindings,
    score: u8,
) -> Vec<String> {
    let checks = [
        (length < 8, "Use at least 8 characters (12+ recommended)"),
        (
            (8..12).contains(&length),
            "Consider using 12 or more characters for better security",
        ),
        (!characters.has_lowercase, "Add lowercase letters"),
        (!characters.has_uppercase, "Add uppercase letters"),
        (!characters.has_digits, "Add numbers"),
        (!characters.has_special, "Add special characters (!@#$%^&*)"),
        (!patterns.common_patterns.is_empty(), "Avoid common password patterns"),
        (
            !patterns.keyboard_patterns.is_empty(),
            "Avoid keyboard patterns (qwerty, 123456, etc.)",
        ),
        (!patterns.repeated_chars.is_empty(), "Avoid repeated characters (aaa, 111)"),
        (!patterns.sequential_chars.is_empty(), "Avoid sequential characters (abc, 123)"),
        (!patterns.dictionary_words.is_empty(), "Avoid common dictionary words"),
        (characters.char_diversity < 0.7, "Use more unique characters"),
        (score < 60, "Consider using a passphrase instead of a password"),
        (score < 60, "Use a password manager to generate strong passwords"),
        (score < 60, "Enable two-factor authentication where possible"),
    ];

    checks
        .iter()
        .filter(|(failed, _)| *failed)
        .map(|(_, advice)| advice.to_string())
        .take(MAX_RECOMMENDATIONS)
        .collect()
}
