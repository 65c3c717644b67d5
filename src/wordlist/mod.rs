//! Wordlist generation from personal-fact tokens.
//!
//! Each input is split into tokens, every token is expanded by
//! [`TokenExpander`], and the combined sequence is deduplicated keeping the
//! first occurrence. Output depends only on the request and the generator's
//! configuration.

mod expander;
mod export;

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::config::WordlistConfig;
use crate::error::{InsightError, Result};

pub use expander::{
    affix_variations, capitalize, case_forms, leet_variants, TokenExpander, WordlistOptions,
    LEET_TABLE, MAX_LEET_VARIANTS,
};
pub use export::{render_wordlist, sanitize_filename, DownloadArtifact, WordlistFormat};

/// Tokens shorter than this are discarded during cleaning.
pub const MIN_TOKEN_LENGTH: usize = 2;

/// Generic passwords merged once per run when `includeCommon` is set.
pub const COMMON_PASSWORDS: &[&str] = &[
    "123456", "password", "12345678", "qwerty", "123456789", "12345", "1234", "111111",
    "1234567", "dragon", "123123", "baseball", "abc123", "football", "monkey", "letmein",
    "shadow", "master", "666666", "qwertyuiop", "123321", "mustang", "1234567890", "michael",
    "654321", "superman", "1qaz2wsx", "7777777", "121212", "000000", "qazwsx", "trustno1",
    "iloveyou", "sunshine", "princess", "welcome", "admin", "passw0rd", "starwars", "whatever",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WordlistRequest {
    pub inputs: Vec<String>,
    #[serde(default)]
    pub options: WordlistOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CharacterTypeCounts {
    pub has_numbers: usize,
    pub has_symbols: usize,
    pub has_uppercase: usize,
    pub has_lowercase: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WordlistStatistics {
    pub average_length: f64,
    pub min_length: usize,
    pub max_length: usize,
    pub length_distribution: BTreeMap<usize, usize>,
    pub character_types: CharacterTypeCounts,
}

/// Generation output. The full list stays in-process; only the preview
/// and statistics are serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordlistResult {
    pub total_words: usize,
    pub wordlist_preview: Vec<String>,
    pub statistics: WordlistStatistics,
    #[serde(skip)]
    words: Vec<String>,
}

impl WordlistResult {
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

#[derive(Debug, Clone, Default)]
pub struct WordlistGenerator {
    config: WordlistConfig,
}

impl WordlistGenerator {
    pub fn new(config: WordlistConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WordlistConfig {
        &self.config
    }

    /// Generates the wordlist with preview and statistics.
    pub fn generate(&self, request: &WordlistRequest) -> Result<WordlistResult> {
        let words = self.generate_words(request)?;
        let statistics = wordlist_statistics(&words);
        let wordlist_preview = words.iter().take(self.config.preview_size).cloned().collect();

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Wordlist generated: {} words from {} inputs",
            words.len(),
            request.inputs.len()
        );

        Ok(WordlistResult {
            total_words: words.len(),
            wordlist_preview,
            statistics,
            words,
        })
    }

    /// Generates the full deduplicated list only.
    ///
    /// # Errors
    /// - `InvalidInput` when no token survives cleaning
    /// - `LimitExceeded` for too many tokens, an over-long token, too many
    ///   variants from one token, or too many words overall
    pub fn generate_words(&self, request: &WordlistRequest) -> Result<Vec<String>> {
        if request.inputs.is_empty() {
            return Err(InsightError::InvalidInput(
                "At least one input is required".to_string(),
            ));
        }

        let tokens = clean_inputs(&request.inputs);
        if tokens.is_empty() {
            return Err(InsightError::InvalidInput(format!(
                "No usable input: every token needs at least {} characters",
                MIN_TOKEN_LENGTH
            )));
        }
        if tokens.len() > self.config.max_tokens {
            return Err(InsightError::limit("input tokens", self.config.max_tokens, tokens.len()));
        }
        if let Some(longest) = tokens.iter().map(|t| t.chars().count()).max() {
            if longest > self.config.max_token_length {
                return Err(InsightError::limit(
                    "token length",
                    self.config.max_token_length,
                    longest,
                ));
            }
        }

        let years = if request.options.include_years {
            self.years()?
        } else {
            Vec::new()
        };
        let expander = TokenExpander::new(request.options, years, self.config.max_variants_per_token);

        let mut words: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut add = |word: String| -> Result<()> {
            if seen.insert(word.clone()) {
                words.push(word);
                if words.len() > self.config.max_total_words {
                    return Err(InsightError::limit(
                        "total words",
                        self.config.max_total_words,
                        words.len(),
                    ));
                }
            }
            Ok(())
        };

        for token in &tokens {
            for variant in expander.expand(token)? {
                add(variant)?;
            }
        }
        if request.options.include_common {
            for common in COMMON_PASSWORDS {
                add(common.to_string())?;
            }
        }

        Ok(words)
    }

    /// Generates the list and renders it as a download artifact.
    pub fn export(
        &self,
        request: &WordlistRequest,
        filename_base: &str,
        format: WordlistFormat,
    ) -> Result<DownloadArtifact> {
        let words = self.generate_words(request)?;
        Ok(DownloadArtifact::new(&words, filename_base, format))
    }

    /// Newest first. Fails when the window does not fit in `i32`.
    fn years(&self) -> Result<Vec<i32>> {
        let window = self.config.reference_year.checked_add(1).and_then(|newest| {
            let span = i32::try_from(self.config.year_span).ok()?;
            Some((newest.checked_sub(span)?, newest))
        });
        let Some((oldest, newest)) = window else {
            #[cfg(feature = "tracing")]
            tracing::error!(
                "Year window out of range: reference year {}, span {}",
                self.config.reference_year,
                self.config.year_span
            );
            return Err(InsightError::Internal(format!(
                "year window out of range for reference year {}",
                self.config.reference_year
            )));
        };
        Ok((oldest..=newest).rev().collect())
    }
}

/// Splits inputs on commas, semicolons and whitespace, drops pieces shorter
/// than [`MIN_TOKEN_LENGTH`] and removes duplicates, keeping input order.
pub fn clean_inputs(inputs: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    inputs
        .iter()
        .flat_map(|input| input.split(|c: char| c == ',' || c == ';' || c.is_whitespace()))
        .map(str::trim)
        .filter(|token| token.chars().count() >= MIN_TOKEN_LENGTH)
        .filter(|token| seen.insert(token.to_string()))
        .map(str::to_string)
        .collect()
}

/// Length and character-class statistics; lengths count characters.
pub fn wordlist_statistics(words: &[String]) -> WordlistStatistics {
    if words.is_empty() {
        return WordlistStatistics::default();
    }

    let mut stats = WordlistStatistics {
        min_length: usize::MAX,
        ..Default::default()
    };
    let mut total_length = 0usize;

    for word in words {
        let len = word.chars().count();
        total_length += len;
        stats.min_length = stats.min_length.min(len);
        stats.max_length = stats.max_length.max(len);
        *stats.length_distribution.entry(len).or_insert(0) += 1;

        let types = &mut stats.character_types;
        if word.chars().any(|c| c.is_ascii_digit()) {
            types.has_numbers += 1;
        }
        if word.chars().any(|c| !c.is_alphanumeric()) {
            types.has_symbols += 1;
        }
        if word.chars().any(char::is_uppercase) {
            types.has_uppercase += 1;
        }
        if word.chars().any(char::is_lowercase) {
            types.has_lowercase += 1;
        }
    }

    let average = total_length as f64 / words.len() as f64;
    stats.average_length = (average * 100.0).round() / 100.0;
    stats
}
