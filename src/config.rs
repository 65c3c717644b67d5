//! Runtime limits for both engines.
//!
//! Defaults are compiled in; `from_env()` lets a deployment override them:
//!
//! - `PWD_MAX_PASSWORD_LENGTH`
//! - `PWD_WORDLIST_MAX_TOKENS`
//! - `PWD_WORDLIST_MAX_WORDS`
//! - `PWD_WORDLIST_REFERENCE_YEAR`

use chrono::Datelike;
use thiserror::Error;

pub const DEFAULT_MAX_PASSWORD_LENGTH: usize = 100;
pub const DEFAULT_MAX_TOKENS: usize = 32;
pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 50;
pub const DEFAULT_MAX_VARIANTS_PER_TOKEN: usize = 1_000;
pub const DEFAULT_MAX_TOTAL_WORDS: usize = 50_000;
pub const DEFAULT_PREVIEW_SIZE: usize = 20;
pub const DEFAULT_YEAR_SPAN: u32 = 80;

/// Accepted range for `PWD_WORDLIST_REFERENCE_YEAR`.
pub const REFERENCE_YEAR_RANGE: std::ops::RangeInclusive<i32> = 1000..=9999;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Limits applied by [`crate::PasswordAnalyzer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Passwords longer than this (in characters) are rejected.
    pub max_password_length: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_password_length: DEFAULT_MAX_PASSWORD_LENGTH,
        }
    }
}

impl AnalyzerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(v) = env_limit("PWD_MAX_PASSWORD_LENGTH")? {
            config.max_password_length = v;
        }
        Ok(config)
    }
}

/// Limits and year window applied by [`crate::WordlistGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordlistConfig {
    pub max_tokens: usize,
    pub max_token_length: usize,
    pub max_variants_per_token: usize,
    pub max_total_words: usize,
    pub preview_size: usize,
    /// Year suffixes run from `reference_year + 1` down through `year_span` years.
    pub reference_year: i32,
    pub year_span: u32,
}

impl Default for WordlistConfig {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
            max_variants_per_token: DEFAULT_MAX_VARIANTS_PER_TOKEN,
            max_total_words: DEFAULT_MAX_TOTAL_WORDS,
            preview_size: DEFAULT_PREVIEW_SIZE,
            reference_year: chrono::Local::now().year(),
            year_span: DEFAULT_YEAR_SPAN,
        }
    }
}

impl WordlistConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(v) = env_limit("PWD_WORDLIST_MAX_TOKENS")? {
            config.max_tokens = v;
        }
        if let Some(v) = env_limit("PWD_WORDLIST_MAX_WORDS")? {
            config.max_total_words = v;
        }
        if let Some(v) = env_parse::<i32>("PWD_WORDLIST_REFERENCE_YEAR")? {
            if !REFERENCE_YEAR_RANGE.contains(&v) {
                return Err(ConfigError::InvalidValue {
                    var: "PWD_WORDLIST_REFERENCE_YEAR",
                    value: v.to_string(),
                });
            }
            config.reference_year = v;
        }
        Ok(config)
    }
}

/// A limit must be at least 1.
fn env_limit(var: &'static str) -> Result<Option<usize>, ConfigError> {
    match env_parse::<usize>(var)? {
        Some(0) => Err(ConfigError::InvalidValue {
            var,
            value: "0".to_string(),
        }),
        other => Ok(other),
    }
}

fn env_parse<T: std::str::FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { var, value: raw }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment are serialized
        unsafe { std::env::set_var(key, value); }
    }

    fn remove_env(key: &str) {
        // SAFETY: tests touching the environment are serialized
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    #[serial]
    fn test_analyzer_config_defaults_without_env() {
        remove_env("PWD_MAX_PASSWORD_LENGTH");
        let config = AnalyzerConfig::from_env().unwrap();
        assert_eq!(config.max_password_length, DEFAULT_MAX_PASSWORD_LENGTH);
    }

    #[test]
    #[serial]
    fn test_analyzer_config_env_override() {
        set_env("PWD_MAX_PASSWORD_LENGTH", "64");
        let config = AnalyzerConfig::from_env().unwrap();
        assert_eq!(config.max_password_length, 64);
        remove_env("PWD_MAX_PASSWORD_LENGTH");
    }

    #[test]
    #[serial]
    fn test_wordlist_config_rejects_garbage() {
        set_env("PWD_WORDLIST_MAX_TOKENS", "lots");
        let result = WordlistConfig::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { var: "PWD_WORDLIST_MAX_TOKENS", .. })
        ));
        remove_env("PWD_WORDLIST_MAX_TOKENS");
    }

    #[test]
    #[serial]
    fn test_wordlist_config_reference_year_override() {
        set_env("PWD_WORDLIST_REFERENCE_YEAR", "2001");
        let config = WordlistConfig::from_env().unwrap();
        assert_eq!(config.reference_year, 2001);
        assert_eq!(config.max_tokens, DEFAULT_MAX_TOKENS);
        remove_env("PWD_WORDLIST_REFERENCE_YEAR");
    }

    #[test]
    #[serial]
    fn test_wordlist_config_rejects_out_of_range_year() {
        for year in ["2147483647", "999", "-2024", "10000"] {
            set_env("PWD_WORDLIST_REFERENCE_YEAR", year);
            assert!(
                matches!(
                    WordlistConfig::from_env(),
                    Err(ConfigError::InvalidValue { var: "PWD_WORDLIST_REFERENCE_YEAR", .. })
                ),
                "year {}",
                year
            );
        }
        remove_env("PWD_WORDLIST_REFERENCE_YEAR");
    }

    #[test]
    #[serial]
    fn test_zero_limits_rejected() {
        set_env("PWD_WORDLIST_MAX_WORDS", "0");
        assert_eq!(
            WordlistConfig::from_env(),
            Err(ConfigError::InvalidValue {
                var: "PWD_WORDLIST_MAX_WORDS",
                value: "0".to_string()
            })
        );
        remove_env("PWD_WORDLIST_MAX_WORDS");

        set_env("PWD_WORDLIST_MAX_TOKENS", " 0 ");
        assert!(WordlistConfig::from_env().is_err());
        remove_env("PWD_WORDLIST_MAX_TOKENS");

        set_env("PWD_MAX_PASSWORD_LENGTH", "0");
        assert!(AnalyzerConfig::from_env().is_err());
        remove_env("PWD_MAX_PASSWORD_LENGTH");
    }
}
