//! Password strength analysis and personal-fact wordlist generation
//!
//! Two independent, stateless engines:
//!
//! - the analyzer scores a password from its entropy and weak patterns
//!   (dictionary words, keyboard walks, repeats, sequences) and estimates
//!   its crack time;
//! - the wordlist generator expands facts such as names and dates into
//!   candidate passwords for authorized testing.
//!
//! # Features
//!
//! - `async` (default): Enables cancellable analysis and channel delivery
//! - `tracing`: Enables logging via tracing crate
//! - `zxcvbn`: Attaches a secondary zxcvbn verdict to each analysis
//!
//! # Environment Variables
//!
//! - `PWD_DICTIONARY_PATH`: Custom path to a dictionary file
//!   (default: `./assets/dictionary.txt`)
//! - `PWD_MAX_PASSWORD_LENGTH`, `PWD_WORDLIST_MAX_TOKENS`,
//!   `PWD_WORDLIST_MAX_WORDS`, `PWD_WORDLIST_REFERENCE_YEAR`: limit overrides
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_insight::{analyze_password, WordlistGenerator, WordlistOptions, WordlistRequest};
//! use secrecy::SecretString;
//!
//! // Optional: extend the built-in dictionary (call once at startup)
//! let _ = pwd_insight::init_dictionary();
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let analysis = analyze_password(&password).expect("valid password");
//! println!("Score: {} ({:?})", analysis.strength_score, analysis.strength_label);
//!
//! let request = WordlistRequest {
//!     inputs: vec!["Rex".to_string(), "1990".to_string()],
//!     options: WordlistOptions { include_leet: true, ..Default::default() },
//! };
//! let result = WordlistGenerator::default().generate(&request).expect("valid request");
//! println!("{} candidates", result.total_words);
//! ```

// Internal modules
mod analyzer;
mod config;
mod dictionary;
mod error;
mod secondary;
mod sections;

pub mod api;
pub mod wordlist;

// Public API
pub use analyzer::{analyze_password, AnalysisResult, PasswordAnalyzer};
pub use config::{AnalyzerConfig, ConfigError, WordlistConfig};
pub use dictionary::{
    find_dictionary_words, init_dictionary, init_dictionary_from_path, loaded_word_count,
    DictionaryError,
};
pub use error::{InsightError, Result};
pub use secondary::{SecondaryAnalysis, SecondaryCrackTimes, SecondaryFeedback};
pub use sections::{
    alphabet_size, calculate_score, detect_patterns, entropy_bits, estimate_crack_time,
    find_keyboard_patterns, profile_characters, CharacterAnalysis, PatternFindings,
    StrengthColor, StrengthLabel,
};
pub use wordlist::{
    DownloadArtifact, TokenExpander, WordlistFormat, WordlistGenerator, WordlistOptions,
    WordlistRequest, WordlistResult, WordlistStatistics,
};

#[cfg(feature = "async")]
pub use analyzer::analyze_password_tx;
