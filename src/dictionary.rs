//! Dictionary management module
//!
//! A small built-in word list is always active. A larger list can be
//! loaded once from a file and is merged behind it.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

static LOADED_WORDS: RwLock<Option<Vec<String>>> = RwLock::new(None);

/// Words matched even when no dictionary file has been loaded.
pub const BUILTIN_WORDS: &[&str] = &[
    "password", "admin", "user", "login", "welcome", "secret", "master", "super", "root",
    "test",
];

/// Loaded entries shorter than this are dropped; one- and two-letter words
/// would match nearly every password.
pub const MIN_WORD_LENGTH: usize = 3;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Dictionary file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read dictionary file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Dictionary file has no usable words")]
    EmptyFile,
}

/// Returns the dictionary file path.
///
/// Priority:
/// 1. Environment variable `PWD_DICTIONARY_PATH`
/// 2. Default path `./assets/dictionary.txt`
pub fn get_dictionary_path() -> PathBuf {
    std::env::var("PWD_DICTIONARY_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/dictionary.txt"))
}

/// Loads the dictionary from the path given by [`get_dictionary_path`].
///
/// Call once at startup. Without it only [`BUILTIN_WORDS`] are matched.
///
/// # Errors
///
/// Returns error if the file does not exist, cannot be read, or holds no
/// word of at least [`MIN_WORD_LENGTH`] characters.
pub fn init_dictionary() -> Result<usize, DictionaryError> {
    let path = get_dictionary_path();
    init_dictionary_from_path(&path)
}

/// Loads the dictionary from a specific file path.
///
/// One word per line, matched case-insensitively. Idempotent: once loaded,
/// later calls return the existing word count without touching the file.
pub fn init_dictionary_from_path<P: AsRef<std::path::Path>>(
    path: P,
) -> Result<usize, DictionaryError> {
    {
        let guard = LOADED_WORDS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(words) = guard.as_ref() {
            return Ok(words.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Dictionary initialization FAILED: FileNotFound {:?}", path);
        return Err(DictionaryError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let mut seen: HashSet<String> = BUILTIN_WORDS.iter().map(|w| w.to_string()).collect();
    let words: Vec<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| l.chars().count() >= MIN_WORD_LENGTH)
        .filter(|l| seen.insert(l.clone()))
        .collect();

    if words.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Dictionary initialization FAILED: no usable words in {:?}", path);
        return Err(DictionaryError::EmptyFile);
    }

    let count = words.len();
    {
        let mut guard = LOADED_WORDS.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(words);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Dictionary initialized: {} words from {:?}", count, path);

    Ok(count)
}

/// Number of words loaded from file (0 when only built-ins are active).
pub fn loaded_word_count() -> usize {
    let guard = LOADED_WORDS.read().unwrap_or_else(PoisonError::into_inner);
    guard.as_ref().map(Vec::len).unwrap_or(0)
}

/// Returns every dictionary word occurring in `password`, built-ins first,
/// each at most once.
pub fn find_dictionary_words(password: &str) -> Vec<String> {
    let lower = password.to_lowercase();
    let mut found: Vec<String> = BUILTIN_WORDS
        .iter()
        .filter(|w| lower.contains(*w))
        .map(|w| w.to_string())
        .collect();

    let guard = LOADED_WORDS.read().unwrap_or_else(PoisonError::into_inner);
    if let Some(words) = guard.as_ref() {
        found.extend(words.iter().filter(|w| lower.contains(w.as_str())).cloned());
    }
    found
}

/// Resets the loaded dictionary for testing purposes.
#[cfg(test)]
pub fn reset_dictionary_for_testing() {
    let mut guard = LOADED_WORDS.write().unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}
