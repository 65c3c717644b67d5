//! Error types shared by the analyzer and the wordlist generator.

use thiserror::Error;

/// Errors surfaced by the analysis and generation engines.
///
/// None of these are retried internally and none poison later calls:
/// every engine invocation is independent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InsightError {
    /// Rejected request: empty password, no usable tokens, malformed body.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A configured bound was exceeded.
    #[error("{what} exceeds the limit of {limit} (got {actual})")]
    LimitExceeded {
        what: &'static str,
        limit: usize,
        actual: usize,
    },

    /// Unexpected state during scoring or expansion.
    #[error("Internal computation error: {0}")]
    Internal(String),

    /// The caller cancelled the operation before it completed.
    #[error("Operation cancelled")]
    Cancelled,
}

impl InsightError {
    pub(crate) fn limit(what: &'static str, limit: usize, actual: usize) -> Self {
        #[cfg(feature = "tracing")]
        tracing::warn!("Limit exceeded for {}: {} > {}", what, actual, limit);
        InsightError::LimitExceeded {
            what,
            limit,
            actual,
        }
    }

    /// Message suitable for the `error` field of a failed response.
    ///
    /// Internal errors are reported generically; their detail only goes to the log.
    pub fn public_message(&self) -> String {
        match self {
            InsightError::Internal(_) => "Internal error while processing the request".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, InsightError>;
