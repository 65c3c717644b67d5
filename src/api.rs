//! Request/response contract for the analyze, generate and download calls.
//!
//! Transport-agnostic: handlers take a JSON body and return a serializable
//! envelope carrying either the payload or an error, never both.

use secrecy::SecretString;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::analyzer::{AnalysisResult, PasswordAnalyzer};
use crate::config::{AnalyzerConfig, ConfigError, WordlistConfig};
use crate::error::{InsightError, Result};
use crate::wordlist::{
    WordlistFormat, WordlistGenerator, WordlistOptions, WordlistRequest, WordlistResult,
};

/// Body of an analyze call. Deliberately not `Debug`.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzeRequest {
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DownloadRequest {
    pub inputs: Vec<String>,
    #[serde(default)]
    pub options: WordlistOptions,
    #[serde(default)]
    pub format: WordlistFormat,
    #[serde(default = "default_filename")]
    pub filename: String,
}

fn default_filename() -> String {
    "wordlist".to_string()
}

impl DownloadRequest {
    pub fn wordlist_request(&self) -> WordlistRequest {
        WordlistRequest {
            inputs: self.inputs.clone(),
            options: self.options,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileInfo {
    pub filename: String,
    pub format: WordlistFormat,
    pub size: usize,
    pub file_size: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DownloadResponse {
    pub file_info: FileInfo,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    LimitExceeded,
    Internal,
    Cancelled,
}

impl From<&InsightError> for ErrorKind {
    fn from(err: &InsightError) -> Self {
        match err {
            InsightError::InvalidInput(_) => ErrorKind::InvalidInput,
            InsightError::LimitExceeded { .. } => ErrorKind::LimitExceeded,
            InsightError::Internal(_) => ErrorKind::Internal,
            InsightError::Cancelled => ErrorKind::Cancelled,
        }
    }
}

/// `{"success": true, ...payload}` or `{"success": false, "error": ..., "error_kind": ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl<T> ApiResponse<T> {
    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(data) => Self {
                success: true,
                data: Some(data),
                error: None,
                error_kind: None,
            },
            Err(err) => {
                #[cfg(feature = "tracing")]
                {
                    if let InsightError::Internal(detail) = &err {
                        tracing::error!("Internal error while handling request: {}", detail);
                    }
                }
                Self {
                    success: false,
                    data: None,
                    error: Some(err.public_message()),
                    error_kind: Some(ErrorKind::from(&err)),
                }
            }
        }
    }
}

/// Both engines behind the three calls.
#[derive(Debug, Clone, Default)]
pub struct InsightService {
    analyzer: PasswordAnalyzer,
    generator: WordlistGenerator,
}

impl InsightService {
    pub fn new(analyzer: PasswordAnalyzer, generator: WordlistGenerator) -> Self {
        Self {
            analyzer,
            generator,
        }
    }

    /// Builds the service with limits taken from the environment.
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        Ok(Self::new(
            PasswordAnalyzer::new(AnalyzerConfig::from_env()?),
            WordlistGenerator::new(WordlistConfig::from_env()?),
        ))
    }

    pub fn analyze(&self, body: &str) -> ApiResponse<AnalyzeResponse> {
        ApiResponse::from_result(parse::<AnalyzeRequest>(body).and_then(|request| {
            let password = SecretString::new(request.password.into());
            let analysis = self.analyzer.analyze(&password)?;
            Ok(AnalyzeResponse { analysis })
        }))
    }

    pub fn generate(&self, body: &str) -> ApiResponse<WordlistResult> {
        ApiResponse::from_result(
            parse::<WordlistRequest>(body).and_then(|request| self.generator.generate(&request)),
        )
    }

    /// Regenerates the list from the request; nothing is kept between calls.
    pub fn download(&self, body: &str) -> ApiResponse<DownloadResponse> {
        ApiResponse::from_result(parse::<DownloadRequest>(body).and_then(|request| {
            let artifact = self.generator.export(
                &request.wordlist_request(),
                &request.filename,
                request.format,
            )?;
            Ok(DownloadResponse {
                file_info: FileInfo {
                    file_size: artifact.file_size(),
                    filename: artifact.filename,
                    format: artifact.format,
                    size: artifact.size,
                },
                content: artifact.content,
            })
        }))
    }
}

fn parse<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body)
        .map_err(|e| InsightError::InvalidInput(format!("Malformed request: {}", e)))
}
