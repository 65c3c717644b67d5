//! Password analyzer - runs the analysis sections and assembles the result.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::AnalyzerConfig;
use crate::error::{InsightError, Result};
use crate::secondary::{secondary_analysis, SecondaryAnalysis};
use crate::sections::{
    alphabet_size, calculate_score, detect_patterns, entropy_bits, estimate_crack_time,
    profile_characters, recommendations, CharacterAnalysis, PatternFindings, StrengthColor,
    StrengthLabel,
};

/// Full analysis of one password. The password itself is not included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub length: usize,
    pub entropy: f64,
    pub strength_score: u8,
    pub strength_label: StrengthLabel,
    pub strength_color: StrengthColor,
    pub character_analysis: CharacterAnalysis,
    pub pattern_analysis: PatternFindings,
    pub time_to_crack: String,
    pub recommendations: Vec<String>,
    pub analysis_timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zxcvbn_analysis: Option<SecondaryAnalysis>,
}

/// Stateless analyzer; one instance can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct PasswordAnalyzer {
    config: AnalyzerConfig,
}

impl PasswordAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyzes a password.
    ///
    /// # Errors
    /// - `InvalidInput` for an empty or whitespace-only password
    /// - `LimitExceeded` when longer than `max_password_length` characters
    pub fn analyze(&self, password: &SecretString) -> Result<AnalysisResult> {
        self.run(password, || false)
    }

    /// Like [`analyze`](Self::analyze), checking `token` before each section.
    #[cfg(feature = "async")]
    pub fn analyze_cancellable(
        &self,
        password: &SecretString,
        token: &CancellationToken,
    ) -> Result<AnalysisResult> {
        self.run(password, || token.is_cancelled())
    }

    fn run(&self, password: &SecretString, is_cancelled: impl Fn() -> bool) -> Result<AnalysisResult> {
        let pwd = password.expose_secret();
        if pwd.trim().is_empty() {
            return Err(InsightError::InvalidInput("Password is required".to_string()));
        }
        let length = pwd.chars().count();
        if length > self.config.max_password_length {
            return Err(InsightError::limit(
                "password length",
                self.config.max_password_length,
                length,
            ));
        }

        let checkpoint = || {
            if is_cancelled() {
                Err(InsightError::Cancelled)
            } else {
                Ok(())
            }
        };

        checkpoint()?;
        let character_analysis = profile_characters(pwd);

        checkpoint()?;
        let entropy = entropy_bits(length, alphabet_size(&character_analysis));

        checkpoint()?;
        let pattern_analysis = detect_patterns(pwd);

        checkpoint()?;
        let strength_score = calculate_score(entropy, length, &pattern_analysis)?;
        let strength_label = StrengthLabel::from_score(strength_score);
        let recommendations =
            recommendations(length, &character_analysis, &pattern_analysis, strength_score);

        checkpoint()?;
        let zxcvbn_analysis = secondary_analysis(pwd);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Password analyzed: length {}, entropy {}, score {} ({:?})",
            length,
            entropy,
            strength_score,
            strength_label
        );

        Ok(AnalysisResult {
            length,
            entropy,
            strength_score,
            strength_label,
            strength_color: strength_label.color(),
            character_analysis,
            pattern_analysis,
            time_to_crack: estimate_crack_time(entropy),
            recommendations,
            analysis_timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            zxcvbn_analysis,
        })
    }
}

/// Analyzes a password with default limits.
pub fn analyze_password(password: &SecretString) -> Result<AnalysisResult> {
    PasswordAnalyzer::default().analyze(password)
}

/// Async version that sends the analysis result via channel.
///
/// Waits a short debounce first so a caller analysing as the user types can
/// cancel superseded requests before any work is done.
#[cfg(feature = "async")]
pub async fn analyze_password_tx(
    analyzer: &PasswordAnalyzer,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Result<AnalysisResult>>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;
    let analysis = analyzer.analyze_cancellable(password, &token);

    if let Err(_e) = tx.send(analysis).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password analysis result: {}", _e);
    }
}
