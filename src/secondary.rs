//! Optional second opinion from zxcvbn (cargo feature `zxcvbn`).

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecondaryFeedback {
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

/// zxcvbn's crack-time estimate per attack scenario, display form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SecondaryCrackTimes {
    pub online_throttling_100_per_hour: String,
    pub online_no_throttling_10_per_second: String,
    pub offline_slow_hashing_1e4_per_second: String,
    pub offline_fast_hashing_1e10_per_second: String,
}

/// zxcvbn's verdict, score on its own 0-4 scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecondaryAnalysis {
    pub score: u8,
    pub feedback: SecondaryFeedback,
    pub crack_times: SecondaryCrackTimes,
}

#[cfg(feature = "zxcvbn")]
pub fn secondary_analysis(password: &str) -> Option<SecondaryAnalysis> {
    use zxcvbn::{Score, zxcvbn};

    let entropy = zxcvbn(password, &[]);
    let score = match entropy.score() {
        Score::Zero => 0,
        Score::One => 1,
        Score::Two => 2,
        Score::Three => 3,
        Score::Four => 4,
        _ => 0,
    };

    let feedback = match entropy.feedback() {
        Some(feedback) => SecondaryFeedback {
            warning: feedback.warning().map(|w| w.to_string()),
            suggestions: feedback.suggestions().iter().map(|s| s.to_string()).collect(),
        },
        None => SecondaryFeedback {
            warning: None,
            suggestions: Vec::new(),
        },
    };

    let times = entropy.crack_times();
    let crack_times = SecondaryCrackTimes {
        online_throttling_100_per_hour: times.online_throttling_100_per_hour().to_string(),
        online_no_throttling_10_per_second: times.online_no_throttling_10_per_second().to_string(),
        offline_slow_hashing_1e4_per_second: times.offline_slow_hashing_1e4_per_second().to_string(),
        offline_fast_hashing_1e10_per_second: times.offline_fast_hashing_1e10_per_second().to_string(),
    };

    Some(SecondaryAnalysis {
        score,
        feedback,
        crack_times,
    })
}

#[cfg(not(feature = "zxcvbn"))]
pub fn secondary_analysis(_password: &str) -> Option<SecondaryAnalysis> {
    None
}
