//! Entropy estimate and crack-time bucket.

use super::characters::CharacterAnalysis;

pub const LOWERCASE_POOL: u32 = 26;
pub const UPPERCASE_POOL: u32 = 26;
pub const DIGIT_POOL: u32 = 10;
pub const SPECIAL_POOL: u32 = 32;

/// Offline attack against a fast hash.
pub const GUESSES_PER_SECOND: f64 = 1e9;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const MONTH: f64 = 2_592_000.0;
const YEAR: f64 = 31_536_000.0;

/// Sum of the pool sizes of the classes present in the password.
pub fn alphabet_size(profile: &CharacterAnalysis) -> u32 {
    let mut size = 0;
    if profile.has_lowercase {
        size += LOWERCASE_POOL;
    }
    if profile.has_uppercase {
        size += UPPERCASE_POOL;
    }
    if profile.has_digits {
        size += DIGIT_POOL;
    }
    if profile.has_special {
        size += SPECIAL_POOL;
    }
    size
}

/// `length * log2(alphabet)` in bits, rounded to two decimals.
pub fn entropy_bits(length: usize, alphabet: u32) -> f64 {
    if alphabet == 0 || length == 0 {
        return 0.0;
    }
    let raw = length as f64 * f64::from(alphabet).log2();
    (raw * 100.0).round() / 100.0
}

/// Human-readable average-case time to exhaust half the keyspace.
pub fn estimate_crack_time(entropy: f64) -> String {
    if entropy <= 0.0 {
        return "Instantly".to_string();
    }

    let seconds = 2f64.powf(entropy) / 2.0 / GUESSES_PER_SECOND;

    if seconds < 1.0 {
        "Less than a second".to_string()
    } else if seconds < MINUTE {
        plural(seconds, "second")
    } else if seconds < HOUR {
        plural(seconds / MINUTE, "minute")
    } else if seconds < DAY {
        plural(seconds / HOUR, "hour")
    } else if seconds < MONTH {
        plural(seconds / DAY, "day")
    } else if seconds < YEAR {
        plural(seconds / MONTH, "month")
    } else {
        let years = seconds / YEAR;
        if years < 100.0 {
            plural(years, "year")
        } else if years < 1_000_000.0 {
            plural(years / 100.0, "century")
        } else {
            "Millions of years".to_string()
        }
    }
}

fn plural(value: f64, unit: &str) -> String {
    let n = value.floor() as u64;
    match (n, unit) {
        (1, _) => format!("1 {}", unit),
        (_, "century") => format!("{} centuries", n),
        _ => format!("{} {}s", n, unit),
    }
}
