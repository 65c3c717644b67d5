//! Password analysis sections
//!
//! Each section computes one aspect of the analysis; the analyzer runs them
//! in order.

mod characters;
mod entropy;
mod keyboard;
mod patterns;
mod scoring;

pub use characters::{profile_characters, CharacterAnalysis};
pub use entropy::{alphabet_size, entropy_bits, estimate_crack_time};
pub use keyboard::find_keyboard_patterns;
pub use patterns::{detect_patterns, PatternFindings};
pub use scoring::{calculate_score, recommendations, StrengthColor, StrengthLabel};
