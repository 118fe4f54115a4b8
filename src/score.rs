//! Scoring - maps entropy and weakness count to a 0-100 score and level.

use crate::types::Level;

/// Entropy considered "fully strong"; estimates at or above this
/// normalize to 100 before penalties.
pub const REFERENCE_MAX_BITS: f64 = 80.0;

/// Points subtracted per distinct detected weakness.
pub const WEAKNESS_PENALTY: f64 = 10.0;

/// Computes the clamped 0-100 score and its qualitative level.
///
/// Monotonic: lower entropy or more weaknesses never raises the score.
pub fn score(entropy_bits: f64, weakness_count: usize) -> (u8, Level) {
    let normalized = (entropy_bits / REFERENCE_MAX_BITS * 100.0).min(100.0);
    let penalized = normalized - weakness_count as f64 * WEAKNESS_PENALTY;
    let score = penalized.clamp(0.0, 100.0).round() as u8;
    (score, Level::from_score(score))
}
