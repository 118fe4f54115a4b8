//! Entropy estimation.
//!
//! Baseline is the Shannon bound for uniform independent choice from the
//! classified pool, `length * log2(pool_size)`. Detected weaknesses make
//! guessing cheaper than the combinatorial bound suggests, so each one
//! applies a multiplicative discount. The discounts compose and the
//! result never drops below 0.

use crate::classifier::ClassProfile;
use crate::types::WeaknessCode;

/// Discount for a dictionary hit.
pub const COMMON_PASSWORD_DISCOUNT: f64 = 0.5;
/// Discount for repeated or sequential runs.
pub const PATTERN_DISCOUNT: f64 = 0.85;
/// Discount for poor class diversity (one or two classes).
pub const DIVERSITY_DISCOUNT: f64 = 0.9;
/// Discount for candidates below the minimum length.
pub const SHORT_DISCOUNT: f64 = 0.9;

/// Discount factor applied for one detected weakness.
pub fn discount(code: WeaknessCode) -> f64 {
    match code {
        WeaknessCode::CommonPassword => COMMON_PASSWORD_DISCOUNT,
        WeaknessCode::RepeatedRun | WeaknessCode::SequentialRun => PATTERN_DISCOUNT,
        WeaknessCode::SingleClass | WeaknessCode::LowClassDiversity => DIVERSITY_DISCOUNT,
        WeaknessCode::TooShort => SHORT_DISCOUNT,
    }
}

/// Estimates entropy in bits for a classified candidate.
///
/// Pool sizes of 0 or 1 carry no information and yield 0 bits.
pub fn estimate(profile: &ClassProfile, weaknesses: &[WeaknessCode]) -> f64 {
    let pool = profile.pool_size();
    if pool <= 1 || profile.length == 0 {
        return 0.0;
    }

    let mut bits = profile.length as f64 * f64::from(pool).log2();
    for code in weaknesses {
        bits *= discount(*code);
    }
    bits.max(0.0)
}
