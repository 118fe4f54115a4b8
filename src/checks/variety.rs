//! Variety checks - character-class diversity of the candidate.
//!
//! The two checks are disjoint so one candidate is never penalized twice
//! for the same problem: `single_class` fires only when exactly one class
//! is present, `low_class_diversity` only when exactly two are.

use super::CheckContext;
use crate::types::WeaknessCode;

/// Flags candidates drawing on exactly one character class.
pub fn single_class_check(ctx: &CheckContext<'_>) -> Option<WeaknessCode> {
    if ctx.profile.class_count() == 1 {
        return Some(WeaknessCode::SingleClass);
    }
    None
}

/// Flags candidates drawing on exactly two character classes.
pub fn class_diversity_check(ctx: &CheckContext<'_>) -> Option<WeaknessCode> {
    if ctx.profile.class_count() == 2 {
        return Some(WeaknessCode::LowClassDiversity);
    }
    None
}
