//! Length check - flags candidates below the minimum length.

use super::CheckContext;
use crate::types::WeaknessCode;

/// Minimum acceptable candidate length in characters.
pub const MIN_LENGTH: usize = 8;

/// Flags candidates shorter than [`MIN_LENGTH`] characters.
pub fn too_short_check(ctx: &CheckContext<'_>) -> Option<WeaknessCode> {
    if ctx.profile.length < MIN_LENGTH {
        return Some(WeaknessCode::TooShort);
    }
    None
}
