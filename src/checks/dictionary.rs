//! Dictionary check - flags candidates matching known weak passwords.

use secrecy::ExposeSecret;

use super::CheckContext;
use crate::types::WeaknessCode;

/// Flags candidates found in the common-password dictionary.
///
/// Matching rules (case folding, trailing digit/symbol stripping) live in
/// [`crate::dictionary::Dictionary::is_common`].
pub fn common_password_check(ctx: &CheckContext<'_>) -> Option<WeaknessCode> {
    if ctx.dictionary.is_common(ctx.candidate.expose_secret()) {
        return Some(WeaknessCode::CommonPassword);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::tests_support::context;

    #[test]
    fn test_common_password() {
        context("password", |ctx| {
            assert_eq!(
                common_password_check(&ctx),
                Some(WeaknessCode::CommonPassword)
            );
        });
    }

    #[test]
    fn test_common_password_with_trailing_digits() {
        context("Password2024!", |ctx| {
            assert_eq!(
                common_password_check(&ctx),
                Some(WeaknessCode::CommonPassword)
            );
        });
    }

    #[test]
    fn test_uncommon_password() {
        context("CorrectHorseBatteryStaple!17", |ctx| {
            assert_eq!(common_password_check(&ctx), None);
        });
    }

    #[test]
    fn test_empty_candidate() {
        context("", |ctx| {
            assert_eq!(common_password_check(&ctx), None);
        });
    }
}
