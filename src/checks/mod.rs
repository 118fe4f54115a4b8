//! Weakness checks.
//!
//! Each check inspects one aspect of a candidate password and emits zero
//! or one weakness code. Checks are independent, side-effect-free and all
//! run on every evaluation, so one verdict can surface several problems
//! at once. Table order is also report order.

mod dictionary;
mod length;
mod pattern;
mod variety;

pub use dictionary::common_password_check;
pub use length::too_short_check;
pub use pattern::{repeated_run_check, sequential_run_check};
pub use variety::{class_diversity_check, single_class_check};

use secrecy::SecretString;

use crate::classifier::ClassProfile;
use crate::dictionary::Dictionary;
use crate::types::WeaknessCode;

/// Input shared by every check unit.
pub struct CheckContext<'a> {
    pub candidate: &'a SecretString,
    pub profile: &'a ClassProfile,
    pub dictionary: &'a Dictionary,
}

/// One check unit: given candidate and profile, produce zero or one code.
pub type Check = fn(&CheckContext<'_>) -> Option<WeaknessCode>;

/// Ordered check table.
pub const CHECKS: &[(&str, Check)] = &[
    ("length", too_short_check),
    ("repeat", repeated_run_check),
    ("sequence", sequential_run_check),
    ("dictionary", common_password_check),
    ("single_class", single_class_check),
    ("class_diversity", class_diversity_check),
];

/// Runs every check in table order and collects the detected codes.
///
/// The result carries no duplicates and preserves detection order.
pub fn run_checks(ctx: &CheckContext<'_>) -> Vec<WeaknessCode> {
    let mut detected = Vec::new();

    for (_name, check) in CHECKS {
        if let Some(code) = check(ctx) {
            #[cfg(feature = "tracing")]
            tracing::debug!("check '{}' detected weakness: {}", _name, code.code());
            if !detected.contains(&code) {
                detected.push(code);
            }
        }
    }

    detected
}
