//! Character classification - derives the class profile of a candidate.

use secrecy::{ExposeSecret, SecretString};

/// Alphabet size credited for the lowercase class.
pub const LOWER_ALPHABET: u32 = 26;
/// Alphabet size credited for the uppercase class.
pub const UPPER_ALPHABET: u32 = 26;
/// Alphabet size credited for the digit class.
pub const DIGIT_ALPHABET: u32 = 10;
/// Alphabet size credited for the symbol class.
pub const SYMBOL_ALPHABET: u32 = 32;
/// Alphabet size credited for characters outside the four main classes
/// (e.g. CJK letters, non-ASCII numerics).
pub const EXTENDED_ALPHABET: u32 = 94;

/// Character-class profile of a candidate password.
///
/// Derived per evaluation, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassProfile {
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
    /// Characters that fit none of the four main classes.
    pub has_extended: bool,
    /// Candidate length in characters.
    pub length: usize,
}

impl ClassProfile {
    /// Number of main character classes present (extended excluded).
    pub fn class_count(&self) -> usize {
        [self.has_lower, self.has_upper, self.has_digit, self.has_symbol]
            .iter()
            .filter(|&&present| present)
            .count()
    }

    /// Size of the combined alphabet implied by the observed classes.
    ///
    /// Each present class contributes its alphabet size once.
    /// An empty candidate has pool size 0.
    pub fn pool_size(&self) -> u32 {
        let mut pool = 0;
        if self.has_lower {
            pool += LOWER_ALPHABET;
        }
        if self.has_upper {
            pool += UPPER_ALPHABET;
        }
        if self.has_digit {
            pool += DIGIT_ALPHABET;
        }
        if self.has_symbol {
            pool += SYMBOL_ALPHABET;
        }
        if self.has_extended {
            pool += EXTENDED_ALPHABET;
        }
        pool
    }
}

/// Scans the candidate once and derives its class profile.
///
/// Total over all input; the empty candidate yields the default profile.
pub fn classify(candidate: &SecretString) -> ClassProfile {
    let mut profile = ClassProfile::default();

    for c in candidate.expose_secret().chars() {
        profile.length += 1;
        if c.is_lowercase() {
            profile.has_lower = true;
        } else if c.is_uppercase() {
            profile.has_upper = true;
        } else if c.is_ascii_digit() {
            profile.has_digit = true;
        } else if !c.is_alphanumeric() {
            profile.has_symbol = true;
        } else {
            profile.has_extended = true;
        }
    }

    profile
}
