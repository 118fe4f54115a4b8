//! Secure password generation.
//!
//! The random source is injected so tests can substitute a seeded
//! generator without weakening production randomness; the default is
//! the operating system CSPRNG.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};

use crate::types::{GeneratedPassword, GenerationSpec, ValidationError};

/// Lowercase alphabet, always included.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Uppercase alphabet, always included.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Digit alphabet, always included.
pub const DIGITS: &str = "0123456789";
/// Symbol alphabet, included on request.
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{};:,.<>?";

/// Password generator over a cryptographically secure random source.
pub struct PasswordGenerator<R = OsRng> {
    rng: R,
}

impl PasswordGenerator<OsRng> {
    /// Generator backed by the operating system CSPRNG.
    pub fn new() -> Self {
        PasswordGenerator { rng: OsRng }
    }
}

impl Default for PasswordGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + CryptoRng> PasswordGenerator<R> {
    /// Generator backed by the given random source.
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    /// Generates a password matching `spec`.
    ///
    /// Every included class appears at least once in the output whenever
    /// `spec.length` is at least the number of included classes; below
    /// that, coverage is best effort.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLength`] when `spec.length < 1`
    /// and [`ValidationError::EmptyPool`] when no class is available.
    pub fn generate(&mut self, spec: &GenerationSpec) -> Result<GeneratedPassword, ValidationError> {
        if spec.length < 1 {
            return Err(ValidationError::InvalidLength(spec.length));
        }

        let classes = included_classes(spec);
        let pool: Vec<char> = classes.iter().flat_map(|class| class.chars()).collect();
        if pool.is_empty() {
            return Err(ValidationError::EmptyPool);
        }

        // Uniform rejects out-of-range draws internally, no modulo bias
        let dist = Uniform::from(0..pool.len());
        let mut chars: Vec<char> = (0..spec.length)
            .map(|_| pool[dist.sample(&mut self.rng)])
            .collect();

        self.ensure_coverage(&mut chars, &classes);

        Ok(GeneratedPassword::new(chars.into_iter().collect()))
    }

    /// One bounded pass over the included classes, replacing a character
    /// for each class still missing from the output.
    ///
    /// Replacement positions are restricted to characters whose own class
    /// keeps another member, so a fix never undoes an earlier one. Only
    /// when no such position exists (length below the class count) does
    /// coverage degrade to best effort.
    fn ensure_coverage(&mut self, chars: &mut [char], classes: &[&'static str]) {
        for class in classes {
            if chars.iter().any(|c| class.contains(*c)) {
                continue;
            }

            let mut counts = vec![0usize; classes.len()];
            for c in chars.iter() {
                counts[class_index(*c, classes)] += 1;
            }

            let candidates: Vec<usize> = (0..chars.len())
                .filter(|&i| counts[class_index(chars[i], classes)] >= 2)
                .collect();

            let pos = if candidates.is_empty() {
                self.rng.gen_range(0..chars.len())
            } else {
                candidates[self.rng.gen_range(0..candidates.len())]
            };

            let members: Vec<char> = class.chars().collect();
            chars[pos] = members[self.rng.gen_range(0..members.len())];
        }
    }
}

fn included_classes(spec: &GenerationSpec) -> Vec<&'static str> {
    let mut classes = vec![LOWERCASE, UPPERCASE, DIGITS];
    if spec.include_symbols {
        classes.push(SYMBOLS);
    }
    classes
}

fn class_index(c: char, classes: &[&'static str]) -> usize {
    classes
        .iter()
        .position(|class| class.contains(c))
        .unwrap_or(0)
}
