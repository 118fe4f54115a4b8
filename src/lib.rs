//! Password strength evaluation and secure generation library
//!
//! This library provides password strength evaluation (entropy estimate,
//! weakness detection, 0-100 score) and cryptographically secure password
//! generation with a class-coverage guarantee.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_DICT_PATH`: Custom path to a common-password dictionary file
//!   (default: curated list embedded in the crate)
//!
//! # Example
//!
//! ```rust
//! use pwd_engine::{Dictionary, Evaluator, GenerationSpec, PasswordGenerator};
//! use secrecy::SecretString;
//! use std::sync::Arc;
//!
//! // Load the dictionary once at startup and share it
//! let dictionary = Arc::new(Dictionary::builtin());
//! let evaluator = Evaluator::new(dictionary);
//!
//! // Evaluate a candidate
//! let candidate = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let verdict = evaluator.evaluate(&candidate);
//! println!("Score: {}", verdict.score);
//! println!("Level: {:?}", verdict.level);
//!
//! // Generate a password
//! let mut generator = PasswordGenerator::new();
//! let password = generator
//!     .generate(&GenerationSpec { length: 20, include_symbols: true })
//!     .expect("valid spec");
//! assert_eq!(password.len(), 20);
//! ```

// Internal modules
mod checks;
mod classifier;
mod dictionary;
mod entropy;
mod evaluator;
mod generator;
mod score;
mod types;

// Public API
pub use classifier::{ClassProfile, classify};
pub use dictionary::{DICT_PATH_ENV, Dictionary, DictionaryError};
pub use entropy::estimate;
pub use evaluator::Evaluator;
pub use generator::PasswordGenerator;
pub use score::score;
pub use types::{
    DEFAULT_LENGTH, EvaluationResult, GeneratedPassword, GenerationSpec, Level, ValidationError,
    WeaknessCode,
};
