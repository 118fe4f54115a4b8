//! Core value types shared between evaluation and generation.
//!
//! Serialized field names follow the wire contract consumed by the
//! boundary layer (`nivel`, `pontuacao`, `entropia_bits`, `problemas`,
//! `tamanho`, `simbolos`, `senha`).

use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Qualitative strength level derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Level {
    /// Maps a clamped 0-100 score to its level.
    ///
    /// Thresholds: `<40` weak, `<60` medium, `<80` strong, `>=80` very strong.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=39 => Level::Weak,
            40..=59 => Level::Medium,
            60..=79 => Level::Strong,
            _ => Level::VeryStrong,
        }
    }
}

/// Stable identifier for one detected structural flaw in a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaknessCode {
    TooShort,
    RepeatedRun,
    SequentialRun,
    CommonPassword,
    SingleClass,
    LowClassDiversity,
}

impl WeaknessCode {
    /// Stable snake_case identifier, independent of the display message.
    pub fn code(&self) -> &'static str {
        match self {
            WeaknessCode::TooShort => "too_short",
            WeaknessCode::RepeatedRun => "repeated_run",
            WeaknessCode::SequentialRun => "sequential_run",
            WeaknessCode::CommonPassword => "common_password",
            WeaknessCode::SingleClass => "single_class",
            WeaknessCode::LowClassDiversity => "low_class_diversity",
        }
    }

    /// Human-readable message reported to the caller.
    pub fn message(&self) -> &'static str {
        match self {
            WeaknessCode::TooShort => "Password is shorter than 8 characters",
            WeaknessCode::RepeatedRun => "Password contains repeated character runs",
            WeaknessCode::SequentialRun => "Password contains sequential patterns",
            WeaknessCode::CommonPassword => "Password is among the most common passwords",
            WeaknessCode::SingleClass => "Password uses a single character class",
            WeaknessCode::LowClassDiversity => "Password uses only two character classes",
        }
    }
}

fn serialize_messages<S>(problems: &[WeaknessCode], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut seq = serializer.serialize_seq(Some(problems.len()))?;
    for code in problems {
        seq.serialize_element(code.message())?;
    }
    seq.end()
}

/// Complete verdict for one candidate password.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    /// Qualitative level derived from the score.
    #[serde(rename = "nivel")]
    pub level: Level,
    /// Numeric score in `[0, 100]`.
    #[serde(rename = "pontuacao")]
    pub score: u8,
    /// Entropy estimate in bits, never negative.
    #[serde(rename = "entropia_bits")]
    pub entropy_bits: f64,
    /// Detected weaknesses, deduplicated, in detection order.
    /// Serialized as the human-readable messages.
    #[serde(rename = "problemas", serialize_with = "serialize_messages")]
    pub problems: Vec<WeaknessCode>,
}

/// Default requested length when the caller does not specify one.
pub const DEFAULT_LENGTH: usize = 16;

fn default_length() -> usize {
    DEFAULT_LENGTH
}

/// Caller request describing the password to generate.
///
/// Lowercase, uppercase and digit classes are always included;
/// symbols are opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GenerationSpec {
    /// Requested length in characters.
    #[serde(rename = "tamanho", default = "default_length")]
    pub length: usize,
    /// Whether to include the symbol class in the pool.
    #[serde(rename = "simbolos", default)]
    pub include_symbols: bool,
}

impl Default for GenerationSpec {
    fn default() -> Self {
        GenerationSpec {
            length: DEFAULT_LENGTH,
            include_symbols: false,
        }
    }
}

/// A freshly generated password, exactly `spec.length` characters long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPassword {
    #[serde(rename = "senha")]
    password: String,
}

impl GeneratedPassword {
    pub(crate) fn new(password: String) -> Self {
        GeneratedPassword { password }
    }

    /// The generated password characters.
    pub fn as_str(&self) -> &str {
        &self.password
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.password.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.password.is_empty()
    }

    /// Consumes the wrapper and returns the raw string.
    pub fn into_string(self) -> String {
        self.password
    }
}

/// Rejected generation request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Requested length must be at least 1, got {0}")]
    InvalidLength(usize),
    #[error("Character pool is empty")]
    EmptyPool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_thresholds() {
        assert_eq!(Level::from_score(0), Level::Weak);
        assert_eq!(Level::from_score(39), Level::Weak);
        assert_eq!(Level::from_score(40), Level::Medium);
        assert_eq!(Level::from_score(59), Level::Medium);
        assert_eq!(Level::from_score(60), Level::Strong);
        assert_eq!(Level::from_score(79), Level::Strong);
        assert_eq!(Level::from_score(80), Level::VeryStrong);
        assert_eq!(Level::from_score(100), Level::VeryStrong);
    }

    #[test]
    fn test_level_serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&Level::VeryStrong).unwrap(),
            "\"very_strong\""
        );
        assert_eq!(serde_json::to_string(&Level::Weak).unwrap(), "\"weak\"");
    }

    #[test]
    fn test_weakness_codes_are_stable() {
        assert_eq!(WeaknessCode::TooShort.code(), "too_short");
        assert_eq!(WeaknessCode::CommonPassword.code(), "common_password");
        assert_eq!(WeaknessCode::LowClassDiversity.code(), "low_class_diversity");
    }

    #[test]
    fn test_evaluation_result_wire_fields() {
        let result = EvaluationResult {
            level: Level::Weak,
            score: 3,
            entropy_bits: 12.5,
            problems: vec![WeaknessCode::TooShort, WeaknessCode::SingleClass],
        };

        let json: serde_json::Value = serde_json::to_value(&result).unwrap();
        assert_eq!(json["nivel"], "weak");
        assert_eq!(json["pontuacao"], 3);
        assert_eq!(json["entropia_bits"], 12.5);
        let problems = json["problemas"].as_array().unwrap();
        assert_eq!(problems.len(), 2);
        assert_eq!(problems[0], WeaknessCode::TooShort.message());
        assert_eq!(problems[1], WeaknessCode::SingleClass.message());
    }

    #[test]
    fn test_generation_spec_defaults() {
        let spec: GenerationSpec = serde_json::from_str("{}").unwrap();
        assert_eq!(spec.length, 16);
        assert!(!spec.include_symbols);
        assert_eq!(spec, GenerationSpec::default());
    }

    #[test]
    fn test_generation_spec_wire_fields() {
        let spec: GenerationSpec =
            serde_json::from_str(r#"{"tamanho": 20, "simbolos": true}"#).unwrap();
        assert_eq!(spec.length, 20);
        assert!(spec.include_symbols);
    }

    #[test]
    fn test_generated_password_wire_field() {
        let pwd = GeneratedPassword::new("abc123XYZ".to_string());
        let json: serde_json::Value = serde_json::to_value(&pwd).unwrap();
        assert_eq!(json["senha"], "abc123XYZ");
    }
}
