//! Password evaluator - composes classification, checks, entropy and scoring.

use std::sync::Arc;

use secrecy::SecretString;

use crate::checks::{CheckContext, run_checks};
use crate::classifier::classify;
use crate::dictionary::Dictionary;
use crate::entropy::estimate;
use crate::score::score;
use crate::types::EvaluationResult;

/// Evaluation facade.
///
/// Holds a shared reference to the common-password dictionary; everything
/// else is computed per call. Evaluation is pure and safe under unlimited
/// concurrent invocation.
#[derive(Debug, Clone)]
pub struct Evaluator {
    dictionary: Arc<Dictionary>,
}

impl Evaluator {
    /// Builds an evaluator over an already loaded dictionary.
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Evaluator { dictionary }
    }

    /// The dictionary this evaluator consults.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Evaluates a candidate password.
    ///
    /// Total over all input: every candidate, including the empty string,
    /// yields a best-effort verdict.
    pub fn evaluate(&self, candidate: &SecretString) -> EvaluationResult {
        let profile = classify(candidate);

        let problems = run_checks(&CheckContext {
            candidate,
            profile: &profile,
            dictionary: &self.dictionary,
        });

        let entropy_bits = estimate(&profile, &problems);
        let (score, level) = score(entropy_bits, problems.len());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "evaluated candidate: score={} level={:?} problems={}",
            score,
            level,
            problems.len()
        );

        EvaluationResult {
            level,
            score,
            entropy_bits,
            problems,
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::new(Arc::new(Dictionary::builtin()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Level, WeaknessCode};
    use proptest::prelude::*;

    fn evaluate(candidate: &str) -> EvaluationResult {
        let evaluator = Evaluator::default();
        evaluator.evaluate(&SecretString::new(candidate.to_string().into()))
    }

    #[test]
    fn test_common_single_class_password_is_weak() {
        let result = evaluate("password");
        assert!(result.problems.contains(&WeaknessCode::CommonPassword));
        assert!(result.problems.contains(&WeaknessCode::SingleClass));
        assert!(result.score <= 20, "expected <= 20, got {}", result.score);
        assert_eq!(result.level, Level::Weak);
    }

    #[test]
    fn test_empty_candidate() {
        let result = evaluate("");
        assert_eq!(result.entropy_bits, 0.0);
        assert_eq!(result.score, 0);
        assert_eq!(result.level, Level::Weak);
        assert_eq!(result.problems, vec![WeaknessCode::TooShort]);
    }

    #[test]
    fn test_four_class_passphrase_scores_high() {
        let result = evaluate("Tr0ub4dor&3");
        assert!(result.problems.is_empty(), "unexpected: {:?}", result.problems);
        assert!(matches!(result.level, Level::Strong | Level::VeryStrong));
    }

    #[test]
    fn test_score_stays_in_bounds() {
        for candidate in [
            "",
            "a",
            "password",
            "aaabbbccc",
            "MyPass123!",
            "日本語のパスワード",
            "VeryLongAndVeryRandomPassphrase!!2847%%xKqW",
        ] {
            let result = evaluate(candidate);
            assert!(result.score <= 100);
            assert!(result.entropy_bits >= 0.0);
            assert_eq!(result.level, Level::from_score(result.score));
        }
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let evaluator = Evaluator::default();
        let candidate = SecretString::new("S0me-Candidate!".to_string().into());
        assert_eq!(evaluator.evaluate(&candidate), evaluator.evaluate(&candidate));
    }

    #[test]
    fn test_problems_keep_detection_order() {
        // short, sequential, common and two classes at once
        let result = evaluate("abc123");
        let order = [
            WeaknessCode::TooShort,
            WeaknessCode::RepeatedRun,
            WeaknessCode::SequentialRun,
            WeaknessCode::CommonPassword,
            WeaknessCode::SingleClass,
            WeaknessCode::LowClassDiversity,
        ];
        let positions: Vec<usize> = result
            .problems
            .iter()
            .map(|p| order.iter().position(|c| c == p).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
        assert!(result.problems.contains(&WeaknessCode::TooShort));
        assert!(result.problems.contains(&WeaknessCode::SequentialRun));
        assert!(result.problems.contains(&WeaknessCode::CommonPassword));
    }

    #[test]
    fn test_dictionary_hit_from_builtin_list() {
        let evaluator = Evaluator::new(Arc::new(Dictionary::builtin()));
        let result =
            evaluator.evaluate(&SecretString::new("flamengo".to_string().into()));
        assert!(result.problems.contains(&WeaknessCode::CommonPassword));
    }

    #[test]
    fn test_wire_serialization() {
        let result = evaluate("password");
        let json: serde_json::Value = serde_json::to_value(&result).unwrap();
        assert_eq!(json["nivel"], "weak");
        assert!(json["pontuacao"].is_u64());
        assert!(json["entropia_bits"].is_number());
        assert!(
            json["problemas"]
                .as_array()
                .unwrap()
                .iter()
                .all(|p| p.is_string())
        );
    }

    proptest! {
        #[test]
        fn prop_verdict_invariants(candidate in ".{0,40}") {
            let result = evaluate(&candidate);
            prop_assert!(result.score <= 100);
            prop_assert!(result.entropy_bits >= 0.0);
            prop_assert_eq!(result.level, Level::from_score(result.score));

            let mut deduped = result.problems.clone();
            deduped.dedup();
            prop_assert_eq!(result.problems, deduped);
        }

        #[test]
        fn prop_evaluation_is_pure(candidate in ".{0,40}") {
            prop_assert_eq!(evaluate(&candidate), evaluate(&candidate));
        }
    }
}
