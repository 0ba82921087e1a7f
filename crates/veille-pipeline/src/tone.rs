//! Tone classification capability and the default lexicon classifier.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("empty input")]
    EmptyInput,

    #[error("classifier error: {0}")]
    Model(String),
}

/// Three-class tone classifier.
///
/// Implementations return a raw label (`"positive"`, `"neutral"`,
/// `"negative"`, any casing); callers map it through
/// [`crate::article::Tone::from_label`]. Construct one classifier per process
/// and share it by reference — the pipeline never builds one per row.
pub trait ToneClassifier {
    /// Classify a bounded text prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError`] when the input cannot be classified; callers
    /// degrade to `Neutral`.
    fn classify(&self, text: &str) -> Result<String, ClassifyError>;
}

/// Word weights for automotive press coverage, French and English mixed
/// because the watched brand is covered in both.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The summed score is clamped to
/// `[-1.0, 1.0]`.
const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("great", 0.4),
    ("excellent", 0.5),
    ("best", 0.5),
    ("love", 0.5),
    ("award", 0.5),
    ("awarded", 0.5),
    ("acclaimed", 0.5),
    ("stylish", 0.4),
    ("elegant", 0.4),
    ("refined", 0.4),
    ("comfortable", 0.4),
    ("reliable", 0.4),
    ("premium", 0.3),
    ("innovative", 0.4),
    ("efficient", 0.3),
    ("success", 0.4),
    ("record", 0.3),
    ("win", 0.4),
    ("victory", 0.5),
    ("élégante", 0.4),
    ("fiable", 0.4),
    ("succès", 0.4),
    ("confort", 0.3),
    // Negative signals
    ("recall", -0.7),
    ("rappel", -0.7),
    ("defect", -0.6),
    ("défaut", -0.6),
    ("breakdown", -0.6),
    ("panne", -0.6),
    ("lawsuit", -0.5),
    ("fine", -0.3),
    ("failure", -0.4),
    ("failed", -0.4),
    ("problem", -0.3),
    ("problème", -0.3),
    ("concern", -0.3),
    ("complaint", -0.4),
    ("disappointing", -0.5),
    ("décevant", -0.5),
    ("worst", -0.6),
    ("bad", -0.4),
    ("terrible", -0.6),
    ("decline", -0.4),
    ("losses", -0.4),
    ("crash", -0.5),
];

const POSITIVE_THRESHOLD: f32 = 0.05;
const NEGATIVE_THRESHOLD: f32 = -0.05;

/// Weighted-lexicon tone classifier used when no external model is wired in.
///
/// Deterministic and dependency-free, which also makes it the reference
/// implementation for pipeline tests.
#[derive(Debug, Default)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    /// Sum matching word weights over whitespace-split, punctuation-trimmed,
    /// lowercased words, clamped to `[-1.0, 1.0]`.
    fn score(text: &str) -> f32 {
        let mut score = 0.0_f32;
        for word in text.split_whitespace() {
            let w = word
                .trim_matches(|c: char| !c.is_alphabetic())
                .to_lowercase();
            for &(lex_word, weight) in LEXICON {
                if w == lex_word {
                    score += weight;
                    break;
                }
            }
        }
        score.clamp(-1.0, 1.0)
    }
}

impl ToneClassifier for LexiconClassifier {
    fn classify(&self, text: &str) -> Result<String, ClassifyError> {
        if text.trim().is_empty() {
            return Err(ClassifyError::EmptyInput);
        }
        let score = Self::score(text);
        let label = if score > POSITIVE_THRESHOLD {
            "positive"
        } else if score < NEGATIVE_THRESHOLD {
            "negative"
        } else {
            "neutral"
        };
        Ok(label.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_an_error() {
        let err = LexiconClassifier.classify("").unwrap_err();
        assert!(matches!(err, ClassifyError::EmptyInput));
        let err = LexiconClassifier.classify("   ").unwrap_err();
        assert!(matches!(err, ClassifyError::EmptyInput));
    }

    #[test]
    fn unknown_words_are_neutral() {
        let label = LexiconClassifier
            .classify("the quick brown fox jumps")
            .unwrap();
        assert_eq!(label, "neutral");
    }

    #[test]
    fn positive_keywords_yield_positive() {
        let label = LexiconClassifier
            .classify("an elegant and comfortable SUV, simply excellent")
            .unwrap();
        assert_eq!(label, "positive");
    }

    #[test]
    fn negative_keywords_yield_negative() {
        let label = LexiconClassifier
            .classify("another recall after a breakdown")
            .unwrap();
        assert_eq!(label, "negative");
    }

    #[test]
    fn french_keywords_are_scored() {
        let label = LexiconClassifier
            .classify("une voiture élégante et fiable")
            .unwrap();
        assert_eq!(label, "positive");

        let label = LexiconClassifier
            .classify("encore un rappel après une panne")
            .unwrap();
        assert_eq!(label, "negative");
    }

    #[test]
    fn punctuation_is_stripped_before_matching() {
        let label = LexiconClassifier.classify("excellent!").unwrap();
        assert_eq!(label, "positive");
    }

    #[test]
    fn mixed_signals_can_cancel_out() {
        // great (+0.4) + recall (-0.7) + record (+0.3) = 0.0
        let label = LexiconClassifier
            .classify("great record but a recall")
            .unwrap();
        assert_eq!(label, "neutral");
    }

    #[test]
    fn score_clamps_to_unit_interval() {
        let text = "excellent best love victory award acclaimed elegant win";
        assert_eq!(LexiconClassifier::score(text), 1.0);

        let text = "recall rappel defect breakdown terrible worst lawsuit crash";
        assert_eq!(LexiconClassifier::score(text), -1.0);
    }
}
