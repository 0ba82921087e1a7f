use chrono::{DateTime, Utc};
use serde::Serialize;

/// The canonical record after normalization, before enrichment.
///
/// `date` is guaranteed present: rows whose date could not be resolved are
/// dropped by the normalizer. `content` may be empty.
#[derive(Debug, Clone)]
pub struct NormalizedArticle {
    pub date: DateTime<Utc>,
    pub title: String,
    pub content: String,
    pub source: String,
    pub link: String,
}

/// Three-class tone label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    Positive,
    Neutral,
    Negative,
}

impl Tone {
    /// Map a classifier's raw label onto a tone, normalizing case.
    ///
    /// Total: unknown labels map to `Neutral`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "positive" | "pos" => Tone::Positive,
            "negative" | "neg" => Tone::Negative,
            _ => Tone::Neutral,
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tone::Positive => write!(f, "Positive"),
            Tone::Neutral => write!(f, "Neutral"),
            Tone::Negative => write!(f, "Negative"),
        }
    }
}

/// A fully enriched article, ready for filtering and display.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    pub date: DateTime<Utc>,
    pub title: String,
    pub content: String,
    pub source: String,
    pub link: String,
    /// ISO 639-1-style code, or `"unknown"`.
    pub language: String,
    /// Matched model-tag vocabulary token, or the configured fallback.
    pub model_tag: String,
    pub tone: Tone,
    /// Bounded content prefix with a trailing ellipsis.
    pub summary: String,
}
