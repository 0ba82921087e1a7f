//! Per-row enrichment: language, model tag, tone, summary.

use crate::article::{Article, NormalizedArticle, Tone};
use crate::lang::detect_language;
use crate::tone::ToneClassifier;

/// Content prefix length fed to the tone classifier.
pub const CLASSIFY_PREFIX_CHARS: usize = 512;

/// Content prefix length used for the display summary.
pub const SUMMARY_PREFIX_CHARS: usize = 200;

/// Computes the derived fields for each normalized article.
///
/// Each derivation is independently fault-tolerant: language detection
/// degrades to `"unknown"`, tagging to the fallback tag, classification to
/// `Neutral`. The classifier is injected and shared across the whole run.
pub struct Enricher<'a> {
    model_tags: &'a [String],
    fallback_tag: &'a str,
    classifier: &'a dyn ToneClassifier,
}

impl<'a> Enricher<'a> {
    #[must_use]
    pub fn new(
        model_tags: &'a [String],
        fallback_tag: &'a str,
        classifier: &'a dyn ToneClassifier,
    ) -> Self {
        Self {
            model_tags,
            fallback_tag,
            classifier,
        }
    }

    #[must_use]
    pub fn enrich_all(&self, articles: Vec<NormalizedArticle>) -> Vec<Article> {
        articles.into_iter().map(|a| self.enrich(a)).collect()
    }

    #[must_use]
    pub fn enrich(&self, article: NormalizedArticle) -> Article {
        let language = detect_language(&article.content);
        let model_tag = detect_model_tag(&article.title, self.model_tags, self.fallback_tag);
        let tone = self.classify_tone(&article.content);
        let summary = summarize(&article.content);

        Article {
            date: article.date,
            title: article.title,
            content: article.content,
            source: article.source,
            link: article.link,
            language,
            model_tag,
            tone,
            summary,
        }
    }

    fn classify_tone(&self, content: &str) -> Tone {
        let prefix: String = content.chars().take(CLASSIFY_PREFIX_CHARS).collect();
        match self.classifier.classify(&prefix) {
            Ok(label) => Tone::from_label(&label),
            Err(e) => {
                tracing::debug!(error = %e, "tone classification failed; defaulting to neutral");
                Tone::Neutral
            }
        }
    }
}

/// First-match, case-insensitive substring search over the configured
/// vocabulary; no match yields the fallback tag.
///
/// Order is the operator's contract: a bare brand token listed before a
/// specific model token will shadow it, so the vocabulary lists specific
/// tokens first.
#[must_use]
pub fn detect_model_tag(title: &str, vocabulary: &[String], fallback: &str) -> String {
    let haystack = title.to_lowercase();
    vocabulary
        .iter()
        .find(|tag| haystack.contains(&tag.to_lowercase()))
        .cloned()
        .unwrap_or_else(|| fallback.to_string())
}

/// First 200 characters of `content` with a trailing ellipsis.
///
/// The ellipsis is appended even when the content is shorter than the prefix,
/// matching the display contract of the original dashboards.
#[must_use]
pub fn summarize(content: &str) -> String {
    let prefix: String = content.chars().take(SUMMARY_PREFIX_CHARS).collect();
    format!("{prefix}…")
}
