//! End-to-end watch orchestration.

use veille_core::{AppConfig, WatchFile};
use veille_sources::collect_raw_records;

use crate::article::Article;
use crate::enrich::Enricher;
use crate::normalize::normalize;
use crate::tone::ToneClassifier;

/// Result of one watch run.
#[derive(Debug)]
pub struct WatchOutcome {
    /// Raw records fetched before normalization drops anything.
    pub raw_count: usize,
    /// Normalized, enriched articles, newest first.
    pub articles: Vec<Article>,
}

impl WatchOutcome {
    /// True when the run produced nothing — the "no articles found" state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// Run one full watch: collect from every enabled adapter, normalize, enrich.
///
/// 1. Collect raw records sequentially from every enabled adapter.
/// 2. Normalize — field fallback resolution, date coercion, title dedup,
///    date-descending sort.
/// 3. Enrich each surviving row through the injected classifier.
///
/// Presentation filters are applied by the caller on the returned articles.
/// The run itself never fails: adapter and enrichment faults degrade to
/// defaults, and an empty outcome is a normal state.
pub async fn run_watch(
    app: &AppConfig,
    watch: &WatchFile,
    classifier: &dyn ToneClassifier,
) -> WatchOutcome {
    // Step 1: collect.
    let raw = collect_raw_records(app, watch).await;
    let raw_count = raw.len();
    tracing::debug!(count = raw_count, "collected raw records");

    // Step 2: normalize.
    let normalized = normalize(raw);
    tracing::debug!(
        count = normalized.len(),
        dropped = raw_count - normalized.len(),
        "normalized records"
    );

    // Step 3: enrich.
    let enricher = Enricher::new(&watch.model_tags, &watch.fallback_tag, classifier);
    let articles = enricher.enrich_all(normalized);

    tracing::info!(raw = raw_count, analyzed = articles.len(), "watch run complete");

    WatchOutcome {
        raw_count,
        articles,
    }
}
