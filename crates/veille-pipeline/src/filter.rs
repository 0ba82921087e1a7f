//! Pure presentation filters over enriched articles.
//!
//! Every function is side-effect free and preserves input order.

use std::collections::HashSet;

use crate::article::Article;

/// Language selection; [`LanguageFilter::All`] is the "no filter" sentinel.
#[derive(Debug, Clone)]
pub enum LanguageFilter {
    All,
    Only(HashSet<String>),
}

impl LanguageFilter {
    /// An empty code list means "no filter".
    #[must_use]
    pub fn from_codes(codes: &[String]) -> Self {
        if codes.is_empty() {
            LanguageFilter::All
        } else {
            LanguageFilter::Only(codes.iter().cloned().collect())
        }
    }

    fn matches(&self, language: &str) -> bool {
        match self {
            LanguageFilter::All => true,
            LanguageFilter::Only(codes) => codes.contains(language),
        }
    }
}

/// Keep articles whose detected language is in the selected set.
#[must_use]
pub fn filter_by_language(mut articles: Vec<Article>, filter: &LanguageFilter) -> Vec<Article> {
    articles.retain(|a| filter.matches(&a.language));
    articles
}

/// Keep articles with the given model tag; `None` means no filter.
#[must_use]
pub fn filter_by_model(mut articles: Vec<Article>, model_tag: Option<&str>) -> Vec<Article> {
    if let Some(tag) = model_tag {
        articles.retain(|a| a.model_tag == tag);
    }
    articles
}

/// Keep articles whose title contains the keyword, case-insensitive;
/// `None` means no filter.
#[must_use]
pub fn filter_by_keyword(mut articles: Vec<Article>, keyword: Option<&str>) -> Vec<Article> {
    if let Some(keyword) = keyword {
        let needle = keyword.to_lowercase();
        articles.retain(|a| a.title.to_lowercase().contains(&needle));
    }
    articles
}

/// Cap to the first `limit` rows.
#[must_use]
pub fn cap(mut articles: Vec<Article>, limit: usize) -> Vec<Article> {
    articles.truncate(limit);
    articles
}
