use chrono::{DateTime, Utc};

/// A provider-specific record before normalization.
///
/// Every field is optional because no two providers agree on a schema: the
/// NewsData-style aggregator sends `pubDate`/`source_id`/`link`, the
/// NewsAPI-style one sends `publishedAt`/`url`, feeds carry an already-parsed
/// timestamp and a `summary`. The accessor methods below document the
/// fallback precedence for each canonical field; date resolution lives in the
/// normalizer because it involves parsing.
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    pub title: Option<String>,
    pub link: Option<String>,
    pub url: Option<String>,
    pub pub_date: Option<String>,
    pub published_at: Option<String>,
    /// Feed-parsed timestamp (`published` falling back to `updated`).
    pub published: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub source_id: Option<String>,
    pub source_name: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

impl RawRecord {
    /// The record title, trimmed; `None` when missing or blank.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    /// Link precedence: `link`, then `url`.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        non_empty(self.link.as_deref()).or_else(|| non_empty(self.url.as_deref()))
    }

    /// Body precedence: `description`, then `content`, then `summary`.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
            .or_else(|| non_empty(self.content.as_deref()))
            .or_else(|| non_empty(self.summary.as_deref()))
    }

    /// Source precedence: `source_id`, then `source_name`.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        non_empty(self.source_id.as_deref()).or_else(|| non_empty(self.source_name.as_deref()))
    }
}
