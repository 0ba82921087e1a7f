//! Raw-record normalization: field resolution, date coercion, dedup, sort.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use veille_sources::RawRecord;

use crate::article::NormalizedArticle;

/// Normalize a flattened batch of raw records into [`NormalizedArticle`]s.
///
/// Rows without a title are dropped (the title is the dedup key). Rows whose
/// date cannot be resolved are dropped — an explicit policy, not an accident.
/// Duplicate titles keep the first occurrence in upstream concatenation
/// order; the key is the exact title string, with no case or whitespace
/// normalization. The survivors are sorted descending by date.
#[must_use]
pub fn normalize(records: Vec<RawRecord>) -> Vec<NormalizedArticle> {
    let mut articles: Vec<NormalizedArticle> =
        records.into_iter().filter_map(to_article).collect();

    let mut seen = HashSet::new();
    articles.retain(|a| seen.insert(a.title.clone()));

    articles.sort_by(|a, b| b.date.cmp(&a.date));
    articles
}

fn to_article(record: RawRecord) -> Option<NormalizedArticle> {
    let title = record.title()?.to_string();
    let date = resolve_date(&record)?;
    Some(NormalizedArticle {
        date,
        title,
        content: record.body().unwrap_or("").to_string(),
        source: record.source().unwrap_or("unknown").to_string(),
        link: record.link().unwrap_or("").to_string(),
    })
}

/// Resolve a record's date with the documented precedence: the `pub_date`
/// text, then the `published_at` text, then the feed-parsed timestamp.
///
/// Precedence picks the first non-empty field; only that field is parsed. A
/// present-but-unparseable `pub_date` therefore drops the row even when
/// `published_at` would have parsed.
#[must_use]
pub fn resolve_date(record: &RawRecord) -> Option<DateTime<Utc>> {
    let text = record
        .pub_date
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| {
            record
                .published_at
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
        });

    match text {
        Some(text) => parse_date_text(text),
        None => record.published,
    }
}

/// Best-effort parse over the date shapes the providers actually emit:
/// RFC 3339, RFC 2822, `YYYY-MM-DD HH:MM:SS`, and bare `YYYY-MM-DD`.
#[must_use]
pub fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(day) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return day.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    None
}
