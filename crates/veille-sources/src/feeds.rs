//! RSS/Atom feed adapter.

use chrono::Utc;

use veille_core::FeedConfig;

use crate::error::SourceError;
use crate::types::RawRecord;

/// Fetch one configured feed and map its entries into [`RawRecord`]s.
///
/// Entries are kept in feed order. When the feed carries a `title_filter`,
/// entries whose title does not contain it (case-insensitive) are excluded;
/// entries without a title only survive when no filter is set.
///
/// # Errors
///
/// Returns [`SourceError::Http`] on network failure or non-2xx status, and
/// [`SourceError::Feed`] when the body is not a parseable feed.
pub async fn fetch_feed(
    client: &reqwest::Client,
    feed: &FeedConfig,
) -> Result<Vec<RawRecord>, SourceError> {
    let response = client.get(&feed.url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;
    let parsed = feed_rs::parser::parse(&bytes[..])?;

    let filter = feed.title_filter.as_deref().map(str::to_lowercase);

    let records = parsed
        .entries
        .into_iter()
        .filter_map(|entry| {
            let title = entry.title.map(|t| t.content);
            if let Some(needle) = &filter {
                let haystack = title.as_deref().unwrap_or("").to_lowercase();
                if !haystack.contains(needle) {
                    return None;
                }
            }
            let link = entry.links.first().map(|l| l.href.clone());
            let published = entry
                .published
                .or(entry.updated)
                .map(|d| d.with_timezone(&Utc));
            let summary = entry.summary.map(|s| strip_html(&s.content));

            Some(RawRecord {
                title,
                link,
                published,
                summary,
                source_name: Some(feed.url.clone()),
                ..Default::default()
            })
        })
        .collect();

    Ok(records)
}

/// Strip HTML tags from a string, returning plain text.
fn strip_html(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(ch),
            _ => {}
        }
    }
    result.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_html_removes_tags() {
        assert_eq!(
            strip_html("<p>La nouvelle <b>DS7</b> arrive</p>"),
            "La nouvelle DS7 arrive"
        );
    }

    #[test]
    fn strip_html_passes_plain_text_through() {
        assert_eq!(strip_html("no markup here"), "no markup here");
    }
}
