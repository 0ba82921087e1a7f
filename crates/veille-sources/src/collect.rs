//! Sequential collection across every enabled adapter.

use veille_core::{AppConfig, WatchFile};

use crate::error::SourceError;
use crate::feeds::fetch_feed;
use crate::gnews::GnewsClient;
use crate::http;
use crate::newsapi::NewsApiClient;
use crate::newsdata::NewsdataClient;
use crate::types::RawRecord;

const NEWSAPI_SORT_BY: &str = "publishedAt";
const NEWSAPI_PAGE_SIZE: usize = 50;
const GNEWS_MAX: usize = 50;

/// Collect raw records from every enabled adapter, in configuration order.
///
/// Adapters whose API key is absent are skipped. Every call is a single
/// best-effort try: failures are logged as warnings and collection continues
/// with the next query, language, or feed. All calls run in series; there is
/// no fan-out. Returns an empty `Vec` when everything fails or nothing is
/// configured.
pub async fn collect_raw_records(app: &AppConfig, watch: &WatchFile) -> Vec<RawRecord> {
    let mut records = Vec::new();

    collect_newsdata(app, watch, &mut records).await;
    collect_newsapi(app, watch, &mut records).await;
    collect_gnews(app, watch, &mut records).await;
    collect_feeds(app, watch, &mut records).await;

    records
}

/// Language fan-in: one pass per configured language, or a single untargeted
/// pass when no languages are configured.
fn language_passes(watch: &WatchFile) -> Vec<Option<&str>> {
    if watch.languages.is_empty() {
        vec![None]
    } else {
        watch.languages.iter().map(|l| Some(l.as_str())).collect()
    }
}

fn absorb(
    records: &mut Vec<RawRecord>,
    result: Result<Vec<RawRecord>, SourceError>,
    source: &str,
    query: &str,
) {
    match result {
        Ok(batch) => {
            tracing::debug!(source, query, count = batch.len(), "collected records");
            records.extend(batch);
        }
        Err(e) => {
            tracing::warn!(source, query, error = %e, "fetch failed; continuing");
        }
    }
}

async fn collect_newsdata(app: &AppConfig, watch: &WatchFile, records: &mut Vec<RawRecord>) {
    let Some(key) = app.newsdata_api_key.as_deref() else {
        tracing::debug!(source = "newsdata", "API key not set; adapter disabled");
        return;
    };
    let client = match NewsdataClient::new(key, app.http_timeout_secs, &app.user_agent) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!(source = "newsdata", error = %e, "client construction failed");
            return;
        }
    };
    for query in &watch.queries {
        for language in language_passes(watch) {
            let country = language.and_then(|l| watch.country_for(l));
            let result = client.latest_news(query, language, country, None).await;
            absorb(records, result, "newsdata", query);
        }
    }
}

async fn collect_newsapi(app: &AppConfig, watch: &WatchFile, records: &mut Vec<RawRecord>) {
    let Some(key) = app.newsapi_api_key.as_deref() else {
        tracing::debug!(source = "newsapi", "API key not set; adapter disabled");
        return;
    };
    let client = match NewsApiClient::new(key, app.http_timeout_secs, &app.user_agent) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!(source = "newsapi", error = %e, "client construction failed");
            return;
        }
    };
    for query in &watch.queries {
        for language in language_passes(watch) {
            let result = client
                .everything(query, language, NEWSAPI_SORT_BY, NEWSAPI_PAGE_SIZE)
                .await;
            absorb(records, result, "newsapi", query);
        }
    }
}

async fn collect_gnews(app: &AppConfig, watch: &WatchFile, records: &mut Vec<RawRecord>) {
    let Some(key) = app.gnews_api_key.as_deref() else {
        tracing::debug!(source = "gnews", "API key not set; adapter disabled");
        return;
    };
    let client = match GnewsClient::new(key, app.http_timeout_secs, &app.user_agent) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!(source = "gnews", error = %e, "client construction failed");
            return;
        }
    };
    for query in &watch.queries {
        for language in language_passes(watch) {
            let country = language.and_then(|l| watch.country_for(l));
            let result = client.search(query, language, country, GNEWS_MAX).await;
            absorb(records, result, "gnews", query);
        }
    }
}

async fn collect_feeds(app: &AppConfig, watch: &WatchFile, records: &mut Vec<RawRecord>) {
    if watch.feeds.is_empty() {
        return;
    }
    let client = match http::build_client(app.http_timeout_secs, &app.user_agent) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!(source = "feeds", error = %e, "client construction failed");
            return;
        }
    };
    for feed in &watch.feeds {
        let result = fetch_feed(&client, feed).await;
        absorb(records, result, "rss", &feed.url);
    }
}
