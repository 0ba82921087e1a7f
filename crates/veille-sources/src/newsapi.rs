//! Client for the NewsAPI-style aggregator.
//!
//! GET endpoint taking `q`, optional `language`, `sortBy`, and `pageSize`;
//! responds with an `articles` array carrying `title`, `url`, `publishedAt`,
//! `description`/`content`, and a nested `source.name`.

use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::SourceError;
use crate::http;
use crate::types::RawRecord;

const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2/everything";

pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    #[serde(default)]
    articles: Vec<NewsApiArticle>,
}

#[derive(Debug, Deserialize)]
struct NewsApiArticle {
    title: Option<String>,
    url: Option<String>,
    description: Option<String>,
    content: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    source: Option<NewsApiSource>,
}

#[derive(Debug, Deserialize)]
struct NewsApiSource {
    name: Option<String>,
}

impl NewsApiClient {
    /// Creates a client pointed at the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, SourceError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SourceError::BaseUrl`] if `base_url` is
    /// not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, SourceError> {
        Ok(Self {
            client: http::build_client(timeout_secs, user_agent)?,
            api_key: api_key.to_owned(),
            base_url: http::parse_base_url(base_url)?,
        })
    }

    /// Searches articles for a query, newest first. One request, no retry.
    ///
    /// # Errors
    ///
    /// - [`SourceError::Http`] on network failure or non-2xx status.
    /// - [`SourceError::Api`] if the provider reports an error status.
    /// - [`SourceError::Deserialize`] if the response shape is unexpected.
    pub async fn everything(
        &self,
        query: &str,
        language: Option<&str>,
        sort_by: &str,
        page_size: usize,
    ) -> Result<Vec<RawRecord>, SourceError> {
        let url = self.build_url(query, language, sort_by, page_size);
        let body = http::get_json(&self.client, &url, "newsapi").await?;
        Self::check_api_error(&body)?;

        let parsed: NewsApiResponse =
            serde_json::from_value(body).map_err(|e| SourceError::Deserialize {
                context: format!("newsapi everything(q={query})"),
                source: e,
            })?;

        Ok(parsed.articles.into_iter().map(to_raw_record).collect())
    }

    fn build_url(
        &self,
        query: &str,
        language: Option<&str>,
        sort_by: &str,
        page_size: usize,
    ) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("apiKey", &self.api_key);
            pairs.append_pair("q", query);
            if let Some(language) = language {
                pairs.append_pair("language", language);
            }
            pairs.append_pair("sortBy", sort_by);
            pairs.append_pair("pageSize", &page_size.to_string());
        }
        url
    }

    /// The provider wraps errors in `"status": "error"` with a `message`.
    fn check_api_error(body: &serde_json::Value) -> Result<(), SourceError> {
        if body.get("status").and_then(serde_json::Value::as_str) == Some("error") {
            let msg = body
                .get("message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            return Err(SourceError::Api(msg));
        }
        Ok(())
    }
}

fn to_raw_record(article: NewsApiArticle) -> RawRecord {
    RawRecord {
        title: article.title,
        url: article.url,
        description: article.description,
        content: article.content,
        published_at: article.published_at,
        source_name: article.source.and_then(|s| s.name),
        ..Default::default()
    }
}
