//! Client for the GNews-style aggregator.
//!
//! GET endpoint taking `apikey`, `q`, optional `lang`/`country`, and `max`;
//! responds with an `articles` array carrying `title`, `description`,
//! `content`, `url`, `publishedAt`, and a nested `source.name`.

use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::SourceError;
use crate::http;
use crate::types::RawRecord;

const DEFAULT_BASE_URL: &str = "https://gnews.io/api/v4/search";

pub struct GnewsClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

#[derive(Debug, Deserialize)]
struct GnewsResponse {
    #[serde(default)]
    articles: Vec<GnewsArticle>,
}

#[derive(Debug, Deserialize)]
struct GnewsArticle {
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    url: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    source: Option<GnewsSource>,
}

#[derive(Debug, Deserialize)]
struct GnewsSource {
    name: Option<String>,
}

impl GnewsClient {
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

    /// Searches recent articles for a query. One request, no retry.
    ///
    /// # Errors
    ///
    /// - [`SourceError::Http`] on network failure or non-2xx status.
    /// - [`SourceError::Deserialize`] if the response shape is unexpected.
    pub async fn search(
        &self,
        query: &str,
        language: Option<&str>,
        country: Option<&str>,
        max: usize,
    ) -> Result<Vec<RawRecord>, SourceError> {
        let url = self.build_url(query, language, country, max);
        let body = http::get_json(&self.client, &url, "gnews").await?;

        let parsed: GnewsResponse =
            serde_json::from_value(body).map_err(|e| SourceError::Deserialize {
                context: format!("gnews search(q={query})"),
                source: e,
            })?;

        Ok(parsed.articles.into_iter().map(to_raw_record).collect())
    }

    fn build_url(
        &self,
        query: &str,
        language: Option<&str>,
        country: Option<&str>,
        max: usize,
    ) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("apikey", &self.api_key);
            pairs.append_pair("q", query);
            if let Some(language) = language {
                pairs.append_pair("lang", language);
            }
            if let Some(country) = country {
                pairs.append_pair("country", country);
            }
            pairs.append_pair("max", &max.to_string());
        }
        url
    }
}

fn to_raw_record(article: GnewsArticle) -> RawRecord {
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
