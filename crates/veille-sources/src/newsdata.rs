//! Client for the NewsData-style aggregator.
//!
//! GET endpoint taking `apikey`, `q`, optional `language`/`country`, and
//! `page`; responds with a `results` array carrying `pubDate`, `title`,
//! `description`/`content`, `source_id`, and `link`.

use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::SourceError;
use crate::http;
use crate::types::RawRecord;

const DEFAULT_BASE_URL: &str = "https://newsdata.io/api/1/news";

pub struct NewsdataClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

#[derive(Debug, Deserialize)]
struct NewsdataResponse {
    #[serde(default)]
    results: Vec<NewsdataArticle>,
}

#[derive(Debug, Deserialize)]
struct NewsdataArticle {
    title: Option<String>,
    link: Option<String>,
    description: Option<String>,
    content: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    source_id: Option<String>,
}

impl NewsdataClient {
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

    /// Fetches the latest articles for a query. One request, no retry.
    ///
    /// # Errors
    ///
    /// - [`SourceError::Http`] on network failure or non-2xx status.
    /// - [`SourceError::Api`] if the provider reports an error status.
    /// - [`SourceError::Deserialize`] if the response shape is unexpected.
    pub async fn latest_news(
        &self,
        query: &str,
        language: Option<&str>,
        country: Option<&str>,
        page: Option<&str>,
    ) -> Result<Vec<RawRecord>, SourceError> {
        let url = self.build_url(query, language, country, page);
        let body = http::get_json(&self.client, &url, "newsdata").await?;
        Self::check_api_error(&body)?;

        let parsed: NewsdataResponse =
            serde_json::from_value(body).map_err(|e| SourceError::Deserialize {
                context: format!("newsdata latest_news(q={query})"),
                source: e,
            })?;

        Ok(parsed.results.into_iter().map(to_raw_record).collect())
    }

    fn build_url(
        &self,
        query: &str,
        language: Option<&str>,
        country: Option<&str>,
        page: Option<&str>,
    ) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("apikey", &self.api_key);
            pairs.append_pair("q", query);
            if let Some(language) = language {
                pairs.append_pair("language", language);
            }
            if let Some(country) = country {
                pairs.append_pair("country", country);
            }
            if let Some(page) = page {
                pairs.append_pair("page", page);
            }
        }
        url
    }

    /// The provider wraps errors in a 200 response with `"status": "error"`.
    fn check_api_error(body: &serde_json::Value) -> Result<(), SourceError> {
        if body.get("status").and_then(serde_json::Value::as_str) == Some("error") {
            let msg = body
                .get("results")
                .and_then(|r| r.get("message"))
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            return Err(SourceError::Api(msg));
        }
        Ok(())
    }
}

fn to_raw_record(article: NewsdataArticle) -> RawRecord {
    RawRecord {
        title: article.title,
        link: article.link,
        description: article.description,
        content: article.content,
        pub_date: article.pub_date,
        source_id: article.source_id,
        ..Default::default()
    }
}
