//! Shared HTTP plumbing for the aggregator clients.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::SourceError;

/// Build a `reqwest::Client` with the standard timeout and user agent.
///
/// # Errors
///
/// Returns [`SourceError::Http`] if the client cannot be constructed.
pub(crate) fn build_client(timeout_secs: u64, user_agent: &str) -> Result<Client, SourceError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Parse and normalise a base URL so query pairs append to the right path.
///
/// # Errors
///
/// Returns [`SourceError::BaseUrl`] when the URL does not parse.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, SourceError> {
    Url::parse(base_url).map_err(|e| SourceError::BaseUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })
}

/// Send a GET request, assert a 2xx status, and parse the body as JSON.
///
/// `context` labels deserialize errors; it is a provider name rather than the
/// full URL so API keys never reach error messages or logs.
///
/// # Errors
///
/// Returns [`SourceError::Http`] on network failure or a non-2xx status, and
/// [`SourceError::Deserialize`] if the body is not valid JSON.
pub(crate) async fn get_json(
    client: &Client,
    url: &Url,
    context: &str,
) -> Result<serde_json::Value, SourceError> {
    let response = client.get(url.clone()).send().await?;
    let response = response.error_for_status()?;
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| SourceError::Deserialize {
        context: context.to_string(),
        source: e,
    })
}
