//! Integration tests for the source adapters using wiremock HTTP mocks.

use veille_core::FeedConfig;
use veille_sources::{fetch_feed, GnewsClient, NewsApiClient, NewsdataClient, SourceError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn newsdata_parses_results_into_raw_records() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "success",
        "totalResults": 2,
        "results": [
            {
                "title": "DS7 launch event",
                "link": "https://presse.example/ds7",
                "description": "Great new SUV",
                "pubDate": "2024-01-05 09:30:00",
                "source_id": "presse_auto"
            },
            {
                "title": "Stellantis results",
                "link": "https://presse.example/results",
                "description": null,
                "content": "Record quarter",
                "pubDate": "2024-01-04 08:00:00",
                "source_id": "presse_eco"
            }
        ]
    });

    Mock::given(method("GET"))
        .and(query_param("apikey", "test-key"))
        .and(query_param("q", "DS Automobiles"))
        .and(query_param("language", "fr"))
        .and(query_param("country", "fr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = NewsdataClient::with_base_url("test-key", 30, "veille-test/0.1", &server.uri())
        .expect("client construction should not fail");
    let records = client
        .latest_news("DS Automobiles", Some("fr"), Some("fr"), None)
        .await
        .expect("should parse results");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title(), Some("DS7 launch event"));
    assert_eq!(records[0].link(), Some("https://presse.example/ds7"));
    assert_eq!(records[0].source(), Some("presse_auto"));
    assert_eq!(records[0].pub_date.as_deref(), Some("2024-01-05 09:30:00"));
    // Second record has no description; body falls back to content.
    assert_eq!(records[1].body(), Some("Record quarter"));
}

#[tokio::test]
async fn newsdata_provider_error_status_is_an_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "error",
        "results": { "message": "apikey invalid" }
    });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = NewsdataClient::with_base_url("bad-key", 30, "veille-test/0.1", &server.uri())
        .expect("client construction should not fail");
    let err = client
        .latest_news("DS", None, None, None)
        .await
        .expect_err("provider error should surface");

    assert!(matches!(err, SourceError::Api(_)), "got: {err:?}");
}

#[tokio::test]
async fn newsdata_http_500_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = NewsdataClient::with_base_url("test-key", 30, "veille-test/0.1", &server.uri())
        .expect("client construction should not fail");
    let err = client
        .latest_news("DS", None, None, None)
        .await
        .expect_err("500 should surface");

    assert!(matches!(err, SourceError::Http(_)), "got: {err:?}");
}

#[tokio::test]
async fn newsdata_malformed_body_is_a_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let client = NewsdataClient::with_base_url("test-key", 30, "veille-test/0.1", &server.uri())
        .expect("client construction should not fail");
    let err = client
        .latest_news("DS", None, None, None)
        .await
        .expect_err("malformed body should surface");

    assert!(matches!(err, SourceError::Deserialize { .. }), "got: {err:?}");
}

#[tokio::test]
async fn newsapi_parses_articles_and_nested_source() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "ok",
        "totalResults": 1,
        "articles": [
            {
                "source": { "id": null, "name": "Autocar" },
                "title": "DS9 review",
                "description": "A refined saloon",
                "url": "https://news.example/ds9",
                "publishedAt": "2024-02-10T08:15:00Z"
            }
        ]
    });

    Mock::given(method("GET"))
        .and(query_param("q", "DS brand"))
        .and(query_param("sortBy", "publishedAt"))
        .and(query_param("pageSize", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = NewsApiClient::with_base_url("test-key", 30, "veille-test/0.1", &server.uri())
        .expect("client construction should not fail");
    let records = client
        .everything("DS brand", None, "publishedAt", 50)
        .await
        .expect("should parse articles");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title(), Some("DS9 review"));
    assert_eq!(records[0].link(), Some("https://news.example/ds9"));
    assert_eq!(records[0].source(), Some("Autocar"));
    assert_eq!(
        records[0].published_at.as_deref(),
        Some("2024-02-10T08:15:00Z")
    );
}

#[tokio::test]
async fn newsapi_error_status_is_an_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "error",
        "code": "rateLimited",
        "message": "too many requests"
    });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = NewsApiClient::with_base_url("test-key", 30, "veille-test/0.1", &server.uri())
        .expect("client construction should not fail");
    let err = client
        .everything("DS", None, "publishedAt", 50)
        .await
        .expect_err("provider error should surface");

    assert!(err.to_string().contains("too many requests"));
}

#[tokio::test]
async fn gnews_parses_articles() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "totalArticles": 1,
        "articles": [
            {
                "title": "DS4 essai",
                "description": "Compacte premium",
                "content": "La DS4 confirme...",
                "url": "https://news.example/ds4",
                "publishedAt": "2024-03-01T10:00:00Z",
                "source": { "name": "L'Argus", "url": "https://largus.example" }
            }
        ]
    });

    Mock::given(method("GET"))
        .and(query_param("q", "DS France"))
        .and(query_param("lang", "fr"))
        .and(query_param("max", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = GnewsClient::with_base_url("test-key", 30, "veille-test/0.1", &server.uri())
        .expect("client construction should not fail");
    let records = client
        .search("DS France", Some("fr"), None, 50)
        .await
        .expect("should parse articles");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title(), Some("DS4 essai"));
    assert_eq!(records[0].source(), Some("L'Argus"));
    assert_eq!(records[0].body(), Some("Compacte premium"));
}

const SAMPLE_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Actu auto</title>
    <item>
      <title>DS7 restyle en approche</title>
      <link>https://feed.example/ds7-restyle</link>
      <pubDate>Fri, 05 Jan 2024 09:30:00 GMT</pubDate>
      <description>&lt;p&gt;Le SUV &lt;b&gt;DS7&lt;/b&gt; évolue.&lt;/p&gt;</description>
    </item>
    <item>
      <title>Essai de la nouvelle citadine</title>
      <link>https://feed.example/citadine</link>
      <pubDate>Thu, 04 Jan 2024 08:00:00 GMT</pubDate>
      <description>Rien à voir avec la marque.</description>
    </item>
  </channel>
</rss>"#;

#[tokio::test]
async fn feed_entries_map_to_raw_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rss.xml"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(SAMPLE_FEED, "application/rss+xml"),
        )
        .mount(&server)
        .await;

    let feed = FeedConfig {
        url: format!("{}/rss.xml", server.uri()),
        language: "fr".to_string(),
        title_filter: None,
    };
    let client = reqwest::Client::new();
    let records = fetch_feed(&client, &feed).await.expect("should parse feed");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title(), Some("DS7 restyle en approche"));
    assert_eq!(records[0].link(), Some("https://feed.example/ds7-restyle"));
    assert!(records[0].published.is_some(), "pubDate should be parsed");
    // HTML in the description is stripped.
    assert_eq!(records[0].body(), Some("Le SUV DS7 évolue."));
    assert_eq!(records[0].source(), Some(feed.url.as_str()));
}

#[tokio::test]
async fn feed_title_filter_is_case_insensitive() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rss.xml"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(SAMPLE_FEED, "application/rss+xml"),
        )
        .mount(&server)
        .await;

    let feed = FeedConfig {
        url: format!("{}/rss.xml", server.uri()),
        language: "fr".to_string(),
        title_filter: Some("ds7".to_string()),
    };
    let client = reqwest::Client::new();
    let records = fetch_feed(&client, &feed).await.expect("should parse feed");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title(), Some("DS7 restyle en approche"));
}

#[tokio::test]
async fn feed_garbage_body_is_a_feed_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ not a feed }"))
        .mount(&server)
        .await;

    let feed = FeedConfig {
        url: server.uri(),
        language: "fr".to_string(),
        title_filter: None,
    };
    let client = reqwest::Client::new();
    let err = fetch_feed(&client, &feed)
        .await
        .expect_err("garbage body should surface");

    assert!(matches!(err, SourceError::Feed(_)), "got: {err:?}");
}
