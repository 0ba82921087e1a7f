use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::ConfigError;

/// One RSS/Atom feed to poll, with an optional case-insensitive title filter
/// applied to every entry before inclusion.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    pub url: String,
    pub language: String,
    #[serde(default)]
    pub title_filter: Option<String>,
}

/// Watch vocabularies: search queries, the model-tag vocabulary, the language
/// list with its country mapping, and the feed list.
///
/// `model_tags` are matched first-match in listed order — keep specific model
/// tokens ahead of the bare brand token, or the bare token will shadow them.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchFile {
    pub queries: Vec<String>,
    pub model_tags: Vec<String>,
    #[serde(default = "default_fallback_tag")]
    pub fallback_tag: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub countries: BTreeMap<String, String>,
    #[serde(default)]
    pub feeds: Vec<FeedConfig>,
}

fn default_fallback_tag() -> String {
    "unspecified".to_string()
}

impl WatchFile {
    /// Country code configured for a language, if any.
    #[must_use]
    pub fn country_for(&self, language: &str) -> Option<&str> {
        self.countries.get(language).map(String::as_str)
    }
}

/// Load and validate the watch configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_watch(path: &Path) -> Result<WatchFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::WatchFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let watch: WatchFile = serde_yaml::from_str(&content).map_err(ConfigError::WatchFileParse)?;

    validate_watch(&watch)?;

    Ok(watch)
}

fn validate_watch(watch: &WatchFile) -> Result<(), ConfigError> {
    if watch.queries.is_empty() {
        return Err(ConfigError::Validation(
            "at least one query is required".to_string(),
        ));
    }
    if watch.queries.iter().any(|q| q.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "queries must be non-empty".to_string(),
        ));
    }

    if watch.model_tags.is_empty() {
        return Err(ConfigError::Validation(
            "at least one model tag is required".to_string(),
        ));
    }
    let mut seen_tags = HashSet::new();
    for tag in &watch.model_tags {
        if tag.trim().is_empty() {
            return Err(ConfigError::Validation(
                "model tags must be non-empty".to_string(),
            ));
        }
        if !seen_tags.insert(tag.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate model tag: '{tag}'"
            )));
        }
    }

    if watch.fallback_tag.trim().is_empty() {
        return Err(ConfigError::Validation(
            "fallback tag must be non-empty".to_string(),
        ));
    }

    if watch.languages.iter().any(|l| l.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "languages must be non-empty".to_string(),
        ));
    }

    for feed in &watch.feeds {
        if !feed.url.starts_with("http://") && !feed.url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "feed URL must be http(s): '{}'",
                feed.url
            )));
        }
        if feed.language.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "feed '{}' has an empty language",
                feed.url
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_watch() -> WatchFile {
        WatchFile {
            queries: vec!["DS Automobiles".to_string()],
            model_tags: vec!["DS7".to_string(), "DS".to_string()],
            fallback_tag: "unspecified".to_string(),
            languages: vec!["fr".to_string(), "en".to_string()],
            countries: BTreeMap::from([
                ("fr".to_string(), "fr".to_string()),
                ("en".to_string(), "us".to_string()),
            ]),
            feeds: vec![FeedConfig {
                url: "https://example.com/rss.xml".to_string(),
                language: "fr".to_string(),
                title_filter: None,
            }],
        }
    }

    #[test]
    fn validate_accepts_minimal_watch() {
        assert!(validate_watch(&minimal_watch()).is_ok());
    }

    #[test]
    fn validate_rejects_empty_queries() {
        let mut watch = minimal_watch();
        watch.queries.clear();
        let err = validate_watch(&watch).unwrap_err();
        assert!(err.to_string().contains("at least one query"));
    }

    #[test]
    fn validate_rejects_blank_query() {
        let mut watch = minimal_watch();
        watch.queries.push("   ".to_string());
        let err = validate_watch(&watch).unwrap_err();
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn validate_rejects_duplicate_model_tag_case_insensitive() {
        let mut watch = minimal_watch();
        watch.model_tags.push("ds7".to_string());
        let err = validate_watch(&watch).unwrap_err();
        assert!(err.to_string().contains("duplicate model tag"));
    }

    #[test]
    fn validate_rejects_non_http_feed_url() {
        let mut watch = minimal_watch();
        watch.feeds.push(FeedConfig {
            url: "ftp://example.com/feed".to_string(),
            language: "fr".to_string(),
            title_filter: None,
        });
        let err = validate_watch(&watch).unwrap_err();
        assert!(err.to_string().contains("http(s)"));
    }

    #[test]
    fn country_for_returns_mapped_code() {
        let watch = minimal_watch();
        assert_eq!(watch.country_for("en"), Some("us"));
        assert_eq!(watch.country_for("es"), None);
    }

    #[test]
    fn fallback_tag_defaults_when_omitted() {
        let yaml = r"
queries:
  - DS Automobiles
model_tags:
  - DS7
";
        let watch: WatchFile = serde_yaml::from_str(yaml).expect("should parse");
        assert_eq!(watch.fallback_tag, "unspecified");
        assert!(watch.feeds.is_empty());
        assert!(watch.languages.is_empty());
    }

    #[test]
    fn title_filter_parses_when_present() {
        let yaml = r#"
queries: ["DS"]
model_tags: ["DS7"]
feeds:
  - url: "https://example.com/rss"
    language: en
    title_filter: "DS"
"#;
        let watch: WatchFile = serde_yaml::from_str(yaml).expect("should parse");
        assert_eq!(watch.feeds[0].title_filter.as_deref(), Some("DS"));
    }
}
