use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-level configuration, resolved from the environment at startup.
///
/// All three aggregator keys are optional: a missing key disables the
/// corresponding adapter rather than failing startup.
#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub watch_path: PathBuf,
    pub newsdata_api_key: Option<String>,
    pub newsapi_api_key: Option<String>,
    pub gnews_api_key: Option<String>,
    pub http_timeout_secs: u64,
    pub user_agent: String,
    pub result_limit: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("watch_path", &self.watch_path)
            .field(
                "newsdata_api_key",
                &self.newsdata_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "newsapi_api_key",
                &self.newsapi_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "gnews_api_key",
                &self.gnews_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("result_limit", &self.result_limit)
            .finish()
    }
}

impl AppConfig {
    /// True when at least one aggregator key is present.
    ///
    /// With no keys at all only the RSS feeds run, which commonly yields an
    /// empty result set.
    #[must_use]
    pub fn any_api_key(&self) -> bool {
        self.newsdata_api_key.is_some()
            || self.newsapi_api_key.is_some()
            || self.gnews_api_key.is_some()
    }
}
