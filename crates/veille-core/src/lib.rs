use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod watch;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use watch::{load_watch, FeedConfig, WatchFile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read watch file at {path}")]
    WatchFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse watch file: {0}")]
    WatchFileParse(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}
