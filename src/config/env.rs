use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub keywords: Vec<String>,
    pub search: SearchConfig,
    pub notify: NotifyConfig,
    pub directories: DirectoryConfig,
    pub logging: LoggingConfig,
    pub timezone: String,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub base_url: String,
    pub fetch_timeout: Duration,
    pub max_posts: usize,
    pub user_agent: String,
}

#[derive(Debug, Clone)]
pub struct NotifyConfig {
    pub token: Option<String>,
    pub api_url: String,
}

#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub logs_dir: String,
    pub data_dir: String,
    pub snapshot_filename: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),
}
