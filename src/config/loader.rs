use std::env;

use super::env::{
    AppConfig, ConfigError, DirectoryConfig, LoggingConfig, NotifyConfig, SearchConfig,
};

const DEFAULT_SEARCH_URL: &str = "https://search.yahoo.co.jp/realtime/search";
const DEFAULT_NOTIFY_URL: &str = "https://notify-api.line.me/api/notify";
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_env()
}

impl AppConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let keywords = env::var("SEARCH_KEYWORDS")
            .ok()
            .map(parse_keywords)
            .unwrap_or_default();
        if keywords.is_empty() {
            return Err(ConfigError::Missing("SEARCH_KEYWORDS"));
        }

        let search = SearchConfig {
            base_url: env::var("SEARCH_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_SEARCH_URL.to_string()),
            fetch_timeout: std::time::Duration::from_millis(
                env::var("FETCH_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(10_000),
            ),
            max_posts: env::var("MAX_POSTS_PER_KEYWORD")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(10),
            user_agent: env::var("HTTP_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
        };

        let notify = NotifyConfig {
            token: env::var("LINE_NOTIFY_TOKEN").ok().filter(|v| !v.is_empty()),
            api_url: env::var("NOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_NOTIFY_URL.to_string()),
        };

        let directories = DirectoryConfig {
            logs_dir: env::var("LOGS_DIR").unwrap_or_else(|_| "logs".to_string()),
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            snapshot_filename: env::var("SNAPSHOT_FILENAME")
                .unwrap_or_else(|_| "last_posts.json".to_string()),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        };

        let timezone = env::var("MONITOR_TIMEZONE").unwrap_or_else(|_| "Asia/Tokyo".to_string());

        Ok(Self {
            keywords,
            search,
            notify,
            directories,
            logging,
            timezone,
        })
    }
}

fn parse_keywords(value: String) -> Vec<String> {
    value
        .split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}
