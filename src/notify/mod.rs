pub mod message;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::NotifyConfig;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("notify endpoint returned {0}")]
    Status(StatusCode),
}

pub struct LineNotifier {
    client: Client,
    config: NotifyConfig,
}

impl LineNotifier {
    pub fn new(client: Client, config: NotifyConfig) -> Self {
        Self { client, config }
    }

    /// Delivers `message` through LINE Notify, reporting success as a plain
    /// bool. Without a configured token delivery is skipped entirely; either
    /// way a failure never stops the rest of the run.
    pub async fn send(&self, message: &str) -> bool {
        let Some(token) = self.config.token.as_deref() else {
            warn!(target: "notify", "LINE_NOTIFY_TOKEN is not configured; skipping delivery");
            return false;
        };

        match self.deliver(token, message).await {
            Ok(()) => {
                info!(target: "notify", "notification delivered");
                true
            }
            Err(err) => {
                warn!(target: "notify", error = %err, "failed to deliver notification");
                false
            }
        }
    }

    async fn deliver(&self, token: &str, message: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(token)
            .form(&[("message", message)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status(status));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_token_skips_delivery() {
        let notifier = LineNotifier::new(
            Client::new(),
            NotifyConfig {
                token: None,
                // Unroutable on purpose; no request may be attempted.
                api_url: "http://127.0.0.1:1/api/notify".to_string(),
            },
        );
        assert!(!notifier.send("hello").await);
    }
}
