use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::{config::SearchConfig, domain::Post};

// Result card markup on the realtime search page. The site owns this
// structure, so breakage here means the selectors need re-checking.
static CARD: Lazy<Selector> = Lazy::new(|| Selector::parse(".sw-Card").expect("valid selector"));
static TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".sw-Card__title").expect("valid selector"));
static AUTHOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".sw-Card__author").expect("valid selector"));
static TIME: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".sw-Card__time").expect("valid selector"));
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").expect("valid selector"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid search url: {0}")]
    Url(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("search endpoint returned {0}")]
    Status(StatusCode),
}

pub struct SearchClient {
    client: Client,
    config: SearchConfig,
}

impl SearchClient {
    pub fn new(client: Client, config: SearchConfig) -> Self {
        Self { client, config }
    }

    /// Fetches the results page for `keyword` and extracts up to
    /// `max_posts` entries in document order. Any transport or status failure
    /// is returned to the caller, which treats it as an empty result.
    pub async fn fetch(&self, keyword: &str) -> Result<Vec<Post>, FetchError> {
        let mut url = Url::parse(&self.config.base_url)?;
        url.query_pairs_mut().append_pair("p", keyword);

        let response = self
            .client
            .get(url)
            .timeout(self.config.fetch_timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        Ok(extract_posts(&body, self.config.max_posts))
    }
}

fn extract_posts(body: &str, limit: usize) -> Vec<Post> {
    let document = Html::parse_document(body);
    document
        .select(&CARD)
        .take(limit)
        .filter_map(|card| {
            let post = extract_post(card);
            if post.is_none() {
                debug!(target: "search", "skipping result card without text");
            }
            post
        })
        .collect()
}

/// Pulls the display fields out of one result card. Cards without any title
/// text carry nothing worth notifying about and are dropped.
fn extract_post(card: ElementRef<'_>) -> Option<Post> {
    let text = select_text(card, &TITLE)?;
    let author = select_text(card, &AUTHOR).unwrap_or_default();
    let posted_at = select_text(card, &TIME).unwrap_or_default();
    let link = card
        .select(&LINK)
        .next()
        .and_then(|a| a.value().attr("href"))
        .unwrap_or_default()
        .to_string();

    Some(Post {
        text,
        author,
        posted_at,
        link,
    })
}

fn select_text(card: ElementRef<'_>, selector: &Selector) -> Option<String> {
    let element = card.select(selector).next()?;
    let text = element.text().collect::<String>().trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
