use anyhow::{Context, Result};
use chrono::Utc;
use chrono_tz::Tz;
use reqwest::Client;
use tracing::{info, warn};

use crate::{
    config::AppConfig,
    detect,
    domain::{IdSet, KeywordSnapshot},
    infrastructure::directories::ResolvedPaths,
    notify::{message, LineNotifier},
    search::SearchClient,
    state::SnapshotStore,
};

pub struct MonitorApp {
    config: AppConfig,
    search: SearchClient,
    notifier: LineNotifier,
    store: SnapshotStore,
}

impl MonitorApp {
    pub fn initialize(config: AppConfig, paths: ResolvedPaths) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(&config.search.user_agent)
            .build()
            .context("failed to build http client")?;

        let search = SearchClient::new(http_client.clone(), config.search.clone());
        let notifier = LineNotifier::new(http_client, config.notify.clone());
        let store = SnapshotStore::new(paths.snapshot_path);

        Ok(Self {
            config,
            search,
            notifier,
            store,
        })
    }

    /// One full monitoring cycle: load the previous snapshot, process each
    /// keyword in order, then persist the rebuilt snapshot. A keyword whose
    /// fetch or notification fails is logged and survived; only failing to
    /// write the new snapshot aborts the run.
    pub async fn run(self) -> Result<()> {
        info!(keywords = self.config.keywords.len(), "monitor run started");

        let previous = self.store.load();
        let mut next = KeywordSnapshot::new();

        for keyword in &self.config.keywords {
            self.process_keyword(keyword, &previous, &mut next).await;
        }

        self.store
            .save(&next)
            .context("failed to persist snapshot; next run would re-notify everything")?;

        info!("monitor run finished");
        Ok(())
    }

    async fn process_keyword(
        &self,
        keyword: &str,
        previous: &KeywordSnapshot,
        next: &mut KeywordSnapshot,
    ) {
        info!(keyword, "checking keyword");

        let posts = match self.search.fetch(keyword).await {
            Ok(posts) => posts,
            Err(err) => {
                warn!(target: "search", error = %err, keyword, "fetch failed");
                Vec::new()
            }
        };

        // No posts means no snapshot entry either: the keyword drops out of
        // the new snapshot, so a transient outage loses its dedup history.
        if posts.is_empty() {
            info!(keyword, "fetch yielded no posts");
            return;
        }

        let empty = IdSet::new();
        let previous_ids = previous.get(keyword).unwrap_or(&empty);
        let new_posts = detect::detect_new(&posts, previous_ids);

        info!(
            keyword,
            fetched = posts.len(),
            new = new_posts.len(),
            "compared against previous run"
        );

        if new_posts.is_empty() {
            info!(keyword, "nothing new");
        } else {
            let tz: Tz = self.config.timezone.parse().unwrap_or(chrono_tz::Asia::Tokyo);
            let now = Utc::now().with_timezone(&tz);
            let body = message::format_notification(keyword, &new_posts, now);
            if !self.notifier.send(&body).await {
                warn!(keyword, "notification was not delivered");
            }
        }

        next.insert(keyword.to_string(), detect::id_set(&posts));
    }
}
