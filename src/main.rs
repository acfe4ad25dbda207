mod app;
mod config;
mod detect;
mod domain;
mod infrastructure;
mod notify;
mod search;
mod state;

use anyhow::Result;
use infrastructure::{directories, logging};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_config()?;
    let paths = directories::ensure_directories(&config.directories)?;
    let _log_guard = logging::init_tracing(&config, &paths)?;

    let app = app::MonitorApp::initialize(config, paths)?;
    app.run().await
}
