// postboard: browse posts from a JSON API with a persisted local cache.
// Wires configuration, logging, storage, and the store context into the TUI.

mod api;
mod app;
mod config;
mod error;
mod logging;
mod state;
mod storage;
mod store;
#[cfg(test)]
mod testing;
mod ui;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use crate::api::PostsClient;
use crate::app::App;
use crate::config::{Cli, Config};
use crate::error::Result;
use crate::store::{PostStore, StoreContext};

/// How long to wait on in-flight fetches after the surface closes.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from(Cli::parse());
    logging::initialize(config.log_level.into(), config.log_file.clone());

    let storage = storage::open_storage(config.storage, config.data_dir.clone())?;
    let client = PostsClient::new(&config.base_url)?;
    log::info!("Starting postboard against {}", client.base_url());
    let store = PostStore::new(Arc::new(client), storage, config.invalidate_mode);
    let mut ctx = StoreContext::new(store);

    let mut terminal = ratatui::init();
    let mut app = App::new(config.refresh);
    let result = app.run(&mut terminal, &mut ctx);
    ratatui::restore();

    // The store outlives the surface; let pending fetches land and persist.
    ctx.settle(SHUTDOWN_GRACE).await;
    if ctx.in_flight() > 0 {
        log::warn!("Exiting with {} fetches still in flight", ctx.in_flight());
    }
    log::info!("Exiting");

    result.map_err(Into::into)
}
