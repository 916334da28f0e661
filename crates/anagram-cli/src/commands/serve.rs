use anagram_config::AppConfig;
use anagram_web::{start_server, AppState};
use anyhow::Result;

use super::seeded_store;

pub async fn execute(config: AppConfig) -> Result<()> {
    tracing::info!("Starting anagram service v{}", env!("CARGO_PKG_VERSION"));

    // A missing dictionary is not fatal; the server starts with an empty store.
    let (store, _) = seeded_store(&config);
    start_server(&config.server, AppState::new(store)).await?;
    Ok(())
}
