pub mod config;
pub mod group;
pub mod serve;
pub mod stats;

use anagram_config::AppConfig;
use anagram_core::{seed_store, AnagramStore, SeedOutcome};
use anyhow::{bail, Result};
use std::sync::Arc;

/// Store seeded from the configured dictionary. Seeding failures are logged
/// and leave the store empty.
pub fn seeded_store(config: &AppConfig) -> (Arc<AnagramStore>, SeedOutcome) {
    let store = Arc::new(AnagramStore::new());
    let outcome = seed_store(&store, config.dictionary.path.as_deref());
    (store, outcome)
}

/// Offline commands have nothing to report without a dictionary
fn require_dictionary(outcome: &SeedOutcome) -> Result<()> {
    match outcome {
        SeedOutcome::Loaded { .. } => Ok(()),
        SeedOutcome::Skipped => bail!("No dictionary configured; pass --dictionary <FILE>"),
        SeedOutcome::Failed(reason) => bail!("Dictionary could not be loaded: {reason}"),
    }
}
