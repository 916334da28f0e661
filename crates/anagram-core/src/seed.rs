//! Seeding a store from a newline-delimited word list
//!
//! A missing or unreadable word list never stops the service; it starts with
//! an empty store and logs a warning instead.

use crate::error::{CoreError, CoreResult};
use crate::store::AnagramStore;
use std::path::Path;
use tracing::{info, warn};

/// Read one word per line. Blank lines are skipped and a trailing `\r` is
/// dropped; other whitespace is part of the word.
pub fn load_word_list(path: &Path) -> CoreResult<Vec<String>> {
    let bytes = std::fs::read(path).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|e| CoreError::InvalidWordList {
        path: path.to_path_buf(),
        reason: format!("not valid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
    })?;

    Ok(text
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// What happened when seeding at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// No word list configured
    Skipped,
    /// Word list read; `added` of its `read` lines were new words
    Loaded { read: usize, added: usize },
    /// Word list could not be used; the store was left untouched
    Failed(String),
}

/// Seed `store` from `path` if one is given. Failures are logged, not returned.
pub fn seed_store(store: &AnagramStore, path: Option<&Path>) -> SeedOutcome {
    let Some(path) = path else {
        info!("No dictionary configured, starting with an empty store");
        return SeedOutcome::Skipped;
    };

    match load_word_list(path) {
        Ok(words) => {
            let read = words.len();
            let added = store.add_words(words);
            info!(
                path = %path.display(),
                read,
                added,
                groups = store.len_groups(),
                "Dictionary loaded"
            );
            SeedOutcome::Loaded { read, added }
        }
        Err(e) => {
            warn!("{e}; starting with an empty store");
            SeedOutcome::Failed(e.to_string())
        }
    }
}
