//! Query service
//!
//! The operations the HTTP layer exposes, composed from the store, the key
//! function and the statistics engine. Optional parameters are explicit
//! `Option`s; absence of a result is an empty `Option`, never an error.

use crate::key::{canonical_key, CanonicalKey};
use crate::stats::{self, Summary};
use crate::store::{AnagramGroup, AnagramStore};
use std::sync::Arc;
use tracing::debug;

/// Options for [`QueryService::lookup_by_word`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupOptions {
    /// Keep at most this many words, applied after exclusion
    pub limit: Option<usize>,
    /// Drop the queried word itself from the result
    pub exclude_self: bool,
}

impl LookupOptions {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn excluding_self(mut self) -> Self {
        self.exclude_self = true;
        self
    }
}

#[derive(Clone)]
pub struct QueryService {
    store: Arc<AnagramStore>,
}

impl QueryService {
    pub fn new(store: Arc<AnagramStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<AnagramStore> {
        &self.store
    }

    /// Groups that have anagrams.
    ///
    /// Without `min_size` every group of two or more words is listed. An
    /// explicit `min_size` of 2 or more is honoured literally; 0 and 1 still
    /// list only groups of two or more, since singletons never count.
    pub fn list_groups(&self, min_size: Option<usize>) -> Vec<AnagramGroup> {
        let threshold = min_size.unwrap_or(2).max(2);
        self.store
            .snapshot()
            .into_groups()
            .filter(|group| group.len() >= threshold)
            .collect()
    }

    /// Anagrams of `word`, or `None` unless its group has two or more words
    pub fn lookup_by_word(&self, word: &str, options: LookupOptions) -> Option<Vec<String>> {
        let group = self.store.lookup_group(word)?;
        if !group.has_anagrams() {
            return None;
        }

        let words = group
            .into_iter()
            .filter(|candidate| !(options.exclude_self && candidate == word))
            .take(options.limit.unwrap_or(usize::MAX))
            .collect();
        Some(words)
    }

    pub fn add_words<I, S>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.store.add_words(words)
    }

    pub fn delete_word(&self, word: &str) -> bool {
        self.store.delete_word(word)
    }

    pub fn delete_all_words(&self) {
        self.store.delete_all_words()
    }

    pub fn delete_group_by_word(&self, word: &str) -> bool {
        self.store.delete_group_by_word(word)
    }

    pub fn count(&self) -> usize {
        stats::count(&self.store.snapshot())
    }

    pub fn max_key_length(&self) -> usize {
        stats::max_key_length(&self.store.snapshot())
    }

    pub fn min_key_length(&self) -> usize {
        stats::min_key_length(&self.store.snapshot())
    }

    pub fn average_key_length(&self) -> usize {
        stats::average_key_length(&self.store.snapshot())
    }

    pub fn median_key_length(&self) -> usize {
        stats::median_key_length(&self.store.snapshot())
    }

    pub fn largest_group(&self) -> Option<AnagramGroup> {
        stats::largest_group(&self.store.snapshot()).cloned()
    }

    pub fn summary(&self) -> Summary {
        Summary::from_snapshot(&self.store.snapshot())
    }

    /// Whether all `words` are known anagrams of each other.
    ///
    /// True only if at least one word is given, none is absent, all share one
    /// key, that key's group has two or more words, and every given word is in
    /// that group.
    pub fn membership_check<S: AsRef<str>>(&self, words: &[Option<S>]) -> bool {
        let Some(first) = words.first() else {
            return false;
        };
        let Some(key) = key_of(first) else {
            return false;
        };
        let same_key = words.iter().all(|word| key_of(word).as_ref() == Some(&key));
        if !same_key {
            debug!(%key, "membership check: words do not share one key");
            return false;
        }

        let Some(group) = self.store.lookup_group(key.as_str()) else {
            return false;
        };
        group.has_anagrams()
            && words
                .iter()
                .flatten()
                .all(|word| group.contains(word.as_ref()))
    }
}

fn key_of<S: AsRef<str>>(word: &Option<S>) -> Option<CanonicalKey> {
    canonical_key(word.as_ref().map(|w| w.as_ref()))
}
