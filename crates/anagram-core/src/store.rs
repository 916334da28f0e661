//! Concurrent anagram store
//!
//! Maps each [`CanonicalKey`] to the [`AnagramGroup`] of known words sharing it.
//!
//! # Consistency
//!
//! Operations on a single key (lookup, insert into a group, remove from a group,
//! remove a whole group) run under that key's shard lock and are atomic with
//! respect to each other. Cross-key reads such as [`AnagramStore::snapshot`]
//! copy the map shard by shard, so a snapshot taken while writers are active
//! may mix pre- and post-mutation state of different keys. Each key is still
//! observed in a state it actually had.
//!
//! [`AnagramStore::delete_all_words`] swaps the whole map for an empty one in a
//! single step. An operation either sees the old map or the new one.

use crate::key::CanonicalKey;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::btree_set;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tracing::{debug, trace};

type GroupMap = DashMap<CanonicalKey, AnagramGroup>;

/// Distinct words sharing one canonical key, iterated in lexicographic order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnagramGroup {
    words: BTreeSet<String>,
}

impl AnagramGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// A word is never its own anagram, so only groups of two or more count
    pub fn has_anagrams(&self) -> bool {
        self.words.len() > 1
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.words.iter()
    }

    /// Returns `true` if the word was not already present
    fn insert(&mut self, word: String) -> bool {
        self.words.insert(word)
    }

    fn remove(&mut self, word: &str) -> bool {
        self.words.remove(word)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.words.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for AnagramGroup {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for AnagramGroup {
    type Item = String;
    type IntoIter = btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl<'a> IntoIterator for &'a AnagramGroup {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Owned point-in-time copy of the store, consistent per key
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    groups: HashMap<CanonicalKey, AnagramGroup>,
}

impl Snapshot {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, key: &CanonicalKey) -> Option<&AnagramGroup> {
        self.groups.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalKey, &AnagramGroup)> {
        self.groups.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &CanonicalKey> {
        self.groups.keys()
    }

    pub fn groups(&self) -> impl Iterator<Item = &AnagramGroup> {
        self.groups.values()
    }

    pub fn into_groups(self) -> impl Iterator<Item = AnagramGroup> {
        self.groups.into_values()
    }
}

impl FromIterator<(CanonicalKey, AnagramGroup)> for Snapshot {
    fn from_iter<T: IntoIterator<Item = (CanonicalKey, AnagramGroup)>>(iter: T) -> Self {
        Self {
            groups: iter.into_iter().collect(),
        }
    }
}

/// The process-wide dictionary of words grouped by canonical key.
///
/// Construct one per process (or per test) and share it behind an `Arc`.
pub struct AnagramStore {
    // The lock only guards the pointer; it is never held across a map operation.
    groups: RwLock<Arc<GroupMap>>,
}

impl AnagramStore {
    pub fn new() -> Self {
        Self {
            groups: RwLock::new(Arc::new(GroupMap::new())),
        }
    }

    /// Create a store seeded with `words`
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::new();
        store.add_words(words);
        store
    }

    fn current(&self) -> Arc<GroupMap> {
        Arc::clone(&self.groups.read())
    }

    /// Add every word to the group of its key, creating groups as needed.
    ///
    /// Duplicates are no-ops. Returns how many words were new.
    pub fn add_words<I, S>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let map = self.current();
        let mut added = 0;
        for word in words {
            let word = word.into();
            let key = CanonicalKey::of(&word);
            trace!(%key, word = %word, "adding word");
            if map.entry(key).or_default().insert(word) {
                added += 1;
            }
        }
        debug!(added, "words added to store");
        added
    }

    /// Copy of the group for `word`'s key, if one exists
    pub fn lookup_group(&self, word: &str) -> Option<AnagramGroup> {
        let key = CanonicalKey::of(word);
        self.current().get(&key).map(|group| group.clone())
    }

    pub fn contains(&self, word: &str) -> bool {
        let key = CanonicalKey::of(word);
        self.current()
            .get(&key)
            .is_some_and(|group| group.contains(word))
    }

    /// Remove a single word. Returns whether it was present.
    ///
    /// A group emptied by the removal is purged under the same entry lock.
    pub fn delete_word(&self, word: &str) -> bool {
        let map = self.current();
        let removed = match map.entry(CanonicalKey::of(word)) {
            Entry::Occupied(mut entry) => {
                let removed = entry.get_mut().remove(word);
                if entry.get().is_empty() {
                    trace!(key = %entry.key(), "purging empty group");
                    entry.remove();
                }
                removed
            }
            Entry::Vacant(_) => false,
        };
        if removed {
            debug!(word, "word deleted");
        }
        removed
    }

    /// Replace the whole store with an empty one
    pub fn delete_all_words(&self) {
        *self.groups.write() = Arc::new(GroupMap::new());
        debug!("store cleared");
    }

    /// Remove the whole group of `word`'s key, but only if it holds real
    /// anagrams (two or more words). Returns whether a group was removed.
    pub fn delete_group_by_word(&self, word: &str) -> bool {
        let key = CanonicalKey::of(word);
        let removed = self
            .current()
            .remove_if(&key, |_, group| group.has_anagrams())
            .is_some();
        if removed {
            debug!(%key, "anagram group deleted");
        }
        removed
    }

    pub fn snapshot(&self) -> Snapshot {
        self.current()
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Number of distinct keys currently stored
    pub fn len_groups(&self) -> usize {
        self.current().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current().is_empty()
    }
}

impl Default for AnagramStore {
    fn default() -> Self {
        Self::new()
    }
}
