//! Canonical keys for anagram equivalence
//!
//! Two words are anagrams of each other exactly when they share a key. The key
//! is the word's characters sorted by code point, so it is a literal signature:
//! no case folding and no locale-aware normalization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The sorted-code-point signature shared by all anagrams of a word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Compute the key for `word`.
    ///
    /// # Examples
    ///
    /// ```
    /// use anagram_core::CanonicalKey;
    ///
    /// assert_eq!(CanonicalKey::of("edcba"), CanonicalKey::of("abcde"));
    /// assert_eq!(CanonicalKey::of("listen").as_str(), "eilnst");
    /// ```
    pub fn of(word: &str) -> Self {
        let mut chars: Vec<char> = word.chars().collect();
        chars.sort_unstable();
        Self(chars.into_iter().collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, equal to the length of every word with this key
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Key for a possibly absent word. Absence propagates.
pub fn canonical_key(word: Option<&str>) -> Option<CanonicalKey> {
    word.map(CanonicalKey::of)
}
