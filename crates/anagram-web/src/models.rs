//! Request and response bodies

use anagram_core::AnagramGroup;
use serde::{Deserialize, Serialize};

/// `{"words": [...]}`. Entries may be `null`; they are treated as absent words.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordsRequest {
    #[serde(default)]
    pub words: Vec<Option<String>>,
}

/// `{"anagrams": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnagramsResponse {
    pub anagrams: Vec<String>,
}

impl From<AnagramGroup> for AnagramsResponse {
    fn from(group: AnagramGroup) -> Self {
        Self {
            anagrams: group.into_vec(),
        }
    }
}

impl From<Vec<String>> for AnagramsResponse {
    fn from(anagrams: Vec<String>) -> Self {
        Self { anagrams }
    }
}

/// `{"result": n}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultResponse {
    pub result: usize,
}

impl From<usize> for ResultResponse {
    fn from(result: usize) -> Self {
        Self { result }
    }
}

impl From<bool> for ResultResponse {
    fn from(value: bool) -> Self {
        Self {
            result: usize::from(value),
        }
    }
}
