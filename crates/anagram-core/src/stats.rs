//! Aggregate statistics over a store snapshot
//!
//! Every function is pure given its [`Snapshot`]. Lengths are key lengths,
//! which equal the lengths of the words mapping to each key. An empty snapshot
//! yields zero for every numeric statistic.

use crate::store::{AnagramGroup, Snapshot};
use serde::{Deserialize, Serialize};

/// Total number of words, singletons included
pub fn count(snapshot: &Snapshot) -> usize {
    snapshot.groups().map(AnagramGroup::len).sum()
}

pub fn max_key_length(snapshot: &Snapshot) -> usize {
    key_lengths(snapshot).max().unwrap_or(0)
}

pub fn min_key_length(snapshot: &Snapshot) -> usize {
    key_lengths(snapshot).min().unwrap_or(0)
}

/// Mean key length rounded half up
pub fn average_key_length(snapshot: &Snapshot) -> usize {
    let n = snapshot.len();
    if n == 0 {
        return 0;
    }
    let sum: usize = key_lengths(snapshot).sum();
    (2 * sum + n) / (2 * n)
}

/// Lower-middle-index length: the sorted key lengths at index `n / 2`.
///
/// For an even number of keys this is the upper of the two middle values and
/// no averaging takes place. Clients depend on this exact formula.
pub fn median_key_length(snapshot: &Snapshot) -> usize {
    let mut lengths: Vec<usize> = key_lengths(snapshot).collect();
    if lengths.is_empty() {
        return 0;
    }
    lengths.sort_unstable();
    lengths[lengths.len() / 2]
}

/// The group with the most members, among groups that have anagrams.
///
/// Which group wins a tie is unspecified.
pub fn largest_group(snapshot: &Snapshot) -> Option<&AnagramGroup> {
    snapshot
        .groups()
        .filter(|group| group.has_anagrams())
        .max_by_key(|group| group.len())
}

fn key_lengths(snapshot: &Snapshot) -> impl Iterator<Item = usize> + '_ {
    snapshot.keys().map(|key| key.len())
}

/// All numeric statistics computed from one snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub groups: usize,
    pub anagram_groups: usize,
    pub max: usize,
    pub min: usize,
    pub avg: usize,
    pub median: usize,
    pub largest_group_size: usize,
}

impl Summary {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            count: count(snapshot),
            groups: snapshot.len(),
            anagram_groups: snapshot.groups().filter(|g| g.has_anagrams()).count(),
            max: max_key_length(snapshot),
            min: min_key_length(snapshot),
            avg: average_key_length(snapshot),
            median: median_key_length(snapshot),
            largest_group_size: largest_group(snapshot).map_or(0, AnagramGroup::len),
        }
    }
}
