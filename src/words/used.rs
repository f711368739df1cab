//! Match-wide record of accepted words.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Every word accepted so far in the match, lowercased.
///
/// Append-only: words are never removed. Keeps insertion order for the
/// end-of-match summary alongside a hash set for membership checks.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UsedWords {
    lookup: FxHashSet<String>,
    order: Vector<String>,
}

impl UsedWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive membership check.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(&word.to_lowercase())
    }

    /// Record a word. Returns `false` if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.to_lowercase();
        if self.lookup.insert(word.clone()) {
            self.order.push_back(word);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Words in the order they were accepted.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// The first `n` accepted words.
    #[must_use]
    pub fn first(&self, n: usize) -> Vec<String> {
        self.order.iter().take(n).cloned().collect()
    }
}
