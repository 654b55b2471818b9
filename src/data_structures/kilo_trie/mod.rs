// Copyright (c) 2025 Kilo Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Kilo Trie for substring search.
//!
//! A radix-compressed prefix trie that indexes every suffix of every key, so
//! that any contiguous substring of a key can be looked up in time
//! proportional to the substring rather than to the size of the corpus.
//!
//! Values are signed `i64` identifiers, typically indices into the caller's
//! own collection (rows, documents, file names). Negative values such as a
//! `-1` sentinel are stored like any other.
//!
//! # Features
//!
//! - Radix compression with node splitting on partial-prefix divergence.
//! - Children kept sorted by first character and found by binary search.
//! - Comparisons by whole code point; labels never split a UTF-8 sequence.
//! - Lookups append into a caller-supplied buffer so allocations can be reused.
//! - Reads through `&self`, writes through `&mut self`: concurrent lookups on a
//!   shared trie are safe, and the borrow checker keeps writers exclusive.
//!
//! # Example
//!
//! ```
//! use kilo_index::data_structures::kilo_trie::KiloTrie;
//!
//! let mut trie = KiloTrie::new();
//! trie.add("www.google.com", 0);
//! trie.add("www.foogle.net", 1);
//!
//! assert_eq!(trie.find(Vec::new(), "google.com"), vec![0]);
//! assert_eq!(trie.find(Vec::new(), "ogle"), vec![0, 1]);
//! assert_eq!(trie.find(Vec::new(), "fo"), vec![1]);
//! assert!(trie.find(Vec::new(), "yahoo").is_empty());
//! ```
//!
//! # Reusing result buffers
//!
//! ```
//! use kilo_index::data_structures::kilo_trie::KiloTrie;
//!
//! let mut trie = KiloTrie::new();
//! trie.add("alpha", 1);
//! trie.add("alphabet", 2);
//!
//! let mut results = Vec::with_capacity(8);
//! for query in ["alp", "bet", "zeta"] {
//!     results.clear();
//!     trie.find_into(&mut results, query);
//! }
//! assert!(results.is_empty());
//! ```

mod error;
mod node;

#[cfg(test)]
mod tests;

pub use crate::config::trie::KiloTrieConfig;
pub use error::{KiloTrieError, KiloTrieResult};
use node::TrieNode;

/// Substring index over string keys.
///
/// Every key added is indexed at every character offset. A lookup for `q`
/// returns the value of every indexed suffix that starts with `q`, so a value
/// shows up once per occurrence of `q` in its key.
#[derive(Debug, Clone, Default)]
pub struct KiloTrie {
    /// The root node; its label is always empty.
    root: TrieNode,

    /// Number of keys added.
    keys: usize,

    /// Configuration options
    config: KiloTrieConfig,
}

impl KiloTrie {
    /// Creates a new empty `KiloTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(KiloTrieConfig::default())
    }

    /// Creates a new empty `KiloTrie` with the specified configuration.
    pub fn with_config(config: KiloTrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            keys: 0,
            config,
        }
    }

    /// Returns the configuration of this trie.
    pub fn config(&self) -> &KiloTrieConfig {
        &self.config
    }

    /// Indexes `key` under `value`.
    ///
    /// Every suffix of `key`, one per character offset, is inserted and tagged
    /// with `value`. Adding the same key or value again is allowed and records
    /// another occurrence. The empty key tags the root, so its value is only
    /// reachable through an empty query.
    ///
    /// This never fails and ignores `max_key_chars`; see [`KiloTrie::try_add`].
    pub fn add(&mut self, key: &str, value: i64) {
        tracing::trace!(key, value, "indexing key");
        if key.is_empty() {
            self.root.add(key, value);
        } else {
            for (offset, _) in key.char_indices() {
                self.root.add(&key[offset..], value);
            }
        }
        self.keys += 1;
    }

    /// Indexes `key` under `value` after checking it against the configured
    /// `max_key_chars`.
    ///
    /// # Errors
    ///
    /// Returns [`KiloTrieError::KeyTooLong`] without touching the trie when the
    /// key has more characters than allowed.
    pub fn try_add(&mut self, key: &str, value: i64) -> KiloTrieResult<()> {
        if let Some(max_chars) = self.config.max_key_chars {
            let chars = key.chars().count();
            if chars > max_chars {
                tracing::warn!(chars, max_chars, value, "rejecting oversized key");
                return Err(KiloTrieError::KeyTooLong { chars, max_chars });
            }
        }
        self.add(key, value);
        Ok(())
    }

    /// Indexes a key given as raw bytes, rejecting anything that is not UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`KiloTrieError::InvalidEncoding`] for malformed input and
    /// [`KiloTrieError::KeyTooLong`] as [`KiloTrie::try_add`] does. The trie is
    /// left unchanged on error.
    pub fn try_add_utf8(&mut self, key: &[u8], value: i64) -> KiloTrieResult<()> {
        let key = std::str::from_utf8(key).map_err(|e| {
            tracing::warn!(valid_up_to = e.valid_up_to(), value, "rejecting non UTF-8 key");
            KiloTrieError::from(e)
        })?;
        self.try_add(key, value)
    }

    /// Finds the values of every key containing `prefix` and appends them to
    /// `dst`, which is returned.
    ///
    /// When nothing matches, `dst` comes back untouched, allocation included.
    /// When it has enough spare capacity the matches are written in place.
    /// Values attached closer to the match come first and siblings are
    /// visited in ascending character order; the order is deterministic for
    /// a given insertion history but carries no meaning.
    pub fn find(&self, mut dst: Vec<i64>, prefix: &str) -> Vec<i64> {
        self.find_into(&mut dst, prefix);
        dst
    }

    /// Same lookup as [`KiloTrie::find`], appending through a mutable borrow.
    ///
    /// Returns the number of values appended.
    pub fn find_into(&self, dst: &mut Vec<i64>, prefix: &str) -> usize {
        let before = dst.len();
        self.root.find(dst, prefix);
        let found = dst.len() - before;
        tracing::trace!(prefix, found, "trie lookup");
        found
    }

    /// Finds matches into a fresh buffer sized by `result_capacity_hint`.
    pub fn find_values(&self, prefix: &str) -> Vec<i64> {
        let mut results = Vec::with_capacity(self.config.result_capacity_hint);
        self.find_into(&mut results, prefix);
        results
    }

    /// Returns `true` if any key contains `prefix`.
    pub fn contains(&self, prefix: &str) -> bool {
        self.root
            .locate(prefix)
            .is_some_and(TrieNode::has_values)
    }

    /// Number of keys added since creation or the last [`KiloTrie::clear`].
    pub fn len(&self) -> usize {
        self.keys
    }

    /// Returns `true` if no key has been added.
    pub fn is_empty(&self) -> bool {
        self.keys == 0
    }

    /// Number of nodes in the trie, root included.
    pub fn node_count(&self) -> usize {
        self.root.count_nodes()
    }

    /// Removes every key, leaving an empty, usable trie.
    pub fn clear(&mut self) {
        tracing::debug!(keys = self.keys, "clearing trie");
        self.root = TrieNode::new();
        self.keys = 0;
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &TrieNode {
        &self.root
    }
}
