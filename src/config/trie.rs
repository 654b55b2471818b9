//! Trie configuration module.
//!
//! This module defines the tunables of the Kilo Trie. None of them change
//! what a lookup returns; they bound indexing cost and size result buffers.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Largest accepted value for `result_capacity_hint`.
const MAX_RESULT_CAPACITY_HINT: usize = 1 << 20;

/// Configuration for the Kilo Trie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KiloTrieConfig {
    /// Longest key, in characters, accepted by the checked insertion paths.
    ///
    /// A key of n characters inserts n suffixes, so indexing work grows with
    /// the square of the key length. `None` disables the limit.
    pub max_key_chars: Option<usize>,

    /// Initial capacity of buffers allocated by `find_values`.
    pub result_capacity_hint: usize,
}

impl Default for KiloTrieConfig {
    fn default() -> Self {
        Self {
            max_key_chars: None,
            result_capacity_hint: 16,
        }
    }
}

impl KiloTrieConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the number of characters accepted by checked insertion.
    pub fn with_max_key_chars(mut self, max_key_chars: usize) -> Self {
        self.max_key_chars = Some(max_key_chars);
        self
    }

    /// Set the initial capacity of buffers allocated by `find_values`.
    pub fn with_result_capacity_hint(mut self, hint: usize) -> Self {
        self.result_capacity_hint = hint;
        self
    }
}

impl Validate for KiloTrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_key_chars == Some(0) {
            return Err(ConfigError::ValidationError(
                "max_key_chars must be greater than 0 when set".to_string(),
            ));
        }

        if self.result_capacity_hint > MAX_RESULT_CAPACITY_HINT {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.result_capacity_hint".to_string(),
                message: format!("must not exceed {MAX_RESULT_CAPACITY_HINT}"),
            });
        }

        Ok(())
    }
}
