//! Error types for the Kilo Trie.
//!
//! Plain `add` never fails. These errors only come out of the checked
//! insertion paths, which enforce the configured key limit and reject
//! byte keys that are not valid UTF-8.

/// Errors that can occur in checked Kilo Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum KiloTrieError {
    /// The key has more characters than the trie is configured to index.
    #[error("Key of {chars} characters exceeds the limit of {max_chars}")]
    KeyTooLong {
        /// Number of characters in the rejected key.
        chars: usize,
        /// The configured maximum.
        max_chars: usize,
    },

    /// The key bytes are not valid UTF-8.
    #[error("Key is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidEncoding {
        /// Length of the longest valid UTF-8 prefix of the key.
        valid_up_to: usize,
    },
}

impl From<std::str::Utf8Error> for KiloTrieError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::InvalidEncoding {
            valid_up_to: err.valid_up_to(),
        }
    }
}

/// Result type for Kilo Trie operations.
pub type KiloTrieResult<T> = Result<T, KiloTrieError>;
