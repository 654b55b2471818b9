//! Error module for the Kilo Index.
//!
//! Trie lookups and plain insertion cannot fail. Errors come from the checked
//! insertion paths, from configuration loading, and from library setup; this
//! module gathers them under one type so callers can use `?` throughout.

use thiserror::Error;

pub mod config;

pub use crate::data_structures::kilo_trie::KiloTrieError;

/// Result type alias used throughout the Kilo Index.
pub type KiloResult<T> = Result<T, KiloError>;

/// Core error enum for the Kilo Index.
#[derive(Error, Debug)]
pub enum KiloError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by checked trie insertion.
    #[error("Trie error: {0}")]
    Trie(#[from] KiloTrieError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
