//! Kilo Index Library
//!
//! An in-memory substring index built on a radix-compressed prefix trie.
//! Every key is indexed at every character offset, so looking up any
//! contiguous piece of a key costs time proportional to the piece, not to
//! the size of the corpus.
//!
//! # Architecture
//!
//! - [`data_structures::kilo_trie`] holds the index itself.
//! - [`config`] loads and validates settings from files and the environment.
//! - [`error`] gathers the crate's error types.
//! - [`logging`] installs a `tracing` subscriber for embedding applications.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod logging;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::kilo_trie::{KiloTrie, KiloTrieConfig, KiloTrieError, KiloTrieResult};

/// Version information for the Kilo Index.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Loads the default configuration (falling back to built-in defaults when no
/// file is present), installs it globally, and returns it. Logging is left to
/// the caller; see [`logging::init_logging`].
pub fn init() -> error::KiloResult<config::KiloConfig> {
    let config = config::init_default_config()?;
    tracing::info!(version = VERSION, "Kilo Index initialized");
    Ok(config)
}

/// Creates a trie configured from the global configuration, or with defaults
/// when none has been installed.
pub fn trie_from_global_config() -> KiloTrie {
    match config::get_global_config() {
        Some(global) => KiloTrie::with_config(global.get().trie.clone()),
        None => KiloTrie::new(),
    }
}
