//! Data structures for the Kilo Index.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Ownership-based trees without back references
//! - Allocation reuse on hot lookup paths

pub mod kilo_trie;

// Re-export common data structures
pub use kilo_trie::{KiloTrie, KiloTrieError, KiloTrieResult};
