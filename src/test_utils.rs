//! Deterministic key corpora shared by the unit tests, the integration
//! tests and the benchmarks.
//!
//! Compiled for the crate's own tests and behind the `test-utils` feature.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy, ValueTree};
use proptest::test_runner::TestRunner;

/// Number of hex digits in generated keys.
pub const HEX_KEY_LENGTH: usize = 24;

/// Generate a strategy for lowercase hex keys of fixed length.
pub fn hex_key_strategy() -> BoxedStrategy<String> {
    prop::string::string_regex(&format!("[0-9a-f]{{{HEX_KEY_LENGTH}}}"))
        .expect("hex key regex is valid")
        .boxed()
}

/// Draw `count` hex keys from a deterministic runner, so every run sees the
/// same corpus.
pub fn random_hex_keys(count: usize) -> Vec<String> {
    let mut runner = TestRunner::deterministic();
    let strategy = hex_key_strategy();
    (0..count)
        .map(|_| {
            strategy
                .new_tree(&mut runner)
                .expect("hex key generation cannot be rejected")
                .current()
        })
        .collect()
}
