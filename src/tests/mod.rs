//! Test modules for the Kilo Index.
//!
//! Component tests live next to their components; this module holds the
//! crate-level suites and the shared fixtures they use:
//! - Configuration loading and validation
//! - Error conversions and messages
//! - Test fixtures

pub mod fixtures;

pub use fixtures::TestFixture;
