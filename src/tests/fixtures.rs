//! Test fixtures for the Kilo Index.

use std::path::PathBuf;
use tempfile::TempDir;

/// A test fixture with a temporary directory and environment variables that
/// are removed again on drop.
pub struct TestFixture {
    /// Temporary directory for test files.
    pub temp_dir: TempDir,

    /// Environment variables set by this fixture.
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for the lifetime of the fixture.
    pub fn set_env_var<K: Into<String>, V: AsRef<str>>(&mut self, key: K, value: V) {
        let key = key.into();
        std::env::set_var(&key, value.as_ref());
        self.env_vars.push(key);
    }

    /// Write a file into the fixture directory and return its path.
    pub fn write_file<C: AsRef<[u8]>>(&self, name: &str, contents: C) -> std::io::Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
