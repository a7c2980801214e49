//! [`TestHome`] fixture for config store tests.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

/// A temporary directory standing in for `$HOME`.
///
/// The config file is expected at `<root>/.fetch/config.json`.
///
/// # Example
///
/// ```rust,no_run
/// use fetch_test_utils::TestHome;
///
/// let home = TestHome::new();
/// home.write_config(r#"{"a": 1}"#);
/// home.assert_config_exists();
/// ```
pub struct TestHome {
    temp_dir: TempDir,
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHome {
    /// Create an empty temporary home directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("TestHome::new: failed to create temp dir"),
        }
    }

    /// The home directory itself.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// `<root>/.fetch`
    pub fn config_dir(&self) -> PathBuf {
        self.root().join(".fetch")
    }

    /// `<root>/.fetch/config.json`
    pub fn config_path(&self) -> PathBuf {
        self.config_dir().join("config.json")
    }

    /// Write raw text as the config file, creating `.fetch/` if needed.
    ///
    /// # Panics
    /// Panics if the filesystem operations fail.
    pub fn write_config(&self, content: &str) {
        self.write_config_bytes(content.as_bytes());
    }

    /// Write raw bytes as the config file, creating `.fetch/` if needed.
    ///
    /// # Panics
    /// Panics if the filesystem operations fail.
    pub fn write_config_bytes(&self, content: &[u8]) {
        fs::create_dir_all(self.config_dir())
            .unwrap_or_else(|e| panic!("write_config: failed to create config dir: {e}"));
        fs::write(self.config_path(), content)
            .unwrap_or_else(|e| panic!("write_config: failed to write config: {e}"));
    }

    /// Raw text of the config file.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_config(&self) -> String {
        let path = self.config_path();
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Could not read config {}: {e}", path.display()))
    }

    /// The config file parsed as JSON.
    ///
    /// # Panics
    /// Panics if the file cannot be read or is not valid JSON.
    pub fn read_config_json(&self) -> Value {
        let content = self.read_config();
        serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("Config is not valid JSON: {e}\n{content}"))
    }

    /// # Panics
    /// Panics with a descriptive message if the config file does not exist.
    pub fn assert_config_exists(&self) {
        let path = self.config_path();
        assert!(path.is_file(), "Expected config to exist: {}", path.display());
    }

    /// # Panics
    /// Panics with a descriptive message if the config file exists.
    pub fn assert_config_not_exists(&self) {
        let path = self.config_path();
        assert!(!path.exists(), "Expected config NOT to exist: {}", path.display());
    }
}
