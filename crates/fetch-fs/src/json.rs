//! JSON configuration loading and saving

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result, io};

/// Loads and saves JSON files.
///
/// Saving is atomic and pretty-printed with a trailing newline.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFile {
    robustness: io::RobustnessConfig,
}

impl JsonFile {
    /// Create a new JsonFile with default robustness settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new JsonFile with custom robustness settings.
    pub fn with_robustness(robustness: io::RobustnessConfig) -> Self {
        Self { robustness }
    }

    /// Load and deserialize a JSON file.
    ///
    /// Content that is not valid UTF-8 is reported as a parse error.
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = io::read_bytes(path)?;
        serde_json::from_slice(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Deserialize JSON text. `origin` is only used in error messages.
    pub fn parse<T: DeserializeOwned>(origin: &Path, content: &str) -> Result<T> {
        serde_json::from_str(content).map_err(|source| Error::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Serialize a value and write it atomically.
    pub fn save<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        let mut content =
            serde_json::to_string_pretty(value).map_err(|source| Error::ConfigSerialize {
                path: path.to_path_buf(),
                source,
            })?;
        content.push('\n');

        io::write_atomic(path, content.as_bytes(), self.robustness)
    }
}
