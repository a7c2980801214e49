//! Default template used to seed a missing config file

use std::path::{Path, PathBuf};

use fetch_fs::JsonFile;
use serde_json::Value;

use crate::{ConfigDocument, Result};

/// Name reported in errors about the embedded template.
const BUNDLED_NAME: &str = "assets/default_config.json";

const BUNDLED: &str = include_str!("../assets/default_config.json");

#[derive(Debug, Clone, Default)]
enum Source {
    #[default]
    Bundled,
    File(PathBuf),
    Document(ConfigDocument),
}

/// The read-only document a config file starts from.
///
/// The template is only consulted when no config file exists yet.
#[derive(Debug, Clone, Default)]
pub struct DefaultTemplate {
    source: Source,
}

impl DefaultTemplate {
    /// The template compiled into this crate.
    pub fn bundled() -> Self {
        Self::default()
    }

    /// A template read from disk each time it is needed.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::File(path.into()),
        }
    }

    /// A template supplied in memory.
    pub fn from_document(document: ConfigDocument) -> Self {
        Self {
            source: Source::Document(document),
        }
    }

    /// Produce the template document.
    ///
    /// Fails if a file template cannot be read, or if the template is not a
    /// JSON object.
    pub fn load(&self) -> Result<ConfigDocument> {
        match &self.source {
            Source::Bundled => {
                let value: Value = JsonFile::parse(Path::new(BUNDLED_NAME), BUNDLED)?;
                ConfigDocument::from_json(value, format_args!("template {BUNDLED_NAME}"))
            }
            Source::File(path) => {
                let value: Value = JsonFile::new().load(path)?;
                ConfigDocument::from_json(value, format_args!("template {}", path.display()))
            }
            Source::Document(document) => Ok(document.clone()),
        }
    }
}
