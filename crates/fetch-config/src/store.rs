//! Read, seed, merge and write the per-user config file

use std::path::{Path, PathBuf};

use fetch_fs::{JsonFile, RobustnessConfig};
use serde_json::Value;

use crate::{ConfigDocument, ConfigLocation, DefaultTemplate, LocationSource, Result};

/// Per-user JSON config store.
///
/// Every call goes to disk: there is no cache, so [`get`](Self::get) always
/// reflects the latest file contents. Writes replace the file atomically but
/// nothing serializes concurrent [`put`](Self::put) calls, so two processes
/// updating at once can lose one of the updates.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    source: LocationSource,
    template: DefaultTemplate,
    json: JsonFile,
}

impl ConfigStore {
    /// A store located through `HOME` / `LOCALAPPDATA`, seeded from the
    /// bundled template.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that always uses `dir` as the config directory.
    pub fn with_config_dir(dir: impl Into<PathBuf>) -> Self {
        Self::with_source(LocationSource::Fixed(dir.into()))
    }

    pub fn with_source(source: LocationSource) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }

    /// Replace the template used to seed a missing file.
    pub fn with_template(mut self, template: DefaultTemplate) -> Self {
        self.template = template;
        self
    }

    /// Replace the atomic-write tuning.
    pub fn with_robustness(mut self, robustness: RobustnessConfig) -> Self {
        self.json = JsonFile::with_robustness(robustness);
        self
    }

    /// Resolve where the config file lives right now.
    pub fn location(&self) -> Result<ConfigLocation> {
        self.source.resolve()
    }

    /// Read the full config document, seeding it from the template first if
    /// the file does not exist.
    pub fn get(&self) -> Result<ConfigDocument> {
        let location = self.location()?;
        let path = location.path();

        let exists = path
            .try_exists()
            .map_err(|e| fetch_fs::Error::io(&path, e))?;
        if !exists {
            tracing::debug!(?path, "No config file, seeding from default template");
            let template = self.template.load()?;
            self.write_at(&path, &template)?;
        }

        self.read_at(&path)
    }

    /// Shallow-merge `partial` into the stored document and persist it.
    ///
    /// Top-level keys in `partial` replace stored values wholesale. Other
    /// keys are left untouched.
    pub fn put<I, K>(&self, partial: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut document = self.get()?;
        let keys = document.merge(partial);
        tracing::debug!(keys, "Merged config update");
        self.write(&document)
    }

    /// Replace the stored document entirely, creating the config directory
    /// if needed.
    pub fn write(&self, document: &ConfigDocument) -> Result<()> {
        let location = self.location()?;
        self.write_at(&location.path(), document)
    }

    fn read_at(&self, path: &Path) -> Result<ConfigDocument> {
        let value: Value = self.json.load(path)?;
        ConfigDocument::from_json(value, format_args!("config file {}", path.display()))
    }

    fn write_at(&self, path: &Path, document: &ConfigDocument) -> Result<()> {
        self.json.save(path, document)?;
        tracing::debug!(?path, keys = document.len(), "Saved config");
        Ok(())
    }
}
