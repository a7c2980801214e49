//! Atomic I/O operations

use std::fs;
use std::io::Write;
use std::path::Path;
use std::thread;
use std::time::Duration;

use backoff::ExponentialBackoffBuilder;
use backoff::backoff::Backoff;
use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Tuning for [`write_atomic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobustnessConfig {
    /// Flush the temp file to disk before it replaces the target.
    pub fsync: bool,
    /// Number of times a failed rename is retried before giving up.
    pub max_rename_retries: u32,
    /// Delay before the first retry.
    pub initial_backoff: Duration,
    /// Upper bound for a single retry delay.
    pub max_backoff: Duration,
}

impl Default for RobustnessConfig {
    fn default() -> Self {
        Self {
            fsync: true,
            max_rename_retries: 3,
            initial_backoff: Duration::from_millis(10),
            max_backoff: Duration::from_millis(200),
        }
    }
}

impl RobustnessConfig {
    /// No fsync and no retries. Useful for tests and throwaway directories.
    pub fn fast() -> Self {
        Self {
            fsync: false,
            max_rename_retries: 0,
            ..Self::default()
        }
    }

    fn rename_backoff(&self) -> impl Backoff {
        ExponentialBackoffBuilder::new()
            .with_initial_interval(self.initial_backoff)
            .with_max_interval(self.max_backoff)
            .with_max_elapsed_time(None)
            .build()
    }
}

/// Write content atomically to a file.
///
/// Missing parent directories are created. The content goes to a temp file
/// in the target directory (same filesystem) which is then renamed over the
/// target, so readers see either the old or the new content. If any step
/// fails the temp file is removed when it is dropped.
pub fn write_atomic(path: &Path, content: &[u8], config: RobustnessConfig) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    if !parent.is_dir() {
        tracing::debug!(?parent, "Creating directory");
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let prefix = format!(
        ".{}.",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default()
    );
    let mut temp = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(".tmp")
        .tempfile_in(parent)
        .map_err(|e| Error::io(parent, e))?;

    temp.write_all(content)
        .map_err(|e| Error::io(temp.path(), e))?;

    if config.fsync {
        temp.as_file()
            .sync_all()
            .map_err(|e| Error::io(temp.path(), e))?;
    }

    persist(temp, path, config)?;
    tracing::debug!(?path, bytes = content.len(), "Wrote file");
    Ok(())
}

fn persist(mut temp: NamedTempFile, path: &Path, config: RobustnessConfig) -> Result<()> {
    let mut backoff = config.rename_backoff();
    let mut attempt = 0;

    loop {
        let err = match temp.persist(path) {
            Ok(_) => return Ok(()),
            Err(err) => err,
        };

        attempt += 1;
        let delay = if attempt <= config.max_rename_retries {
            backoff.next_backoff()
        } else {
            None
        };

        match delay {
            Some(delay) => {
                tracing::warn!(?path, attempt, error = %err.error, "Rename failed, retrying");
                thread::sleep(delay);
                temp = err.file;
            }
            // Dropping err.file deletes the temp file.
            None => return Err(Error::io(path, err.error)),
        }
    }
}

/// Read raw bytes from a file.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::io(path, e))
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write text content to a file atomically with default robustness.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes(), RobustnessConfig::default())
}
