//! Config file location resolution
//!
//! The config directory is derived from the process environment:
//! - `$HOME/.fetch/` when `HOME` is set (Unix-like systems)
//! - `%LOCALAPPDATA%\Fetch\` otherwise (Windows)
//!
//! Empty variables count as unset. When neither is available resolution
//! fails with [`Error::UnresolvedLocation`].

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Environment variable consulted first.
pub const HOME_VAR: &str = "HOME";

/// Environment variable consulted when `HOME` is missing.
pub const LOCAL_APP_DATA_VAR: &str = "LOCALAPPDATA";

/// Directory created under `HOME`.
pub const HOME_DIR_NAME: &str = ".fetch";

/// Directory created under `LOCALAPPDATA`.
pub const LOCAL_APP_DATA_DIR_NAME: &str = "Fetch";

/// File name of the stored config.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Where the config file lives: a directory plus a fixed file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLocation {
    dir: PathBuf,
}

impl ConfigLocation {
    /// A location inside an explicit directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolve from the live process environment.
    pub fn detect() -> Result<Self> {
        let home = std::env::var_os(HOME_VAR);
        let local_app_data = std::env::var_os(LOCAL_APP_DATA_VAR);
        Self::from_env_values(home.as_deref(), local_app_data.as_deref())
    }

    /// Resolve from already-read values of `HOME` and `LOCALAPPDATA`.
    pub fn from_env_values(home: Option<&OsStr>, local_app_data: Option<&OsStr>) -> Result<Self> {
        if let Some(home) = non_empty(home) {
            return Ok(Self::new(Path::new(home).join(HOME_DIR_NAME)));
        }
        if let Some(local_app_data) = non_empty(local_app_data) {
            return Ok(Self::new(
                Path::new(local_app_data).join(LOCAL_APP_DATA_DIR_NAME),
            ));
        }
        Err(Error::UnresolvedLocation)
    }

    /// The config directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file_name(&self) -> &'static str {
        CONFIG_FILE_NAME
    }

    /// Full path of the config file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE_NAME)
    }
}

fn non_empty(value: Option<&OsStr>) -> Option<&OsStr> {
    value.filter(|v| !v.is_empty())
}

/// How a [`ConfigStore`](crate::ConfigStore) finds its directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LocationSource {
    /// Re-read `HOME` / `LOCALAPPDATA` on every access.
    #[default]
    Environment,
    /// Always use this directory.
    Fixed(PathBuf),
}

impl LocationSource {
    pub fn resolve(&self) -> Result<ConfigLocation> {
        let location = match self {
            Self::Environment => ConfigLocation::detect()?,
            Self::Fixed(dir) => ConfigLocation::new(dir),
        };
        tracing::debug!(path = ?location.path(), "Resolved config location");
        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::home_only(Some("/home/ada"), None, "/home/ada/.fetch")]
    #[case::home_wins(Some("/home/ada"), Some("/appdata"), "/home/ada/.fetch")]
    #[case::local_app_data_only(None, Some("/appdata"), "/appdata/Fetch")]
    #[case::empty_home_falls_through(Some(""), Some("/appdata"), "/appdata/Fetch")]
    fn resolves_directory(
        #[case] home: Option<&str>,
        #[case] local_app_data: Option<&str>,
        #[case] expected: &str,
    ) {
        let location =
            ConfigLocation::from_env_values(home.map(OsStr::new), local_app_data.map(OsStr::new))
                .unwrap();

        let expected = Path::new(expected);
        assert_eq!(location.dir(), expected);
        assert_eq!(location.path(), expected.join("config.json"));
    }

    #[rstest]
    #[case::both_missing(None, None)]
    #[case::both_empty(Some(""), Some(""))]
    fn fails_without_environment(
        #[case] home: Option<&str>,
        #[case] local_app_data: Option<&str>,
    ) {
        let result =
            ConfigLocation::from_env_values(home.map(OsStr::new), local_app_data.map(OsStr::new));

        let err = result.unwrap_err();
        assert!(matches!(err, Error::UnresolvedLocation));
        assert!(err.to_string().contains("HOME"));
        assert!(err.to_string().contains("LOCALAPPDATA"));
    }

    #[test]
    fn file_name_is_fixed() {
        let location = ConfigLocation::new("/tmp/anywhere");
        assert_eq!(location.file_name(), "config.json");
        assert_eq!(location.path().file_name().unwrap(), "config.json");
    }

    #[test]
    fn fixed_source_ignores_environment() {
        let source = LocationSource::Fixed(PathBuf::from("/srv/fetch"));
        let location = source.resolve().unwrap();
        assert_eq!(location.dir(), Path::new("/srv/fetch"));
    }
}
