//! Error types for fetch-config

/// Result type for fetch-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving, reading or writing the config
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither platform environment variable was available
    #[error("Could not resolve config directory: neither HOME nor LOCALAPPDATA is set")]
    UnresolvedLocation,

    /// Valid JSON whose top level is not an object
    #[error("Expected a JSON object in {origin}, found {found}")]
    NotAnObject { origin: String, found: &'static str },

    /// Filesystem or JSON error from fetch-fs
    #[error(transparent)]
    Fs(#[from] fetch_fs::Error),
}

impl Error {
    /// Whether the stored or template content could not be understood as a
    /// config document.
    pub fn is_parse(&self) -> bool {
        match self {
            Self::NotAnObject { .. } => true,
            Self::Fs(e) => e.is_parse(),
            Self::UnresolvedLocation => false,
        }
    }

    /// Whether the filesystem refused an operation.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Fs(e) if e.is_io())
    }
}
