//! Per-user JSON configuration store for Fetch
//!
//! The config lives at `$HOME/.fetch/config.json`, or at
//! `%LOCALAPPDATA%\Fetch\config.json` when `HOME` is not set. It is created
//! from a default template on first read, and updated by shallow key/value
//! merges.
//!
//! ```no_run
//! use serde_json::json;
//!
//! let config = fetch_config::get()?;
//! println!("hotkey: {:?}", config.get("hotkey"));
//!
//! fetch_config::put([("hotkey", json!("Alt+Space"))])?;
//! # Ok::<(), fetch_config::Error>(())
//! ```

pub mod document;
pub mod error;
pub mod location;
pub mod store;
pub mod template;

pub use document::ConfigDocument;
pub use error::{Error, Result};
pub use location::{ConfigLocation, LocationSource};
pub use store::ConfigStore;
pub use template::DefaultTemplate;

pub use fetch_fs::RobustnessConfig;

use serde_json::Value;

/// Read the current config from the environment-derived location.
pub fn get() -> Result<ConfigDocument> {
    ConfigStore::new().get()
}

/// Shallow-merge `partial` into the config at the environment-derived location.
pub fn put<I, K>(partial: I) -> Result<()>
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    ConfigStore::new().put(partial)
}
