//! Filesystem layer for the Fetch configuration store
//!
//! Provides atomic writes and JSON file loading/saving.

pub mod error;
pub mod io;
pub mod json;

pub use error::{Error, Result};
pub use io::RobustnessConfig;
pub use json::JsonFile;
