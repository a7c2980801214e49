//! Shared test utilities for the fetch workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`home`]: [`TestHome`](home::TestHome), a throwaway home directory
//!   laid out like `$HOME/.fetch/config.json`

pub mod home;

pub use home::TestHome;
