//! Error handling for i18n-complete.
//!
//! Key resolution is infallible by construction: every unresolvable input
//! produces an empty candidate list. The types here cover the layers around
//! it, which read files, parse configuration and drive the line editor.
//!
//! # Example
//!
//! ```rust,no_run
//! use i18n_complete::error::{LoadError, Result};
//!
//! fn require_directory(exists: bool) -> Result<()> {
//!     if !exists {
//!         return Err(LoadError::DirectoryNotFound("locales".to_string()).into());
//!     }
//!     Ok(())
//! }
//! ```

pub mod kinds;

pub use kinds::{ConfigError, I18nError, LoadError, Result};
