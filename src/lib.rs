//! i18n-complete library
//!
//! Context-aware autocomplete for hierarchical, namespaced localization keys.
//! Locale files are loaded into an immutable key tree; partial keys such as
//! `common.bu` are resolved against it into completion candidates.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `completion`: Candidate resolution, scope detection and the completion engine
//! - `config`: Configuration management
//! - `error`: Error types and handling
//! - `formatter`: Output formatting and display
//! - `repl`: Interactive REPL engine
//! - `tree`: Key tree model and locale loading
//! - `utils`: Utility functions and helpers
//!
//! # Example
//!
//! ```no_run
//! use i18n_complete::{resolve, tree::LocaleLoader};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let tree = LocaleLoader::new("./locales").load()?;
//!     let namespaces = vec!["common".to_string()];
//!
//!     for candidate in resolve(Some("common.bu"), &namespaces, &tree) {
//!         println!("{}", candidate.label);
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod formatter;
pub mod repl;
pub mod tree;
pub mod utils;

// Re-export commonly used types
pub use completion::{CompletionCandidate, CompletionEngine, resolve};
pub use config::Config;
pub use error::{I18nError, Result};
pub use formatter::Formatter;
pub use repl::{ReplEngine, SharedState};
pub use tree::KeyTree;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
pub fn version() -> &'static str {
    VERSION
}
