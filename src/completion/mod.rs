//! Completion system for localization keys
//!
//! Given the partial key under the cursor and the namespaces in scope, the
//! system proposes the next key segments, or whole keys when nothing has been
//! typed yet.
//!
//! # Architecture
//!
//! - **Detector**: finds the raw key text at the cursor
//! - **Scope**: determines which namespaces are active
//! - **Context**: classifies the raw key (none, listing, path)
//! - **Resolver**: turns a context into candidates against the key tree
//! - **Engine**: orchestrates the entire completion flow
//!
//! # Examples
//!
//! ```
//! use i18n_complete::completion::{resolve, CandidateKind};
//! use i18n_complete::tree::KeyTree;
//!
//! let mut tree = KeyTree::new();
//! tree.insert("common.ok", "OK");
//! tree.insert("common.cancel", "Cancel");
//!
//! let candidates = resolve(Some("common."), &["common"], &tree);
//! assert_eq!(candidates[0].label, "ok");
//! assert_eq!(candidates[0].kind, CandidateKind::Leaf);
//! ```

mod candidate;
mod context;
mod detector;
mod engine;
mod resolver;
mod scope;

pub use candidate::{CandidateKind, CompletionCandidate, FOLLOW_UP_TRIGGERS};
pub use context::KeyContext;
pub use detector::{CallKeyDetector, DetectedKey, KeyDetector, KeyReference};
pub use engine::{CompletionEngine, CompletionResponse};
pub use resolver::{CandidateResolver, lookup, resolve};
pub use scope::{ChainedScope, ScopeProvider, StaticScope, UseTranslationScope};
