//! Localization key tree
//!
//! Keys are organised as a rooted tree whose top-level branches are
//! namespaces (one per locale file). The resolver only reads the tree; the
//! loader is the single writer.
//!
//! - **KeyNode**: branch or leaf node
//! - **KeyTree**: the store and its path lookups
//! - **LocaleLoader**: builds a tree from a directory of locale files

mod loader;
mod node;
mod store;

pub use loader::{LocaleFormat, LocaleLoader};
pub use node::KeyNode;
pub use store::KeyTree;

/// Characters accepted as segment delimiters inside a key path
pub const KEY_DELIMITERS: [char; 2] = ['.', ':'];

/// Split a key path on `.` or `:`
///
/// Empty segments are kept, so `"common."` yields `["common", ""]`.
pub fn split_key(path: &str) -> impl Iterator<Item = &str> {
    path.split(KEY_DELIMITERS)
}
