//! Candidate resolver
//!
//! Maps a raw key plus the active namespaces to an ordered list of
//! candidates. Resolution is a pure function of its inputs: it never fails,
//! never mutates the tree and never caches between calls. Every input that
//! cannot be resolved yields an empty list.

use tracing::trace;

use super::candidate::CompletionCandidate;
use super::context::KeyContext;
use crate::tree::{KeyNode, KeyTree};
use crate::utils::eject;

/// Resolves raw keys against a key tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateResolver {
    /// Separator written between a namespace and the rest of a key in listings
    namespace_delimiter: char,
}

impl CandidateResolver {
    /// Create a resolver using `namespace_delimiter` for listing labels
    pub fn new(namespace_delimiter: char) -> Self {
        Self {
            namespace_delimiter,
        }
    }

    /// Resolve completion candidates.
    ///
    /// * `None` - not inside a key reference, no candidates
    /// * `Some("")` - flat listing of every key in the active namespaces
    /// * anything else - children of the branch named by the key or its parent
    pub fn resolve<S: AsRef<str>>(
        &self,
        raw_key: Option<&str>,
        namespaces: &[S],
        tree: &KeyTree,
    ) -> Vec<CompletionCandidate> {
        match KeyContext::from_raw(raw_key) {
            KeyContext::None => Vec::new(),
            KeyContext::Listing => self.list_keys(namespaces, tree),
            KeyContext::Path { key, parent } => Self::drill_down(tree, &key, parent.as_deref()),
        }
    }

    /// Children of the branch at `key`, falling back to `parent`
    fn drill_down(tree: &KeyTree, key: &str, parent: Option<&str>) -> Vec<CompletionCandidate> {
        let target = tree
            .node_by_key(key)
            .or_else(|| parent.and_then(|p| tree.node_by_key(p)));

        match target {
            Some(node @ KeyNode::Tree { .. }) => {
                trace!("'{}' resolved to branch '{}'", key, node.keyname());
                node.children()
                    .iter()
                    .map(CompletionCandidate::from_child)
                    .collect()
            }
            Some(KeyNode::Leaf { .. }) => {
                trace!("'{}' resolved to a leaf, nothing to drill into", key);
                Vec::new()
            }
            None => {
                trace!("'{}' does not resolve", key);
                Vec::new()
            }
        }
    }

    /// Every leaf key whose namespace is in scope.
    ///
    /// Full keys are written as `namespace`, the configured namespace
    /// delimiter, then the rest of the path, so `common:ok` when `:` is
    /// configured. With several namespaces that full key is the label; with
    /// one it is ejected.
    fn list_keys<S: AsRef<str>>(&self, namespaces: &[S], tree: &KeyTree) -> Vec<CompletionCandidate> {
        let ambiguous = namespaces.len() > 1;

        tree.leaves()
            .into_iter()
            .filter_map(|(key, value)| {
                let (namespace, rest) = match key.split_once('.') {
                    Some((namespace, rest)) => (namespace, Some(rest)),
                    None => (key.as_str(), None),
                };
                if !namespaces.iter().any(|ns| ns.as_ref() == namespace) {
                    return None;
                }

                let qualified = match rest {
                    Some(rest) => format!("{namespace}{}{rest}", self.namespace_delimiter),
                    None => key.clone(),
                };
                let label = if ambiguous {
                    qualified.clone()
                } else {
                    eject(namespaces, &qualified, self.namespace_delimiter)
                        .display_key
                        .to_string()
                };
                Some(CompletionCandidate::from_key(label, value))
            })
            .collect()
    }
}

impl Default for CandidateResolver {
    fn default() -> Self {
        Self::new('.')
    }
}

/// Find the value of a complete key.
///
/// The key is tried as written first, then qualified with each namespace in
/// order. Returns the fully-qualified key that matched and its value.
pub fn lookup<'t, S: AsRef<str>>(
    key: &str,
    namespaces: &[S],
    tree: &'t KeyTree,
) -> Option<(String, &'t str)> {
    if key.is_empty() {
        return None;
    }

    std::iter::once(key.to_string())
        .chain(namespaces.iter().map(|ns| format!("{}.{key}", ns.as_ref())))
        .find_map(|qualified| tree.value_by_key(&qualified).map(|value| (qualified, value)))
}

/// Resolve with the default `.` namespace delimiter
pub fn resolve<S: AsRef<str>>(
    raw_key: Option<&str>,
    namespaces: &[S],
    tree: &KeyTree,
) -> Vec<CompletionCandidate> {
    CandidateResolver::default().resolve(raw_key, namespaces, tree)
}
