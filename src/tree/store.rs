//! In-memory key tree store
//!
//! Read accessors used by the resolver plus the mutation entry points used
//! by the loader. Nothing here performs I/O.

use super::node::KeyNode;
use super::split_key;

/// Rooted tree of localization keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTree {
    /// Root branch, has no local name
    root: KeyNode,
}

impl KeyTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self {
            root: KeyNode::tree(""),
        }
    }

    /// Root branch of the tree
    pub fn root(&self) -> &KeyNode {
        &self.root
    }

    /// Resolve the node at `path`.
    ///
    /// `.` and `:` are both accepted as segment delimiters. The empty path
    /// resolves to the root.
    pub fn node_by_key(&self, path: &str) -> Option<&KeyNode> {
        if path.is_empty() {
            return Some(&self.root);
        }
        self.root.descend(split_key(path))
    }

    /// Resolved value of the leaf at `path`
    pub fn value_by_key(&self, path: &str) -> Option<&str> {
        self.node_by_key(path).and_then(KeyNode::value)
    }

    /// Every fully-qualified leaf key, depth first in insertion order
    pub fn keys(&self) -> Vec<String> {
        self.leaves().into_iter().map(|(key, _)| key).collect()
    }

    /// Every leaf as `(fully-qualified key, value)`, depth first in insertion order
    pub fn leaves(&self) -> Vec<(String, &str)> {
        let mut out = Vec::new();
        let mut path = Vec::new();
        collect_leaves(&self.root, &mut path, &mut out);
        out
    }

    /// Names of the top-level namespaces
    pub fn namespaces(&self) -> Vec<&str> {
        self.root.children().iter().map(KeyNode::keyname).collect()
    }

    /// Number of leaf keys
    pub fn len(&self) -> usize {
        self.leaves().len()
    }

    /// Check if the tree holds no keys
    pub fn is_empty(&self) -> bool {
        self.root.children().is_empty()
    }

    /// Set the value of the key at `path`, creating branches on the way
    pub fn insert(&mut self, path: &str, value: impl Into<String>) -> bool {
        let segments: Vec<&str> = split_key(path).collect();
        self.root.insert(&segments, KeyNode::leaf("", value))
    }

    /// Attach a namespace subtree, merging with an existing one of the same name
    pub fn insert_namespace(&mut self, namespace: &str, node: KeyNode) -> bool {
        self.root.insert(&[namespace], node)
    }
}

impl Default for KeyTree {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_leaves<'a>(
    node: &'a KeyNode,
    path: &mut Vec<&'a str>,
    out: &mut Vec<(String, &'a str)>,
) {
    for child in node.children() {
        path.push(child.keyname());
        match child {
            KeyNode::Tree { .. } => collect_leaves(child, path, out),
            KeyNode::Leaf { value, .. } => out.push((path.join("."), value.as_str())),
        }
        path.pop();
    }
}
