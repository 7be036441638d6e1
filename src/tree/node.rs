//! Key tree nodes
//!
//! A node is either a branch holding ordered children or a leaf holding the
//! resolved string value of a key.

/// A node of the localization key tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyNode {
    /// Namespace or intermediate path segment
    Tree {
        /// Local segment name (empty for the root)
        keyname: String,
        /// Children in insertion order, unique by keyname
        children: Vec<KeyNode>,
    },

    /// Terminal key with a resolved value
    Leaf {
        /// Local segment name
        keyname: String,
        /// Resolved value
        value: String,
    },
}

impl KeyNode {
    /// Create an empty branch
    pub fn tree(keyname: impl Into<String>) -> Self {
        Self::Tree {
            keyname: keyname.into(),
            children: Vec::new(),
        }
    }

    /// Create a leaf
    pub fn leaf(keyname: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Leaf {
            keyname: keyname.into(),
            value: value.into(),
        }
    }

    /// Local segment name of this node
    pub fn keyname(&self) -> &str {
        match self {
            Self::Tree { keyname, .. } | Self::Leaf { keyname, .. } => keyname,
        }
    }

    /// Check if this node is a branch
    pub fn is_tree(&self) -> bool {
        matches!(self, Self::Tree { .. })
    }

    /// Resolved value, `None` for branches
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Tree { .. } => None,
            Self::Leaf { value, .. } => Some(value),
        }
    }

    /// Direct children, empty for leaves
    pub fn children(&self) -> &[KeyNode] {
        match self {
            Self::Tree { children, .. } => children,
            Self::Leaf { .. } => &[],
        }
    }

    /// Find a direct child by segment name
    pub fn child(&self, name: &str) -> Option<&KeyNode> {
        self.children().iter().find(|c| c.keyname() == name)
    }

    /// Walk down the tree following `segments`
    pub fn descend<'a, I>(&self, segments: I) -> Option<&KeyNode>
    where
        I: IntoIterator<Item = &'a str>,
    {
        segments
            .into_iter()
            .try_fold(self, |node, segment| node.child(segment))
    }

    /// Insert `node` at the path given by `segments`, relative to this branch.
    ///
    /// Missing intermediate branches are created. An intermediate leaf is
    /// replaced by a branch. Inserting a branch over an existing branch merges
    /// their children; any other collision replaces the old node in place.
    ///
    /// Returns `false` when called on a leaf or with no segments.
    pub fn insert(&mut self, segments: &[&str], node: KeyNode) -> bool {
        let Self::Tree { children, .. } = self else {
            return false;
        };

        match segments {
            [] => false,
            [last] => {
                upsert(children, node.renamed(last));
                true
            }
            [first, rest @ ..] => {
                let index = match children.iter().position(|c| c.keyname() == *first) {
                    Some(i) if children[i].is_tree() => i,
                    Some(i) => {
                        children[i] = KeyNode::tree(*first);
                        i
                    }
                    None => {
                        children.push(KeyNode::tree(*first));
                        children.len() - 1
                    }
                };
                children[index].insert(rest, node)
            }
        }
    }

    fn renamed(self, name: &str) -> Self {
        match self {
            Self::Tree { children, .. } => Self::Tree {
                keyname: name.to_string(),
                children,
            },
            Self::Leaf { value, .. } => Self::Leaf {
                keyname: name.to_string(),
                value,
            },
        }
    }
}

fn upsert(children: &mut Vec<KeyNode>, node: KeyNode) {
    let Some(existing) = children.iter_mut().find(|c| c.keyname() == node.keyname()) else {
        children.push(node);
        return;
    };

    match (existing, node) {
        (
            KeyNode::Tree {
                children: existing_children,
                ..
            },
            KeyNode::Tree { children, .. },
        ) => {
            for child in children {
                upsert(existing_children, child);
            }
        }
        (existing, node) => *existing = node,
    }
}
