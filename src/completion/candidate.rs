//! Completion candidates handed to the host for rendering

use serde::Serialize;

use crate::tree::KeyNode;

/// Delimiters that re-trigger completion after a drill-down candidate
pub const FOLLOW_UP_TRIGGERS: [char; 2] = ['.', ':'];

/// Whether accepting a candidate finishes a key or continues into a subtree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    /// Selecting it continues drilling into a subtree
    Branch,
    /// Directly usable key
    Leaf,
}

/// A single completion suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionCandidate {
    /// Text to insert and display
    pub label: String,

    /// Branch or leaf
    pub kind: CandidateKind,

    /// Resolved value for leaves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Characters that re-trigger completion when typed after accepting
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trigger_follow_up: Vec<char>,
}

impl CompletionCandidate {
    /// Candidate for a direct child of the drilled-into branch
    pub fn from_child(child: &KeyNode) -> Self {
        let (kind, detail) = match child {
            KeyNode::Tree { .. } => (CandidateKind::Branch, None),
            KeyNode::Leaf { value, .. } => (CandidateKind::Leaf, Some(value.clone())),
        };

        Self {
            label: child.keyname().to_string(),
            kind,
            detail,
            trigger_follow_up: FOLLOW_UP_TRIGGERS.to_vec(),
        }
    }

    /// Candidate for a fully-qualified key in a flat listing
    pub fn from_key(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: CandidateKind::Leaf,
            detail: Some(value.into()),
            trigger_follow_up: Vec::new(),
        }
    }

    /// Check if this candidate is a directly usable key
    pub fn is_leaf(&self) -> bool {
        self.kind == CandidateKind::Leaf
    }
}
