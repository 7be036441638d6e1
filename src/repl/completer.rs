//! Completer for reedline - provides key completion suggestions

use std::sync::Arc;

use reedline::{Completer, Span, Suggestion};

use super::shared_state::SharedState;
use crate::completion::{CandidateKind, CompletionEngine};

/// Localization key completer for reedline
pub struct KeyCompleter {
    /// Completion engine for key suggestions
    engine: Arc<CompletionEngine>,

    /// Shared state holding the enable flag and tree snapshot
    state: SharedState,
}

impl KeyCompleter {
    /// Create a new key completer
    ///
    /// # Arguments
    /// * `engine` - Completion engine
    /// * `state` - Shared state
    pub fn new(engine: Arc<CompletionEngine>, state: SharedState) -> Self {
        Self { engine, state }
    }
}

impl Completer for KeyCompleter {
    /// Complete the input at the given cursor position
    ///
    /// # Arguments
    /// * `line` - The input line
    /// * `pos` - Cursor position (byte index)
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let tree = self.state.snapshot();
        let Some(response) = self
            .engine
            .complete(self.state.is_enabled(), &tree, line, pos)
        else {
            return Vec::new();
        };

        // The resolver returns every sibling; narrow to what is already typed
        let typed = line.get(response.start..pos).unwrap_or_default();

        response
            .candidates
            .into_iter()
            .filter(|candidate| candidate.label.starts_with(typed))
            .map(|candidate| {
                let description = match candidate.kind {
                    CandidateKind::Branch => Some("...".to_string()),
                    CandidateKind::Leaf => candidate.detail,
                };
                Suggestion {
                    value: candidate.label,
                    description,
                    style: None,
                    extra: None,
                    span: Span::new(response.start, pos),
                    append_whitespace: false,
                    match_indices: None,
                }
            })
            .collect()
    }
}
