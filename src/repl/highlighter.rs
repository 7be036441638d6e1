//! Highlighter for key references
//!
//! Closed references such as `t('common.ok')` are painted green when the key
//! resolves to a value and red when it does not. Everything else is left as
//! typed.

use std::sync::Arc;

use nu_ansi_term::{Color, Style};
use reedline::{Highlighter, StyledText};

use super::shared_state::SharedState;
use crate::completion::{CallKeyDetector, CompletionEngine, lookup};

/// Highlighter marking known and unknown keys
pub struct KeyHighlighter {
    /// Finds closed key references, `None` when no key function is configured
    detector: Option<CallKeyDetector>,

    /// Supplies the namespaces in scope for each reference
    engine: Arc<CompletionEngine>,

    /// Shared state holding the tree snapshot
    state: SharedState,

    /// Paint anything at all
    enabled: bool,
}

impl KeyHighlighter {
    /// Create a new highlighter
    pub fn new(
        detector: Option<CallKeyDetector>,
        engine: Arc<CompletionEngine>,
        state: SharedState,
        enabled: bool,
    ) -> Self {
        Self {
            detector,
            engine,
            state,
            enabled,
        }
    }

    fn key_style(known: bool) -> Style {
        if known {
            Color::Green.normal()
        } else {
            Color::Red.underline()
        }
    }
}

impl Highlighter for KeyHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut styled = StyledText::new();

        let references = match (&self.detector, self.enabled) {
            (Some(detector), true) => detector.references(line),
            _ => Vec::new(),
        };

        let tree = self.state.snapshot();
        let mut last = 0;
        for reference in references {
            if reference.start < last {
                continue;
            }
            if reference.start > last {
                styled.push((Style::default(), line[last..reference.start].to_string()));
            }
            let namespaces = self.engine.namespaces_at(line, reference.start);
            let known = lookup(&reference.key, &namespaces, &tree).is_some();
            styled.push((Self::key_style(known), reference.key));
            last = reference.end;
        }

        if last < line.len() {
            styled.push((Style::default(), line[last..].to_string()));
        }

        styled
    }
}
