//! Hinter for reedline - shows the value of the key under the cursor

use std::sync::Arc;

use nu_ansi_term::{Color, Style};
use reedline::{Hinter, History};

use super::shared_state::SharedState;
use crate::completion::CompletionEngine;
use crate::utils::string::{single_line, truncate};

/// Longest value shown inline, in characters
const MAX_HINT_CHARS: usize = 60;

/// Inline value hinter for reedline.
///
/// The hint is informational only: accepting it inserts nothing, since the
/// value is not part of the key.
pub struct KeyHinter {
    /// Completion engine used to find and resolve the key
    engine: Arc<CompletionEngine>,

    /// Shared state holding the enable flag and tree snapshot
    state: SharedState,

    /// Style for hints
    style: Style,
}

impl KeyHinter {
    /// Create a new hinter with the default style
    pub fn new(engine: Arc<CompletionEngine>, state: SharedState) -> Self {
        Self {
            engine,
            state,
            style: Style::new().italic().fg(Color::DarkGray),
        }
    }
}

impl Hinter for KeyHinter {
    fn handle(
        &mut self,
        line: &str,
        pos: usize,
        _history: &dyn History,
        use_ansi_coloring: bool,
        _cwd: &str,
    ) -> String {
        // Only hint when typing at the end of the line
        if pos != line.len() {
            return String::new();
        }

        let tree = self.state.snapshot();
        let Some((_, value)) = self
            .engine
            .value_at(self.state.is_enabled(), &tree, line, pos)
        else {
            return String::new();
        };

        let hint = format!("  = {}", truncate(&single_line(&value), MAX_HINT_CHARS));
        if use_ansi_coloring {
            self.style.paint(hint).to_string()
        } else {
            hint
        }
    }

    fn complete_hint(&self) -> String {
        String::new()
    }

    fn next_hint_token(&self) -> String {
        String::new()
    }
}
