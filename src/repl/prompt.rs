//! Prompt showing the active namespaces

use std::borrow::Cow;

use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus};

/// Prompt for the key REPL, e.g. `i18n[common,error]> `
pub struct KeyPrompt {
    /// Namespaces set for the session
    namespaces: Vec<String>,
    /// Whether completion is active
    enabled: bool,
}

impl KeyPrompt {
    /// Create a new prompt
    ///
    /// # Arguments
    /// * `namespaces` - Namespaces set for the session
    /// * `enabled` - Whether completion is active
    pub fn new(namespaces: Vec<String>, enabled: bool) -> Self {
        Self {
            namespaces,
            enabled,
        }
    }
}

impl Prompt for KeyPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        let scope = if self.namespaces.is_empty() {
            String::new()
        } else {
            format!("[{}]", self.namespaces.join(","))
        };
        let state = if self.enabled { "" } else { " (off)" };
        format!("i18n{scope}{state}> ").into()
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        "".into()
    }

    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        "... ".into()
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };

        format!("({}reverse-search: {}) ", prefix, history_search.term).into()
    }
}
