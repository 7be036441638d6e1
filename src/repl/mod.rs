//! Interactive REPL for exploring and completing localization keys
//!
//! This module wires the completion engine into a `reedline` line editor:
//! - Tab and trigger-character completion of key segments
//! - Inline hints showing the value of the key being typed
//! - Highlighting of known and unknown key references
//! - Meta commands for namespaces, reloading and toggles

mod commands;
mod completer;
mod engine;
mod highlighter;
mod hinter;
mod prompt;
mod shared_state;

pub use commands::{CommandHandler, CommandOutcome, ReplCommand};
pub use completer::KeyCompleter;
pub use engine::ReplEngine;
pub use highlighter::KeyHighlighter;
pub use hinter::KeyHinter;
pub use prompt::KeyPrompt;
pub use shared_state::SharedState;

#[cfg(test)]
mod tests;
