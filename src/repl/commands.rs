//! REPL command parsing and execution
//!
//! Lines starting with `:` are meta commands:
//! - `:ns [a b ...]` sets the session namespaces (none clears them)
//! - `:reload` reloads the locale directory
//! - `:enable` / `:disable` toggle completion
//! - `:keys` lists every key with its value
//! - `:format <plain|json|json-pretty|table>` switches the output format
//! - `:help`, `:quit`
//!
//! Any other line is evaluated against the current key tree.

use std::sync::Arc;

use tracing::info;

use super::shared_state::SharedState;
use crate::completion::{CallKeyDetector, CompletionEngine, lookup};
use crate::config::OutputFormat;
use crate::error::{I18nError, Result};
use crate::formatter::{Formatter, KeyEntry};
use crate::tree::LocaleLoader;

const HELP: &str = "\
Type a key call such as t('common. and press Tab to complete.
Enter evaluates the line: closed key calls are looked up, anything else is
treated as a raw key.

  :ns [a b ...]    set the active namespaces (no arguments clears them)
  :reload          reload the locale directory
  :enable          turn completion on
  :disable         turn completion off
  :keys            list every key with its value
  :format FORMAT   plain, json, json-pretty or table
  :help            show this help
  :quit            leave the REPL";

/// A parsed REPL line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Replace the session namespaces
    Namespaces(Vec<String>),
    /// Reload the locale directory
    Reload,
    /// Turn completion on
    Enable,
    /// Turn completion off
    Disable,
    /// List every key
    Keys,
    /// Switch output format
    Format(OutputFormat),
    /// Show help
    Help,
    /// Leave the REPL
    Quit,
    /// Evaluate source text or a raw key
    Evaluate(String),
}

impl ReplCommand {
    /// Parse a non-empty input line
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();

        let Some(meta) = trimmed.strip_prefix(':') else {
            return Ok(ReplCommand::Evaluate(trimmed.to_string()));
        };

        let mut words = meta.split_whitespace();
        let name = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        let command = match (name, args.as_slice()) {
            ("ns" | "namespace" | "namespaces", namespaces) => {
                ReplCommand::Namespaces(namespaces.iter().map(|ns| ns.to_string()).collect())
            }
            ("reload", []) => ReplCommand::Reload,
            ("enable", []) => ReplCommand::Enable,
            ("disable", []) => ReplCommand::Disable,
            ("keys", []) => ReplCommand::Keys,
            ("format", [format]) => match OutputFormat::parse(format) {
                Some(format) => ReplCommand::Format(format),
                None => {
                    return Err(I18nError::Command(format!("unknown format '{format}'")));
                }
            },
            ("help" | "h" | "?", []) => ReplCommand::Help,
            ("quit" | "q" | "exit", []) => ReplCommand::Quit,
            _ => return Err(I18nError::Command(format!("unknown command '{trimmed}'"))),
        };

        Ok(command)
    }
}

/// Result of running a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Print this text
    Output(String),
    /// Leave the loop
    Exit,
}

/// Runs parsed commands against the shared state
pub struct CommandHandler {
    /// Shared state with the tree snapshot and toggles
    state: SharedState,

    /// Completion engine used for raw key evaluation
    engine: Arc<CompletionEngine>,

    /// Finds closed key calls in evaluated lines
    detector: Option<CallKeyDetector>,

    /// Source of fresh trees for `:reload`
    loader: LocaleLoader,
}

impl CommandHandler {
    /// Create a new command handler
    pub fn new(
        state: SharedState,
        engine: Arc<CompletionEngine>,
        detector: Option<CallKeyDetector>,
        loader: LocaleLoader,
    ) -> Self {
        Self {
            state,
            engine,
            detector,
            loader,
        }
    }

    /// Parse and run one input line
    pub fn handle_line(&self, line: &str) -> Result<CommandOutcome> {
        self.execute(ReplCommand::parse(line)?)
    }

    /// Run a parsed command
    pub fn execute(&self, command: ReplCommand) -> Result<CommandOutcome> {
        let output = match command {
            ReplCommand::Namespaces(namespaces) => {
                let message = if namespaces.is_empty() {
                    "Namespaces cleared".to_string()
                } else {
                    format!("Namespaces: {}", namespaces.join(", "))
                };
                self.state.set_namespaces(namespaces);
                message
            }
            ReplCommand::Reload => self.reload()?,
            ReplCommand::Enable => {
                self.state.activate();
                info!("Completion enabled");
                "Completion enabled".to_string()
            }
            ReplCommand::Disable => {
                self.state.deactivate();
                info!("Completion disabled");
                "Completion disabled".to_string()
            }
            ReplCommand::Keys => {
                let tree = self.state.snapshot();
                let entries: Vec<KeyEntry> = tree
                    .leaves()
                    .into_iter()
                    .map(|(key, value)| KeyEntry::found(key, value))
                    .collect();
                self.formatter().format_entries(&entries)?
            }
            ReplCommand::Format(format) => {
                self.state.set_format(format);
                format!("Output format: {format:?}")
            }
            ReplCommand::Help => HELP.to_string(),
            ReplCommand::Quit => return Ok(CommandOutcome::Exit),
            ReplCommand::Evaluate(text) => self.evaluate(&text)?,
        };

        Ok(CommandOutcome::Output(output))
    }

    /// Swap in a freshly loaded tree; the old one stays on failure
    fn reload(&self) -> Result<String> {
        let tree = self.loader.load()?;
        let count = tree.len();
        self.state.replace_tree(tree);

        info!(
            "Reloaded {} keys from {}",
            count,
            self.loader.directory().display()
        );
        Ok(format!(
            "Reloaded {} keys from {}",
            count,
            self.loader.directory().display()
        ))
    }

    /// Look up closed key calls, or treat the line as a raw key
    fn evaluate(&self, text: &str) -> Result<String> {
        let tree = self.state.snapshot();

        let references = self
            .detector
            .as_ref()
            .map(|detector| detector.references(text))
            .unwrap_or_default();

        if !references.is_empty() {
            let entries: Vec<KeyEntry> = references
                .iter()
                .map(|reference| {
                    let namespaces = self.engine.namespaces_at(text, reference.start);
                    match lookup(&reference.key, &namespaces, &tree) {
                        Some((key, value)) => KeyEntry::found(key, value),
                        None => KeyEntry::missing(reference.key.as_str()),
                    }
                })
                .collect();
            return self.formatter().format_entries(&entries);
        }

        let namespaces = self.state.get_namespaces();
        if let Some((key, value)) = lookup(text, &namespaces, &tree) {
            return self.formatter().format_entries(&[KeyEntry::found(key, value)]);
        }

        if !self.state.is_enabled() {
            return Ok("Completion is disabled (use :enable)".to_string());
        }

        let candidates = self
            .engine
            .complete_key(true, &tree, Some(text), &namespaces);
        self.formatter().format_candidates(&candidates)
    }

    fn formatter(&self) -> Formatter {
        Formatter::new(self.state.get_format(), self.state.get_color_enabled())
    }
}
