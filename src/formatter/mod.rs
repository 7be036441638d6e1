//! Output formatting for completion results and key listings
//!
//! This module renders what the CLI and REPL print:
//! - Plain aligned lines for terminals
//! - JSON (compact and pretty-printed) for tooling
//! - Tables via `tabled`

mod json;
mod table;

use nu_ansi_term::{Color, Style};
use serde::Serialize;

use crate::completion::{CandidateKind, CompletionCandidate};
use crate::config::OutputFormat;
use crate::error::Result;
use crate::utils::string::single_line;

pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Marker printed for keys that do not resolve to a value
const MISSING_MARKER: &str = "(missing)";

/// A fully-qualified key and its value, if it has one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyEntry {
    pub key: String,
    pub value: Option<String>,
}

impl KeyEntry {
    /// Entry for a key that resolved to a value
    pub fn found(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// Entry for a key with no value in the tree
    pub fn missing(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }
}

/// Main formatter for command output
pub struct Formatter {
    /// Output format type
    format_type: OutputFormat,

    /// Enable colored output
    use_colors: bool,
}

impl Formatter {
    /// Create a new formatter
    ///
    /// # Arguments
    /// * `format_type` - Output format type
    /// * `use_colors` - Enable colored output
    pub fn new(format_type: OutputFormat, use_colors: bool) -> Self {
        Self {
            format_type,
            use_colors,
        }
    }

    /// Configured output format
    pub fn format_type(&self) -> OutputFormat {
        self.format_type
    }

    /// Format completion candidates according to the configured format
    pub fn format_candidates(&self, candidates: &[CompletionCandidate]) -> Result<String> {
        match self.format_type {
            OutputFormat::Plain => Ok(self.plain_candidates(candidates)),
            OutputFormat::Json => JsonFormatter::new(false, self.use_colors).format(candidates),
            OutputFormat::JsonPretty => {
                JsonFormatter::new(true, self.use_colors).format(candidates)
            }
            OutputFormat::Table => {
                Ok(TableFormatter::with_colors(self.use_colors).format_candidates(candidates))
            }
        }
    }

    /// Format key/value entries according to the configured format
    pub fn format_entries(&self, entries: &[KeyEntry]) -> Result<String> {
        match self.format_type {
            OutputFormat::Plain => Ok(self.plain_entries(entries)),
            OutputFormat::Json => JsonFormatter::new(false, self.use_colors).format(entries),
            OutputFormat::JsonPretty => JsonFormatter::new(true, self.use_colors).format(entries),
            OutputFormat::Table => {
                Ok(TableFormatter::with_colors(self.use_colors).format_entries(entries))
            }
        }
    }

    /// One candidate per line, branches marked with `...`
    fn plain_candidates(&self, candidates: &[CompletionCandidate]) -> String {
        if candidates.is_empty() {
            return "(no candidates)".to_string();
        }

        let width = candidates
            .iter()
            .map(|c| c.label.chars().count())
            .max()
            .unwrap_or(0);

        candidates
            .iter()
            .map(|candidate| {
                let label = format!("{:<width$}", candidate.label);
                let label = match candidate.kind {
                    CandidateKind::Branch => self.paint(Color::Cyan.bold(), &label),
                    CandidateKind::Leaf => label,
                };
                let line = match &candidate.detail {
                    Some(detail) => format!("{label}  {}", single_line(detail)),
                    None => format!("{label}  {}", self.paint(Style::new().dimmed(), "...")),
                };
                line.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `key = value` lines
    fn plain_entries(&self, entries: &[KeyEntry]) -> String {
        if entries.is_empty() {
            return "(no keys)".to_string();
        }

        entries
            .iter()
            .map(|entry| match &entry.value {
                Some(value) => format!("{} = {}", entry.key, single_line(value)),
                None => format!(
                    "{} {}",
                    entry.key,
                    self.paint(Color::Red.normal(), MISSING_MARKER)
                ),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.use_colors {
            style.paint(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(OutputFormat::Plain, false)
    }
}
