//! Table formatting using tabled
//!
//! Candidates render as `label | kind | value` rows, key entries as
//! `key | value` rows. Long values wrap instead of being truncated.

use tabled::{
    Table,
    builder::Builder,
    settings::{Alignment, Color, Modify, Style, object::Columns, object::Rows, width::Width},
};

use super::{KeyEntry, MISSING_MARKER};
use crate::completion::{CandidateKind, CompletionCandidate};

/// Maximum width for a single column (characters)
const DEFAULT_MAX_COLUMN_WIDTH: usize = 60;

/// Table formatter for candidates and key listings
pub struct TableFormatter {
    /// Maximum column width
    max_column_width: usize,

    /// Enable colored output
    use_colors: bool,
}

impl TableFormatter {
    /// Create a new table formatter with default settings
    pub fn new() -> Self {
        Self::with_colors(false)
    }

    /// Create a new table formatter with color support
    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            max_column_width: DEFAULT_MAX_COLUMN_WIDTH,
            use_colors,
        }
    }

    /// Set maximum column width
    pub fn with_max_column_width(mut self, width: usize) -> Self {
        self.max_column_width = width;
        self
    }

    /// Format completion candidates as a table
    pub fn format_candidates(&self, candidates: &[CompletionCandidate]) -> String {
        if candidates.is_empty() {
            return "(no candidates)".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(["label", "kind", "value"].map(String::from));
        for candidate in candidates {
            let kind = match candidate.kind {
                CandidateKind::Branch => "branch",
                CandidateKind::Leaf => "leaf",
            };
            builder.push_record([
                candidate.label.clone(),
                kind.to_string(),
                candidate.detail.clone().unwrap_or_default(),
            ]);
        }

        self.finish(builder.build(), 3)
    }

    /// Format key entries as a table
    pub fn format_entries(&self, entries: &[KeyEntry]) -> String {
        if entries.is_empty() {
            return "(no keys)".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(["key", "value"].map(String::from));
        for entry in entries {
            builder.push_record([
                entry.key.clone(),
                entry
                    .value
                    .clone()
                    .unwrap_or_else(|| MISSING_MARKER.to_string()),
            ]);
        }

        self.finish(builder.build(), 2)
    }

    fn finish(&self, mut table: Table, columns: usize) -> String {
        table.with(Style::modern());

        for i in 0..columns {
            table.with(Modify::new(Columns::new(i..=i)).with(Width::wrap(self.max_column_width)));
        }

        table.with(Modify::new(Rows::first()).with(Alignment::center()));

        if self.use_colors {
            table.modify(Rows::first(), Color::FG_CYAN | Color::BOLD);
        }

        table.to_string()
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::KeyNode;

    #[test]
    fn test_candidate_table() {
        let candidates = vec![
            CompletionCandidate::from_child(&KeyNode::leaf("ok", "OK")),
            CompletionCandidate::from_child(&KeyNode::tree("buttons")),
        ];
        let output = TableFormatter::new().format_candidates(&candidates);

        assert!(output.contains("label"));
        assert!(output.contains("ok"));
        assert!(output.contains("OK"));
        assert!(output.contains("branch"));
        assert_eq!(output.lines().count(), 7);
    }

    #[test]
    fn test_entry_table_marks_missing() {
        let output = TableFormatter::new().format_entries(&[KeyEntry::missing("common.nope")]);
        assert!(output.contains("common.nope"));
        assert!(output.contains(MISSING_MARKER));
    }

    #[test]
    fn test_long_values_wrap() {
        let entries = vec![KeyEntry::found("legal.notice", "word ".repeat(30))];
        let output = TableFormatter::new()
            .with_max_column_width(20)
            .format_entries(&entries);
        assert!(output.lines().count() > 5);
        assert!(output.lines().all(|line| line.chars().count() < 60));
    }

    #[test]
    fn test_empty() {
        assert_eq!(TableFormatter::new().format_entries(&[]), "(no keys)");
    }
}
