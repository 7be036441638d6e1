//! Utility functions and helpers
//!
//! - Namespace prefix ejection for display labels
//! - String truncation for table and hint output
//! - Path helpers for configuration values

pub mod namespace;

pub use namespace::{Ejected, eject};

/// String utilities
pub mod string {
    /// Truncate string to at most `max_chars` characters
    ///
    /// # Arguments
    /// * `s` - String to truncate
    /// * `max_chars` - Maximum length in characters
    ///
    /// # Returns
    /// * `String` - Truncated string with ellipsis if needed
    pub fn truncate(s: &str, max_chars: usize) -> String {
        if s.chars().count() <= max_chars {
            return s.to_string();
        }
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }

    /// Collapse line breaks so a value fits on one line
    pub fn single_line(s: &str) -> String {
        s.split(['\n', '\r'])
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// File system utilities
pub mod fs {
    use std::path::{Path, PathBuf};

    /// Expand home directory in path
    ///
    /// # Arguments
    /// * `path` - Path potentially starting with ~
    ///
    /// # Returns
    /// * `PathBuf` - Expanded path
    pub fn expand_home(path: &Path) -> PathBuf {
        if let Ok(rest) = path.strip_prefix("~")
            && let Some(home) = dirs::home_dir()
        {
            return home.join(rest);
        }
        path.to_path_buf()
    }
}
