//! JSON formatting for candidates and key entries

use colored_json::prelude::*;
use serde::Serialize;

use crate::error::Result;

/// JSON formatter with pretty printing support
pub struct JsonFormatter {
    /// Enable pretty printing
    pretty: bool,

    /// Enable colored output
    use_colors: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    ///
    /// # Arguments
    /// * `pretty` - Enable pretty printing
    /// * `use_colors` - Enable colored output, only honoured when pretty printing
    pub fn new(pretty: bool, use_colors: bool) -> Self {
        Self { pretty, use_colors }
    }

    /// Serialize any value as JSON
    pub fn format<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        if !self.pretty {
            return Ok(serde_json::to_string(value)?);
        }

        let json_str = serde_json::to_string_pretty(value)?;
        if self.use_colors {
            Ok(json_str.to_colored_json_auto().unwrap_or(json_str))
        } else {
            Ok(json_str)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::KeyEntry;

    #[test]
    fn test_compact_is_single_line() {
        let output = JsonFormatter::new(false, true)
            .format(&[KeyEntry::found("common.ok", "OK")])
            .unwrap();
        assert_eq!(output, r#"[{"key":"common.ok","value":"OK"}]"#);
    }

    #[test]
    fn test_pretty_without_colors() {
        let output = JsonFormatter::new(true, false)
            .format(&KeyEntry::found("common.ok", "OK"))
            .unwrap();
        assert_eq!(output, "{\n  \"key\": \"common.ok\",\n  \"value\": \"OK\"\n}");
    }
}
