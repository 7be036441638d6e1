//! Key detection
//!
//! Finds the partial key under the cursor, e.g. the `common.bu` in
//! `t('common.bu|`. Detection is text based: the cursor must sit inside a
//! string literal opened as the first argument of one of the configured
//! translation functions.

use regex::Regex;

/// A key reference found at the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedKey {
    /// Key text from the opening quote up to the cursor, possibly empty
    pub key: String,
    /// Byte offset where the key text starts
    pub start: usize,
}

/// A closed key reference such as `t('common.ok')`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyReference {
    /// Key text between the quotes
    pub key: String,
    /// Byte offset of the first key character
    pub start: usize,
    /// Byte offset one past the last key character
    pub end: usize,
}

/// Extracts the raw partial key at a cursor position
pub trait KeyDetector: Send + Sync {
    /// Return the key under `offset`, or `None` outside a key reference
    fn detect(&self, text: &str, offset: usize) -> Option<DetectedKey>;
}

/// Detector for calls such as `t('...')`, `$t("...")` or `i18n.t(`...`)`
#[derive(Debug, Clone)]
pub struct CallKeyDetector {
    /// Matches a key function call up to and including the opening quote
    call: Regex,
}

impl CallKeyDetector {
    /// Build a detector for the given function names.
    ///
    /// Returns `None` when `functions` is empty.
    pub fn new<S: AsRef<str>>(functions: &[S]) -> Option<Self> {
        if functions.is_empty() {
            return None;
        }

        let alternatives = functions
            .iter()
            .map(|f| regex::escape(f.as_ref().trim()))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r#"(?:^|[^\w$.])(?:{alternatives})\(\s*(['"`])"#);
        Regex::new(&pattern).ok().map(|call| Self { call })
    }

    /// Every key reference in `text` whose string literal is closed on the same line.
    ///
    /// References never overlap: a call spelled inside an earlier closed
    /// literal is part of that literal's key.
    pub fn references(&self, text: &str) -> Vec<KeyReference> {
        let mut references: Vec<KeyReference> = Vec::new();

        for captures in self.call.captures_iter(text) {
            let Some(quote) = captures.get(1) else {
                continue;
            };
            if references.last().is_some_and(|prev| quote.start() < prev.end) {
                continue;
            }
            let Some(quote_char) = quote.as_str().chars().next() else {
                continue;
            };

            let start = quote.end();
            let rest = &text[start..];
            if let Some(len) = rest.find([quote_char, '\n'])
                && rest[len..].starts_with(quote_char)
            {
                references.push(KeyReference {
                    key: rest[..len].to_string(),
                    start,
                    end: start + len,
                });
            }
        }

        references
    }
}

impl KeyDetector for CallKeyDetector {
    fn detect(&self, text: &str, offset: usize) -> Option<DetectedKey> {
        let offset = floor_char_boundary(text, offset);
        let before = &text[..offset];

        let captures = self.call.captures_iter(before).last()?;
        let quote = captures.get(1)?;
        let start = quote.end();
        let key = &before[start..];

        let quote_char = quote.as_str().chars().next()?;
        if key.contains(quote_char) || key.contains('\n') {
            return None;
        }

        Some(DetectedKey {
            key: key.to_string(),
            start,
        })
    }
}

fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> CallKeyDetector {
        CallKeyDetector::new(&["t", "$t", "i18n.t"]).unwrap()
    }

    #[test]
    fn test_detect_partial_key() {
        let line = "label = t('common.bu";
        let found = detector().detect(line, line.len()).unwrap();
        assert_eq!(found.key, "common.bu");
        assert_eq!(found.start, 11);
    }

    #[test]
    fn test_detect_empty_key() {
        let line = "{{ $t(\"";
        let found = detector().detect(line, line.len()).unwrap();
        assert_eq!(found.key, "");
        assert_eq!(found.start, line.len());
    }

    #[test]
    fn test_detect_cursor_inside_closed_string() {
        let line = "i18n.t(`error.notFound`)";
        let found = detector().detect(line, 13).unwrap();
        assert_eq!(found.key, "error");
    }

    #[test]
    fn test_no_key_after_closed_string() {
        let line = "t('common.ok') + ";
        assert_eq!(detector().detect(line, line.len()), None);
    }

    #[test]
    fn test_no_key_outside_call() {
        assert_eq!(detector().detect("let x = 'common.", 16), None);
    }

    #[test]
    fn test_identifier_suffix_is_not_a_call() {
        let line = "format('common.";
        assert_eq!(detector().detect(line, line.len()), None);
    }

    #[test]
    fn test_last_call_wins() {
        let line = "t('a.b') + t('c.";
        let found = detector().detect(line, line.len()).unwrap();
        assert_eq!(found.key, "c.");
    }

    #[test]
    fn test_offset_clamped_to_char_boundary() {
        let line = "t('ré";
        let found = detector().detect(line, line.len() - 1).unwrap();
        assert_eq!(found.key, "r");
    }

    #[test]
    fn test_references() {
        let line = "t('common.ok') + $t(\"error.notFound\") + t('open";
        let found = detector().references(line);

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].key, "common.ok");
        assert_eq!(&line[found[0].start..found[0].end], "common.ok");
        assert_eq!(found[1].key, "error.notFound");
    }

    #[test]
    fn test_references_skip_calls_inside_literal() {
        let line = r#"t("a t('b') c") + t('d')"#;
        let found = detector().references(line);

        let keys: Vec<&str> = found.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["a t('b') c", "d"]);
        assert!(found.windows(2).all(|pair| pair[0].end <= pair[1].start));
    }

    #[test]
    fn test_references_stop_at_newline() {
        assert!(detector().references("t('common\n.ok')").is_empty());
    }

    #[test]
    fn test_no_functions() {
        let none: [&str; 0] = [];
        assert!(CallKeyDetector::new(&none).is_none());
    }
}
