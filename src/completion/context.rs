//! Key context definitions
//!
//! Classifies the raw key text under the cursor into the three cases the
//! resolver distinguishes.

use crate::tree::split_key;

/// What the resolver should do for a given raw key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyContext {
    /// Cursor is not inside a key reference
    None,

    /// Inside a key reference with nothing typed yet
    Listing,

    /// Partial or complete key path
    Path {
        /// Raw key as typed
        key: String,
        /// All segments but the last joined with `.`, absent when empty
        parent: Option<String>,
    },
}

impl KeyContext {
    /// Classify the raw key text
    pub fn from_raw(raw_key: Option<&str>) -> Self {
        match raw_key {
            None => Self::None,
            Some("") => Self::Listing,
            Some(key) => {
                let segments: Vec<&str> = split_key(key).collect();
                let parent = segments[..segments.len() - 1].join(".");
                Self::Path {
                    key: key.to_string(),
                    parent: (!parent.is_empty()).then_some(parent),
                }
            }
        }
    }

    /// Check if this is a None context
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_context() {
        assert!(KeyContext::from_raw(None).is_none());
    }

    #[test]
    fn test_listing_context() {
        assert_eq!(KeyContext::from_raw(Some("")), KeyContext::Listing);
    }

    #[test]
    fn test_single_segment_has_no_parent() {
        assert_eq!(
            KeyContext::from_raw(Some("common")),
            KeyContext::Path {
                key: "common".to_string(),
                parent: None,
            }
        );
    }

    #[test]
    fn test_trailing_delimiter_parent() {
        assert_eq!(
            KeyContext::from_raw(Some("common.")),
            KeyContext::Path {
                key: "common.".to_string(),
                parent: Some("common".to_string()),
            }
        );
    }

    #[test]
    fn test_colon_parent_is_dot_joined() {
        let KeyContext::Path { parent, .. } = KeyContext::from_raw(Some("common:buttons.o")) else {
            panic!("Expected Path context");
        };
        assert_eq!(parent.as_deref(), Some("common.buttons"));
    }
}
