//! Namespace prefix ejection
//!
//! Turns `common.ok` into `ok` when `common` is the active namespace, so that
//! listings inside a single-namespace scope show short keys.

/// Display form of a key after namespace ejection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ejected<'a> {
    /// Key with the namespace prefix removed, or the full key
    pub display_key: &'a str,
    /// Namespace that was stripped, if any
    pub namespace: Option<&'a str>,
}

/// Strip the namespace prefix from `full_key` when it is unambiguous.
///
/// The top-level segment is everything before the first `delimiter`. When it
/// names one of `namespaces`, the prefix and the delimiter are removed.
/// Otherwise, or when the key has no delimiter at all, the key is returned
/// unchanged.
pub fn eject<'a, S: AsRef<str>>(namespaces: &[S], full_key: &'a str, delimiter: char) -> Ejected<'a> {
    let unchanged = Ejected {
        display_key: full_key,
        namespace: None,
    };

    let Some((top, rest)) = full_key.split_once(delimiter) else {
        return unchanged;
    };

    if namespaces.iter().any(|ns| ns.as_ref() == top) {
        Ejected {
            display_key: rest,
            namespace: Some(top),
        }
    } else {
        unchanged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eject_active_namespace() {
        let ejected = eject(&["common"], "common.ok", '.');
        assert_eq!(ejected.display_key, "ok");
        assert_eq!(ejected.namespace, Some("common"));
    }

    #[test]
    fn test_eject_keeps_nested_path() {
        let ejected = eject(&["common"], "common.buttons.ok", '.');
        assert_eq!(ejected.display_key, "buttons.ok");
    }

    #[test]
    fn test_eject_inactive_namespace_unchanged() {
        let ejected = eject(&["error"], "common.ok", '.');
        assert_eq!(ejected.display_key, "common.ok");
        assert_eq!(ejected.namespace, None);
    }

    #[test]
    fn test_eject_colon_delimiter() {
        let ejected = eject(&["common".to_string()], "common:buttons.ok", ':');
        assert_eq!(ejected.display_key, "buttons.ok");
    }

    #[test]
    fn test_eject_bare_namespace_unchanged() {
        let ejected = eject(&["common"], "common", '.');
        assert_eq!(ejected.display_key, "common");
        assert_eq!(ejected.namespace, None);
    }

    #[test]
    fn test_eject_empty_scope() {
        let none: [&str; 0] = [];
        assert_eq!(eject(&none, "common.ok", '.').display_key, "common.ok");
    }
}
