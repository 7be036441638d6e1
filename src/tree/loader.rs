//! Locale file loader
//!
//! Builds a [`KeyTree`] from a directory where every `*.json` or `*.toml`
//! file is one namespace named after its file stem. Nested objects become
//! branches and scalar values become leaves. Dotted object keys
//! (`"buttons.ok": "OK"`) are split into nested segments.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info, warn};

use super::node::KeyNode;
use super::split_key;
use super::store::KeyTree;
use crate::error::{LoadError, Result};

/// Supported locale file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleFormat {
    Json,
    Toml,
}

impl LocaleFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Loader for a directory of locale files
#[derive(Debug, Clone)]
pub struct LocaleLoader {
    /// Directory containing one file per namespace
    directory: PathBuf,
}

impl LocaleLoader {
    /// Create a loader for `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Directory this loader reads from
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Read every supported file and build a fresh tree.
    ///
    /// Files are processed in file-name order so that namespace order is
    /// stable across platforms. Unsupported files are skipped.
    pub fn load(&self) -> Result<KeyTree> {
        if !self.directory.is_dir() {
            return Err(LoadError::DirectoryNotFound(self.directory.display().to_string()).into());
        }

        let mut files: Vec<PathBuf> = fs::read_dir(&self.directory)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .collect();
        files.sort();

        let mut tree = KeyTree::new();
        for path in files {
            let Some(format) = LocaleFormat::from_path(&path) else {
                debug!("Skipping unsupported file {}", path.display());
                continue;
            };
            let Some(namespace) = path.file_stem().and_then(|s| s.to_str()) else {
                warn!("Skipping file with non UTF-8 name: {}", path.display());
                continue;
            };

            let content = fs::read_to_string(&path)?;
            if tree.node_by_key(namespace).is_some() {
                warn!("Namespace '{}' defined more than once, merging", namespace);
            }
            Self::load_str(&mut tree, namespace, format, &content, &path.display().to_string())?;
        }

        info!(
            "Loaded {} keys in {} namespaces from {}",
            tree.len(),
            tree.namespaces().len(),
            self.directory.display()
        );
        Ok(tree)
    }

    /// Parse `content` and attach it to `tree` as `namespace`.
    ///
    /// `origin` is only used in error messages.
    pub fn load_str(
        tree: &mut KeyTree,
        namespace: &str,
        format: LocaleFormat,
        content: &str,
        origin: &str,
    ) -> Result<()> {
        let value = match format {
            LocaleFormat::Json => {
                serde_json::from_str::<Value>(content).map_err(|e| LoadError::InvalidJson {
                    file: origin.to_string(),
                    message: e.to_string(),
                })?
            }
            LocaleFormat::Toml => {
                let table: toml::Table =
                    toml::from_str(content).map_err(|e| LoadError::InvalidToml {
                        file: origin.to_string(),
                        message: e.to_string(),
                    })?;
                serde_json::to_value(table).map_err(|e| LoadError::InvalidToml {
                    file: origin.to_string(),
                    message: e.to_string(),
                })?
            }
        };

        if !value.is_object() {
            return Err(LoadError::UnsupportedValue {
                file: origin.to_string(),
                key: namespace.to_string(),
            }
            .into());
        }

        let Some(node) = build_node(namespace, &value, origin, namespace) else {
            return Ok(());
        };
        debug!("Namespace '{}' loaded from {}", namespace, origin);
        tree.insert_namespace(namespace, node);
        Ok(())
    }
}

/// Arrays and nulls cannot be keys; they are skipped with a warning
fn build_node(keyname: &str, value: &Value, origin: &str, full_key: &str) -> Option<KeyNode> {
    match value {
        Value::String(s) => Some(KeyNode::leaf(keyname, s.clone())),
        Value::Number(n) => Some(KeyNode::leaf(keyname, n.to_string())),
        Value::Bool(b) => Some(KeyNode::leaf(keyname, b.to_string())),
        Value::Object(map) => {
            let mut node = KeyNode::tree(keyname);
            for (key, child) in map {
                let child_key = format!("{full_key}.{key}");
                let segments: Vec<&str> = split_key(key).collect();
                if let Some(child) = build_node("", child, origin, &child_key) {
                    node.insert(&segments, child);
                }
            }
            Some(node)
        }
        Value::Array(_) | Value::Null => {
            warn!("Skipping unsupported value for '{}' in {}", full_key, origin);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::I18nError;
    use std::fs;

    #[test]
    fn test_load_json_preserves_order() {
        let mut tree = KeyTree::new();
        LocaleLoader::load_str(
            &mut tree,
            "common",
            LocaleFormat::Json,
            r#"{"zeta": "Z", "alpha": "A", "nested": {"b": "B", "a": "A"}}"#,
            "common.json",
        )
        .unwrap();

        assert_eq!(
            tree.keys(),
            vec!["common.zeta", "common.alpha", "common.nested.b", "common.nested.a"]
        );
    }

    #[test]
    fn test_load_dotted_keys_are_nested() {
        let mut tree = KeyTree::new();
        LocaleLoader::load_str(
            &mut tree,
            "common",
            LocaleFormat::Json,
            r#"{"buttons.ok": "OK", "buttons": {"cancel": "Cancel"}}"#,
            "common.json",
        )
        .unwrap();

        let buttons = tree.node_by_key("common.buttons").unwrap();
        assert!(buttons.is_tree());
        assert_eq!(buttons.children().len(), 2);
        assert_eq!(tree.value_by_key("common.buttons.ok"), Some("OK"));
    }

    #[test]
    fn test_load_scalars_as_text() {
        let mut tree = KeyTree::new();
        LocaleLoader::load_str(
            &mut tree,
            "misc",
            LocaleFormat::Json,
            r#"{"count": 3, "flag": true}"#,
            "misc.json",
        )
        .unwrap();

        assert_eq!(tree.value_by_key("misc.count"), Some("3"));
        assert_eq!(tree.value_by_key("misc.flag"), Some("true"));
    }

    #[test]
    fn test_load_skips_arrays_and_nulls() {
        let mut tree = KeyTree::new();
        LocaleLoader::load_str(
            &mut tree,
            "misc",
            LocaleFormat::Json,
            r#"{"list": ["a", "b"], "ok": "OK", "nested": {"none": null, "yes": "Yes"}}"#,
            "misc.json",
        )
        .unwrap();

        assert_eq!(tree.keys(), vec!["misc.ok", "misc.nested.yes"]);
        assert!(tree.node_by_key("misc.list").is_none());
    }

    #[test]
    fn test_load_rejects_non_table_file() {
        let mut tree = KeyTree::new();
        let err =
            LocaleLoader::load_str(&mut tree, "misc", LocaleFormat::Json, r#"["a"]"#, "misc.json")
                .unwrap_err();

        match err {
            I18nError::Load(LoadError::UnsupportedValue { key, .. }) => assert_eq!(key, "misc"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_directory_survives_bad_value() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("common.json"), r#"{"ok": "OK", "tags": ["x"]}"#).unwrap();
        fs::write(dir.path().join("error.json"), r#"{"notFound": "Not Found"}"#).unwrap();

        let tree = LocaleLoader::new(dir.path()).load().unwrap();
        assert_eq!(tree.keys(), vec!["common.ok", "error.notFound"]);
    }

    #[test]
    fn test_load_invalid_json() {
        let mut tree = KeyTree::new();
        let err =
            LocaleLoader::load_str(&mut tree, "x", LocaleFormat::Json, "{", "x.json").unwrap_err();
        assert!(matches!(err, I18nError::Load(LoadError::InvalidJson { .. })));
    }

    #[test]
    fn test_load_toml() {
        let mut tree = KeyTree::new();
        LocaleLoader::load_str(
            &mut tree,
            "error",
            LocaleFormat::Toml,
            "notFound = \"Not Found\"\n\n[http]\nforbidden = \"Forbidden\"\n",
            "error.toml",
        )
        .unwrap();

        assert_eq!(tree.value_by_key("error.notFound"), Some("Not Found"));
        assert_eq!(tree.value_by_key("error.http.forbidden"), Some("Forbidden"));
    }

    #[test]
    fn test_load_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("error.json"), r#"{"notFound": "Not Found"}"#).unwrap();
        fs::write(
            dir.path().join("common.json"),
            r#"{"ok": "OK", "cancel": "Cancel"}"#,
        )
        .unwrap();
        fs::write(dir.path().join("README.md"), "ignored").unwrap();

        let tree = LocaleLoader::new(dir.path()).load().unwrap();

        assert_eq!(tree.namespaces(), vec!["common", "error"]);
        assert_eq!(
            tree.keys(),
            vec!["common.ok", "common.cancel", "error.notFound"]
        );
    }

    #[test]
    fn test_load_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocaleLoader::new(dir.path().join("missing"))
            .load()
            .unwrap_err();
        assert!(matches!(
            err,
            I18nError::Load(LoadError::DirectoryNotFound(_))
        ));
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(
            LocaleFormat::from_path(Path::new("a/common.JSON")),
            Some(LocaleFormat::Json)
        );
        assert_eq!(
            LocaleFormat::from_path(Path::new("common.toml")),
            Some(LocaleFormat::Toml)
        );
        assert_eq!(LocaleFormat::from_path(Path::new("common.yaml")), None);
    }
}
