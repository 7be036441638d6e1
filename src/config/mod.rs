//! Configuration management for i18n-complete
//!
//! Configuration is read from a TOML file and then overridden by
//! command-line arguments.
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line arguments
//! 2. Configuration file
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Locale source configuration
    #[serde(default)]
    pub locales: LocalesConfig,

    /// Completion behaviour
    #[serde(default)]
    pub completion: CompletionConfig,

    /// Display configuration
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where locale files live and how namespaces are written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalesConfig {
    /// Directory with one locale file per namespace
    #[serde(default = "default_locales_directory")]
    pub directory: PathBuf,

    /// Separator between a namespace and the rest of a key
    #[serde(default = "default_namespace_delimiter")]
    pub namespace_delimiter: char,
}

/// Completion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Whether the completion provider runs at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Characters that re-trigger completion when typed
    #[serde(default = "default_trigger_characters")]
    pub trigger_characters: Vec<char>,

    /// Function names whose first string argument is a key (`t`, `$t`, ...)
    #[serde(default = "default_key_functions")]
    pub key_functions: Vec<String>,

    /// Namespaces always in scope
    #[serde(default)]
    pub namespaces: Vec<String>,
}

/// Display and output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Output format (plain, json, json-pretty, table)
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Enable colored output
    #[serde(default = "default_color_output")]
    pub color_output: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One candidate per line, label then detail
    Plain,

    /// Compact JSON array
    Json,

    /// Pretty-printed JSON array
    JsonPretty,

    /// ASCII table with label, kind and detail columns
    Table,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Enable timestamps in logs
    #[serde(default = "default_log_timestamps")]
    pub timestamps: bool,
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

// Default value functions
fn default_locales_directory() -> PathBuf {
    PathBuf::from("locales")
}

fn default_namespace_delimiter() -> char {
    '.'
}

fn default_enabled() -> bool {
    true
}

fn default_trigger_characters() -> Vec<char> {
    vec!['.', '\'', '"', '`', ':']
}

fn default_key_functions() -> Vec<String> {
    vec!["t".to_string(), "$t".to_string(), "i18n.t".to_string()]
}

fn default_format() -> OutputFormat {
    OutputFormat::Plain
}

fn default_color_output() -> bool {
    true
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_log_timestamps() -> bool {
    false
}

impl Default for LocalesConfig {
    fn default() -> Self {
        Self {
            directory: default_locales_directory(),
            namespace_delimiter: default_namespace_delimiter(),
        }
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            trigger_characters: default_trigger_characters(),
            key_functions: default_key_functions(),
            namespaces: Vec::new(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            color_output: default_color_output(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            timestamps: default_log_timestamps(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file (TOML format)
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::FileNotFound(path.display().to_string()).into());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConfigError::InvalidFormat(e.to_string()).into())
    }

    /// Load configuration from an explicit path or the default location.
    ///
    /// An explicit path must exist. When no path is given and the default
    /// file is missing, defaults are used.
    pub fn load_from_file(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Self::default_path();
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Get the default configuration file path
    ///
    /// # Returns
    /// * `PathBuf` - Path to default configuration file
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".i18n-complete")
            .join("config.toml")
    }

    /// Serialize the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Generic(e.to_string()).into())
    }

    /// Validate the configuration
    ///
    /// # Returns
    /// * `Result<()>` - Ok if valid, error otherwise
    pub fn validate(&self) -> Result<()> {
        let delimiter = self.locales.namespace_delimiter;
        if delimiter.is_alphanumeric() || delimiter.is_whitespace() {
            return Err(ConfigError::InvalidValue {
                field: "locales.namespace_delimiter".to_string(),
                value: delimiter.to_string(),
            }
            .into());
        }

        if let Some(ch) = self
            .completion
            .trigger_characters
            .iter()
            .find(|c| c.is_alphanumeric())
        {
            return Err(ConfigError::InvalidValue {
                field: "completion.trigger_characters".to_string(),
                value: ch.to_string(),
            }
            .into());
        }

        if let Some(name) = self
            .completion
            .key_functions
            .iter()
            .find(|name| name.trim().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: "completion.key_functions".to_string(),
                value: name.clone(),
            }
            .into());
        }

        Ok(())
    }
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

impl OutputFormat {
    /// Check if format is JSON-based
    pub fn is_json(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::JsonPretty)
    }

    /// Parse a format name as accepted on the command line
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "plain" => Some(Self::Plain),
            "json" => Some(Self::Json),
            "json-pretty" | "pretty" => Some(Self::JsonPretty),
            "table" => Some(Self::Table),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::I18nError;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.locales.namespace_delimiter, '.');
        assert!(config.completion.enabled);
        assert_eq!(
            config.completion.trigger_characters,
            vec!['.', '\'', '"', '`', ':']
        );
        assert_eq!(config.display.format, OutputFormat::Plain);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = Config::from_toml_str(
            r#"
            [locales]
            directory = "i18n"

            [completion]
            namespaces = ["common"]
            "#,
        )
        .unwrap();

        assert_eq!(config.locales.directory, PathBuf::from("i18n"));
        assert_eq!(config.locales.namespace_delimiter, '.');
        assert_eq!(config.completion.namespaces, vec!["common".to_string()]);
        assert_eq!(config.completion.key_functions.len(), 3);
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_output_format_kebab_case() {
        let config = Config::from_toml_str("[display]\nformat = \"json-pretty\"\n").unwrap();
        assert_eq!(config.display.format, OutputFormat::JsonPretty);
        assert!(config.display.format.is_json());
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml_str("[locales\n").unwrap_err();
        assert!(matches!(err, I18nError::Config(ConfigError::InvalidFormat(_))));
    }

    #[test]
    fn test_validate_rejects_alphanumeric_delimiter() {
        let mut config = Config::default();
        config.locales.namespace_delimiter = 'x';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_key_function() {
        let mut config = Config::default();
        config.completion.key_functions.push("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = Config::default();
        config.completion.namespaces = vec!["common".to_string()];
        let text = config.to_toml_string().unwrap();
        let parsed = Config::from_toml_str(&text).unwrap();
        assert_eq!(parsed.completion.namespaces, config.completion.namespaces);
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = Config::load_from_file(Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, I18nError::Config(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(OutputFormat::parse("TABLE"), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::parse("pretty"), Some(OutputFormat::JsonPretty));
        assert_eq!(OutputFormat::parse("xml"), None);
    }
}
