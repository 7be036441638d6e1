use std::{fmt, io};

/// Crate-wide `Result` type using [`I18nError`] as the error.
///
/// Only the host layers (loading, configuration, the REPL) are fallible.
/// Key resolution itself never fails and returns plain values.
pub type Result<T> = std::result::Result<T, I18nError>;

/// Top-level error type for i18n-complete.
#[derive(Debug)]
pub enum I18nError {
    /// Locale loading errors.
    Load(LoadError),

    /// Configuration errors.
    Config(ConfigError),

    /// I/O errors.
    Io(io::Error),

    /// Line editor errors.
    Repl(String),

    /// Malformed REPL command.
    Command(String),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Errors raised while building the key tree from locale files.
#[derive(Debug)]
pub enum LoadError {
    /// Locale directory does not exist or is not a directory.
    DirectoryNotFound(String),

    /// JSON locale file failed to parse.
    InvalidJson { file: String, message: String },

    /// TOML locale file failed to parse.
    InvalidToml { file: String, message: String },

    /// A locale file whose top level is not a table of keys.
    UnsupportedValue { file: String, key: String },
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },

    /// Generic configuration error.
    Generic(String),
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            I18nError::Load(e) => write!(f, "Load error: {e}"),
            I18nError::Config(e) => write!(f, "Configuration error: {e}"),
            I18nError::Io(e) => write!(f, "I/O error: {e}"),
            I18nError::Repl(msg) => write!(f, "Line editor error: {msg}"),
            I18nError::Command(msg) => write!(f, "Invalid command: {msg}"),
            I18nError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::DirectoryNotFound(path) => {
                write!(f, "Locale directory not found: {path}")
            }
            LoadError::InvalidJson { file, message } => {
                write!(f, "Invalid JSON in {file}: {message}")
            }
            LoadError::InvalidToml { file, message } => {
                write!(f, "Invalid TOML in {file}: {message}")
            }
            LoadError::UnsupportedValue { file, key } => {
                write!(f, "Unsupported value for key '{key}' in {file}")
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
            ConfigError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for I18nError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            I18nError::Load(e) => Some(e),
            I18nError::Config(e) => Some(e),
            I18nError::Io(e) => Some(e),
            _ => None,
        }
    }
}
impl std::error::Error for LoadError {}
impl std::error::Error for ConfigError {}

/* ========================= Conversions to I18nError ========================= */

impl From<io::Error> for I18nError {
    fn from(err: io::Error) -> Self {
        I18nError::Io(err)
    }
}

impl From<LoadError> for I18nError {
    fn from(err: LoadError) -> Self {
        I18nError::Load(err)
    }
}

impl From<ConfigError> for I18nError {
    fn from(err: ConfigError) -> Self {
        I18nError::Config(err)
    }
}

impl From<String> for I18nError {
    fn from(msg: String) -> Self {
        I18nError::Generic(msg)
    }
}

impl From<&str> for I18nError {
    fn from(msg: &str) -> Self {
        I18nError::Generic(msg.to_owned())
    }
}

impl From<serde_json::Error> for I18nError {
    fn from(err: serde_json::Error) -> Self {
        I18nError::Generic(format!("JSON serialization error: {err}"))
    }
}

impl From<reedline::ReedlineError> for I18nError {
    fn from(err: reedline::ReedlineError) -> Self {
        I18nError::Repl(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_display() {
        let err = I18nError::from(LoadError::UnsupportedValue {
            file: "common.json".to_string(),
            key: "common.items".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Load error: Unsupported value for key 'common.items' in common.json"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = I18nError::from(ConfigError::InvalidValue {
            field: "locales.namespace_delimiter".to_string(),
            value: "a".to_string(),
        });
        assert!(err.to_string().starts_with("Configuration error:"));
        assert!(err.to_string().contains("namespace_delimiter"));
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error;

        let err = I18nError::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert!(err.source().is_some());
        assert!(I18nError::from("plain").source().is_none());
    }
}
