//! Command-line interface for i18n-complete
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and validation
//! - One-shot subcommands (complete, keys, completion, config)
//! - Construction of the key tree and completion engine for every mode

mod completion;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use crate::completion::{
    ChainedScope, CompletionEngine, ScopeProvider, StaticScope, UseTranslationScope,
};
use crate::config::{Config, LogLevel, OutputFormat};
use crate::error::Result;
use crate::formatter::{Formatter, KeyEntry};
use crate::tree::{KeyTree, LocaleLoader};
use crate::utils::fs::expand_home;

pub use completion::generate_completion;

/// Namespace-aware autocomplete for localization keys
#[derive(Parser, Debug)]
#[command(
    name = "i18n-complete",
    version,
    about = "Autocomplete hierarchical localization keys",
    long_about = "Loads a directory of locale files (one JSON or TOML file per namespace) and
completes partial keys such as `common.bu` against it, from the command line or
an interactive REPL."
)]
pub struct CliArgs {
    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Locale directory, one file per namespace
    #[arg(short = 'l', long = "locales", value_name = "DIR")]
    pub locales: Option<PathBuf>,

    /// Active namespace (repeatable or comma separated)
    #[arg(short = 'n', long = "ns", value_name = "NAMESPACE", value_delimiter = ',')]
    pub namespaces: Vec<String>,

    /// Output format (plain, json, json-pretty, table)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Quiet mode (errors only)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose mode (trace logging)
    #[arg(long = "vv")]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for i18n-complete
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Complete a single key and print the candidates
    Complete {
        /// Raw key to resolve directly (use "" for the flat listing)
        #[arg(long, value_name = "RAW", conflicts_with = "line")]
        key: Option<String>,

        /// Source line to detect the key in
        #[arg(long, value_name = "TEXT")]
        line: Option<String>,

        /// Cursor byte offset in --line (defaults to the end)
        #[arg(long, value_name = "N", requires = "line")]
        cursor: Option<usize>,
    },

    /// List every key with its value
    Keys {
        /// Print namespace names only
        #[arg(long)]
        namespaces: bool,
    },

    /// Start the interactive REPL (default)
    Repl,

    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish)
        #[arg(value_name = "SHELL")]
        shell: String,
    },

    /// Show configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface from the process arguments
    pub fn new() -> Result<Self> {
        Self::from_args(CliArgs::parse())
    }

    /// Create a CLI interface from already parsed arguments
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let config = Self::load_config(&args)?;
        Ok(Self { args, config })
    }

    /// Load configuration from file and merge with arguments
    fn load_config(args: &CliArgs) -> Result<Config> {
        let mut config = Config::load_from_file(args.config_file.as_deref())?;

        if let Err(e) = config.validate() {
            eprintln!("Warning: Configuration validation failed: {}", e);
            eprintln!("Using default configuration instead.");
            config = Config::default();
        }

        Self::apply_args_to_config(&mut config, args);

        Ok(config)
    }

    /// Get the effective configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the CLI arguments
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Apply CLI arguments to configuration
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) {
        Self::apply_locale_args(config, args);
        Self::apply_display_args(config, args);
        Self::apply_logging_args(config, args);
    }

    /// Apply locale and scope arguments
    fn apply_locale_args(config: &mut Config, args: &CliArgs) {
        if let Some(dir) = &args.locales {
            config.locales.directory = dir.clone();
        }

        let namespaces: Vec<String> = args
            .namespaces
            .iter()
            .map(|ns| ns.trim().to_string())
            .filter(|ns| !ns.is_empty())
            .collect();
        if !namespaces.is_empty() {
            config.completion.namespaces = namespaces;
        }
    }

    /// Apply display-related CLI arguments to configuration
    fn apply_display_args(config: &mut Config, args: &CliArgs) {
        if let Some(format_str) = &args.format {
            match OutputFormat::parse(format_str) {
                Some(format) => config.display.format = format,
                None => eprintln!("Warning: Unknown format '{}', using default", format_str),
            }
        }

        if args.no_color {
            config.display.color_output = false;
        }
    }

    /// Apply logging-related CLI arguments to configuration
    fn apply_logging_args(config: &mut Config, args: &CliArgs) {
        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else if args.quiet {
            LogLevel::Error
        } else {
            config.logging.level
        };
    }

    /// Loader for the configured locale directory
    pub fn loader(&self) -> LocaleLoader {
        LocaleLoader::new(expand_home(&self.config.locales.directory))
    }

    /// Load the key tree from the configured locale directory
    pub fn load_tree(&self) -> Result<KeyTree> {
        self.loader().load()
    }

    /// Build a completion engine around `scope`
    pub fn build_engine(&self, scope: Arc<dyn ScopeProvider>) -> CompletionEngine {
        CompletionEngine::from_config(&self.config.completion, &self.config.locales, scope)
    }

    /// Scope for one-shot commands: configured namespaces, then declarations in the text
    fn static_scope(&self) -> ChainedScope {
        ChainedScope::new()
            .with(StaticScope::new(self.config.completion.namespaces.clone()))
            .with(UseTranslationScope)
    }

    fn formatter(&self) -> Formatter {
        Formatter::new(self.config.display.format, self.config.display.color_output)
    }

    /// Handle subcommands
    ///
    /// # Returns
    /// * `Result<bool>` - True if a subcommand was handled, false to start the REPL
    pub fn handle_subcommand(&self) -> Result<bool> {
        match &self.args.command {
            Some(Commands::Complete { key, line, cursor }) => {
                let tree = self.load_tree()?;
                println!(
                    "{}",
                    self.render_completion(&tree, key.as_deref(), line.as_deref(), *cursor)?
                );
                Ok(true)
            }
            Some(Commands::Keys { namespaces }) => {
                let tree = self.load_tree()?;
                println!("{}", self.render_keys(&tree, *namespaces)?);
                Ok(true)
            }
            Some(Commands::Completion { shell }) => {
                generate_completion(shell, &mut std::io::stdout())?;
                Ok(true)
            }
            Some(Commands::Config { show, validate }) => {
                self.handle_config_command(*show, *validate)?;
                Ok(true)
            }
            Some(Commands::Repl) | None => Ok(false),
        }
    }

    /// Run one completion and format the candidates.
    ///
    /// `key` is resolved directly; otherwise `line` goes through key
    /// detection at `cursor` (default: end of line). With neither there is
    /// no key context and the result is empty.
    pub fn render_completion(
        &self,
        tree: &KeyTree,
        key: Option<&str>,
        line: Option<&str>,
        cursor: Option<usize>,
    ) -> Result<String> {
        let scope = Arc::new(self.static_scope());
        let engine = self.build_engine(Arc::clone(&scope) as Arc<dyn ScopeProvider>);
        let enabled = self.config.completion.enabled;

        let candidates = match (key, line) {
            (Some(raw), _) => {
                let namespaces = scope.active_namespaces("", 0);
                engine.complete_key(enabled, tree, Some(raw), &namespaces)
            }
            (None, Some(text)) => engine
                .complete(enabled, tree, text, cursor.unwrap_or(text.len()))
                .map(|response| response.candidates)
                .unwrap_or_default(),
            (None, None) => engine.complete_key::<String>(enabled, tree, None, &[]),
        };

        self.formatter().format_candidates(&candidates)
    }

    /// List keys, or namespace names only
    pub fn render_keys(&self, tree: &KeyTree, namespaces_only: bool) -> Result<String> {
        if namespaces_only {
            return Ok(tree.namespaces().join("\n"));
        }

        let entries: Vec<KeyEntry> = tree
            .leaves()
            .into_iter()
            .map(|(key, value)| KeyEntry::found(key, value))
            .collect();
        self.formatter().format_entries(&entries)
    }

    /// Handle config subcommand
    fn handle_config_command(&self, show: bool, validate: bool) -> Result<()> {
        if validate {
            self.validate_config_file()?;
        }

        if show || !validate {
            self.show_config()?;
        }

        Ok(())
    }

    /// Validate configuration file
    fn validate_config_file(&self) -> Result<()> {
        let path = self.get_config_path();
        println!("Validating configuration file: {}", path.display());

        if !path.exists() {
            println!("Configuration file does not exist, defaults apply");
            return Ok(());
        }

        match Config::from_file(&path) {
            Ok(config) => match config.validate() {
                Ok(_) => println!("Configuration is valid"),
                Err(e) => println!("Configuration validation failed: {}", e),
            },
            Err(e) => println!("Failed to load configuration: {}", e),
        }

        Ok(())
    }

    /// Show effective configuration
    fn show_config(&self) -> Result<()> {
        println!("# Configuration file: {}", self.get_config_path().display());
        println!("{}", self.config.to_toml_string()?);
        Ok(())
    }

    /// Get configuration file path (from args or default)
    fn get_config_path(&self) -> PathBuf {
        self.args
            .config_file
            .clone()
            .unwrap_or_else(Config::default_path)
    }

    /// Print banner with version and locale info
    pub fn print_banner(&self, tree: &KeyTree) {
        if !self.args.quiet {
            println!("i18n-complete {}", env!("CARGO_PKG_VERSION"));
            println!(
                "Loaded {} keys in {} namespaces from {}",
                tree.len(),
                tree.namespaces().len(),
                self.config.locales.directory.display()
            );
        }
    }
}
