//! i18n-complete
//!
//! Autocomplete for hierarchical localization keys, from the command line or
//! an interactive REPL.
//!
//! # Usage
//!
//! ```bash
//! # Interactive mode
//! i18n-complete --locales ./locales --ns common
//!
//! # One-shot completion
//! i18n-complete complete common.bu
//! ```

use std::sync::Arc;

use i18n_complete::cli::CliInterface;
use i18n_complete::completion::{ChainedScope, UseTranslationScope};
use i18n_complete::error::Result;
use i18n_complete::repl::{ReplEngine, SharedState};

/// Application entry point
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic
///
/// 1. Parse command-line arguments and load configuration
/// 2. Initialize logging
/// 3. Handle one-shot subcommands or start the REPL
fn run() -> Result<()> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli);

    if cli.handle_subcommand()? {
        return Ok(());
    }

    run_interactive_mode(&cli)
}

/// Run application in interactive REPL mode
fn run_interactive_mode(cli: &CliInterface) -> Result<()> {
    let tree = cli.load_tree()?;
    cli.print_banner(&tree);

    let shared_state = SharedState::with_config(tree, cli.config());

    // Session namespaces first, then declarations found in the line
    let scope = ChainedScope::new()
        .with(shared_state.clone())
        .with(UseTranslationScope);
    let engine = Arc::new(cli.build_engine(Arc::new(scope)));

    let mut repl = ReplEngine::new(shared_state, engine, cli.loader(), cli.config());
    repl.run()?;

    println!("Goodbye!");
    Ok(())
}

/// Initialize logging system
///
/// Verbosity flags are already folded into the configured level. Logs go to
/// stderr so one-shot output on stdout stays machine readable.
fn initialize_logging(cli: &CliInterface) {
    let level = cli.config().logging.level.to_tracing_level();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);

    if cli.config().logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
