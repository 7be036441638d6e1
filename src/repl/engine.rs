use std::sync::Arc;

use nu_ansi_term::{Color, Style};
use reedline::{
    DescriptionMode, EditCommand, Emacs, IdeMenu, KeyCode, KeyModifiers, Keybindings,
    MenuBuilder, Reedline, ReedlineEvent, ReedlineMenu, Signal, default_emacs_keybindings,
};
use tracing::debug;

use crate::completion::{CallKeyDetector, CompletionEngine};
use crate::config::Config;
use crate::error::{I18nError, Result};
use crate::tree::LocaleLoader;

use super::commands::{CommandHandler, CommandOutcome};
use super::completer::KeyCompleter;
use super::highlighter::KeyHighlighter;
use super::hinter::KeyHinter;
use super::prompt::KeyPrompt;
use super::shared_state::SharedState;

const COMPLETION_MENU_NAME: &str = "completion_menu";

/// REPL engine for interactive key completion
pub struct ReplEngine {
    /// Line editor for input
    editor: Reedline,

    /// Shared state with the tree snapshot and toggles
    shared_state: SharedState,

    /// Runs meta commands and evaluates lines
    handler: CommandHandler,

    /// Whether to continue running
    running: bool,
}

impl ReplEngine {
    /// Create a new REPL engine
    ///
    /// # Arguments
    /// * `shared_state` - Shared state holding the loaded tree
    /// * `engine` - Completion engine whose scope includes the session namespaces
    /// * `loader` - Loader used by `:reload`
    /// * `config` - Effective configuration
    pub fn new(
        shared_state: SharedState,
        engine: Arc<CompletionEngine>,
        loader: LocaleLoader,
        config: &Config,
    ) -> Self {
        let detector = CallKeyDetector::new(&config.completion.key_functions);
        let color = config.display.color_output;

        let mut keybindings = default_emacs_keybindings();
        configure_completion_keybindings(&mut keybindings, &config.completion.trigger_characters);

        let completer = KeyCompleter::new(Arc::clone(&engine), shared_state.clone());
        let hinter = KeyHinter::new(Arc::clone(&engine), shared_state.clone());
        let highlighter = KeyHighlighter::new(
            detector.clone(),
            Arc::clone(&engine),
            shared_state.clone(),
            color,
        );

        let editor = Reedline::create()
            .with_completer(Box::new(completer))
            .with_menu(ReedlineMenu::EngineCompleter(create_completion_menu()))
            .with_hinter(Box::new(hinter))
            .with_highlighter(Box::new(highlighter))
            .with_edit_mode(Box::new(Emacs::new(keybindings)))
            .with_quick_completions(false)
            .with_ansi_colors(color);

        let handler = CommandHandler::new(shared_state.clone(), engine, detector, loader);

        Self {
            editor,
            shared_state,
            handler,
            running: true,
        }
    }

    /// Run until `:quit` or end of input
    pub fn run(&mut self) -> Result<()> {
        println!("i18n-complete REPL. Tab completes keys, :help lists commands.");

        while self.running {
            let Some(line) = self.read_line()? else {
                break;
            };

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match self.handler.handle_line(trimmed) {
                Ok(CommandOutcome::Output(output)) => println!("{output}"),
                Ok(CommandOutcome::Exit) => self.running = false,
                Err(err) => eprintln!("{err}"),
            }
        }

        debug!("REPL finished");
        Ok(())
    }

    /// Read a single line of input
    ///
    /// # Returns
    /// * `Result<Option<String>>` - Input line, or `None` on Ctrl-D
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let prompt = KeyPrompt::new(
            self.shared_state.get_namespaces(),
            self.shared_state.is_enabled(),
        );

        match self.editor.read_line(&prompt) {
            Ok(Signal::Success(line)) => Ok(Some(line)),
            // Ctrl-C abandons the current line only
            Ok(Signal::CtrlC) => Ok(Some(String::new())),
            Ok(Signal::CtrlD) => Ok(None),
            Ok(_) => Ok(Some(String::new())),
            Err(err) => Err(I18nError::Repl(err.to_string())),
        }
    }

    /// Check if REPL is still running
    pub fn is_running(&self) -> bool {
        self.running
    }
}

fn create_completion_menu() -> Box<IdeMenu> {
    Box::new(
        IdeMenu::default()
            .with_name(COMPLETION_MENU_NAME)
            .with_description_mode(DescriptionMode::PreferRight)
            .with_padding(1)
            .with_max_completion_width(48)
            .with_max_description_width(60)
            .with_description_offset(2)
            .with_match_text_style(Style::new().fg(Color::Cyan).underline())
            .with_selected_match_text_style(Style::new().fg(Color::Cyan).bold().underline()),
    )
}

/// Tab opens the menu; typing a trigger character reopens it
fn configure_completion_keybindings(keybindings: &mut Keybindings, triggers: &[char]) {
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu(COMPLETION_MENU_NAME.to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
    keybindings.add_binding(
        KeyModifiers::SHIFT,
        KeyCode::BackTab,
        ReedlineEvent::MenuPrevious,
    );

    // Shifted characters such as `"` arrive with SHIFT on most terminals
    for &trigger in triggers {
        for modifiers in [KeyModifiers::NONE, KeyModifiers::SHIFT] {
            keybindings.add_binding(
                modifiers,
                KeyCode::Char(trigger),
                ReedlineEvent::Multiple(vec![
                    ReedlineEvent::Edit(vec![EditCommand::InsertChar(trigger)]),
                    ReedlineEvent::Menu(COMPLETION_MENU_NAME.to_string()),
                ]),
            );
        }
    }
}
