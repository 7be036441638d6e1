use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use super::*;
use crate::completion::{CallKeyDetector, ChainedScope, CompletionEngine, UseTranslationScope};
use crate::config::{Config, OutputFormat};
use crate::error::I18nError;
use crate::tree::{KeyTree, LocaleLoader};

fn locale_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("common.json"),
        r#"{ "ok": "OK", "cancel": "Cancel", "buttons": { "save": "Save" } }"#,
    )
    .unwrap();
    fs::write(dir.path().join("error.json"), r#"{ "notFound": "Not Found" }"#).unwrap();
    dir
}

fn create_test_handler(dir: &TempDir) -> (CommandHandler, SharedState) {
    let config = Config::default();
    let loader = LocaleLoader::new(dir.path());
    let state = SharedState::new(loader.load().unwrap());
    state.set_namespaces(vec!["common".to_string()]);
    state.set_color_enabled(false);

    let scope = ChainedScope::new()
        .with(state.clone())
        .with(UseTranslationScope);
    let engine = CompletionEngine::from_config(&config.completion, &config.locales, Arc::new(scope));
    let detector = CallKeyDetector::new(&config.completion.key_functions);

    (
        CommandHandler::new(state.clone(), Arc::new(engine), detector, loader),
        state,
    )
}

fn output(handler: &CommandHandler, line: &str) -> String {
    match handler.handle_line(line).unwrap() {
        CommandOutcome::Output(text) => text,
        CommandOutcome::Exit => panic!("unexpected exit for {line}"),
    }
}

#[test]
fn test_shared_state_creation() {
    let state = SharedState::new(KeyTree::new());
    assert!(state.is_enabled());
    assert!(state.get_namespaces().is_empty());
    assert_eq!(state.get_format(), OutputFormat::Plain);
    assert!(state.snapshot().is_empty());
}

#[test]
fn test_shared_state_toggles() {
    let state = SharedState::new(KeyTree::new());
    state.deactivate();
    assert!(!state.is_enabled());
    state.activate();
    assert!(state.is_enabled());
}

#[test]
fn test_snapshot_survives_replace() {
    let mut tree = KeyTree::new();
    tree.insert("common.ok", "OK");
    let state = SharedState::new(tree);

    let before = state.snapshot();
    let mut next = KeyTree::new();
    next.insert("common.yes", "Yes");
    let previous = state.replace_tree(next);

    assert!(Arc::ptr_eq(&before, &previous));
    assert_eq!(before.value_by_key("common.ok"), Some("OK"));
    assert_eq!(state.snapshot().value_by_key("common.yes"), Some("Yes"));
    assert_eq!(state.snapshot().value_by_key("common.ok"), None);
}

#[test]
fn test_state_clones_share_values() {
    let state = SharedState::new(KeyTree::new());
    let clone = state.clone();
    clone.set_namespaces(vec!["common".to_string()]);
    clone.set_color_enabled(false);
    assert_eq!(state.get_namespaces(), vec!["common"]);
    assert!(!state.get_color_enabled());
}

#[test]
fn test_parse_meta_commands() {
    assert_eq!(
        ReplCommand::parse(":ns common error").unwrap(),
        ReplCommand::Namespaces(vec!["common".to_string(), "error".to_string()])
    );
    assert_eq!(ReplCommand::parse(":ns").unwrap(), ReplCommand::Namespaces(Vec::new()));
    assert_eq!(ReplCommand::parse(":reload").unwrap(), ReplCommand::Reload);
    assert_eq!(ReplCommand::parse("  :enable ").unwrap(), ReplCommand::Enable);
    assert_eq!(ReplCommand::parse(":disable").unwrap(), ReplCommand::Disable);
    assert_eq!(ReplCommand::parse(":keys").unwrap(), ReplCommand::Keys);
    assert_eq!(
        ReplCommand::parse(":format table").unwrap(),
        ReplCommand::Format(OutputFormat::Table)
    );
    assert_eq!(ReplCommand::parse(":q").unwrap(), ReplCommand::Quit);
    assert_eq!(
        ReplCommand::parse("t('common.ok')").unwrap(),
        ReplCommand::Evaluate("t('common.ok')".to_string())
    );
}

#[test]
fn test_parse_rejects_unknown() {
    assert!(matches!(
        ReplCommand::parse(":frobnicate"),
        Err(I18nError::Command(_))
    ));
    assert!(matches!(
        ReplCommand::parse(":format yaml"),
        Err(I18nError::Command(_))
    ));
    assert!(matches!(ReplCommand::parse(":reload now"), Err(I18nError::Command(_))));
}

#[test]
fn test_namespaces_command() {
    let dir = locale_dir();
    let (handler, state) = create_test_handler(&dir);

    assert_eq!(output(&handler, ":ns common error"), "Namespaces: common, error");
    assert_eq!(state.get_namespaces(), vec!["common", "error"]);
    assert_eq!(output(&handler, ":ns"), "Namespaces cleared");
    assert!(state.get_namespaces().is_empty());
}

#[test]
fn test_toggle_commands() {
    let dir = locale_dir();
    let (handler, state) = create_test_handler(&dir);

    output(&handler, ":disable");
    assert!(!state.is_enabled());
    assert_eq!(output(&handler, "common."), "Completion is disabled (use :enable)");

    output(&handler, ":enable");
    assert!(state.is_enabled());
}

#[test]
fn test_keys_command() {
    let dir = locale_dir();
    let (handler, _) = create_test_handler(&dir);

    assert_eq!(
        output(&handler, ":keys"),
        "common.ok = OK\ncommon.cancel = Cancel\ncommon.buttons.save = Save\nerror.notFound = Not Found"
    );
}

#[test]
fn test_evaluate_references() {
    let dir = locale_dir();
    let (handler, _) = create_test_handler(&dir);

    assert_eq!(
        output(&handler, "t('ok') + t('error.notFound') + t('nope')"),
        "common.ok = OK\nerror.notFound = Not Found\nnope (missing)"
    );
}

#[test]
fn test_evaluate_call_inside_literal_is_one_reference() {
    let dir = locale_dir();
    let (handler, _) = create_test_handler(&dir);

    assert_eq!(
        output(&handler, r#"t("a t('ok') c")"#),
        "a t('ok') c (missing)"
    );
}

#[test]
fn test_evaluate_reference_with_declared_scope() {
    let dir = locale_dir();
    let (handler, _) = create_test_handler(&dir);

    assert_eq!(
        output(&handler, "useTranslation('error'); t('notFound')"),
        "error.notFound = Not Found"
    );
}

#[test]
fn test_evaluate_raw_keys() {
    let dir = locale_dir();
    let (handler, _) = create_test_handler(&dir);

    assert_eq!(output(&handler, "common.cancel"), "common.cancel = Cancel");
    assert_eq!(output(&handler, "cancel"), "common.cancel = Cancel");
    assert_eq!(output(&handler, "common.buttons"), "save  Save");
    assert_eq!(output(&handler, "missing.key"), "(no candidates)");
}

#[test]
fn test_format_command() {
    let dir = locale_dir();
    let (handler, state) = create_test_handler(&dir);

    output(&handler, ":format json");
    assert_eq!(state.get_format(), OutputFormat::Json);
    assert_eq!(
        output(&handler, "common.ok"),
        r#"[{"key":"common.ok","value":"OK"}]"#
    );
}

#[test]
fn test_reload_swaps_tree() {
    let dir = locale_dir();
    let (handler, state) = create_test_handler(&dir);

    fs::write(dir.path().join("error.json"), r#"{ "timeout": "Timed out" }"#).unwrap();
    let message = output(&handler, ":reload");

    assert!(message.starts_with("Reloaded 4 keys"));
    let tree = state.snapshot();
    assert_eq!(tree.value_by_key("error.timeout"), Some("Timed out"));
    assert_eq!(tree.value_by_key("error.notFound"), None);
}

#[test]
fn test_failed_reload_keeps_tree() {
    let dir = locale_dir();
    let (handler, state) = create_test_handler(&dir);

    fs::write(dir.path().join("error.json"), "{ not json").unwrap();
    assert!(handler.handle_line(":reload").is_err());
    assert_eq!(state.snapshot().value_by_key("error.notFound"), Some("Not Found"));
}

#[test]
fn test_quit() {
    let dir = locale_dir();
    let (handler, _) = create_test_handler(&dir);
    assert_eq!(handler.handle_line(":quit").unwrap(), CommandOutcome::Exit);
}
