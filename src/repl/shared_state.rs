use std::sync::{Arc, PoisonError, RwLock};

use crate::completion::ScopeProvider;
use crate::config::{Config, OutputFormat};
use crate::tree::KeyTree;

/// State shared between the line editor callbacks and the command loop.
///
/// Every field sits behind its own lock so the completer, hinter and prompt
/// can read while the loop handles `:ns`, `:reload` and the toggles.
#[derive(Debug, Clone)]
pub struct SharedState {
    /// Whether completion is active
    enabled: Arc<RwLock<bool>>,

    /// Current key tree snapshot, swapped wholesale on reload
    tree: Arc<RwLock<Arc<KeyTree>>>,

    /// Namespaces set with `:ns` or `--ns`
    namespaces: Arc<RwLock<Vec<String>>>,

    /// Output format setting
    output_format: Arc<RwLock<OutputFormat>>,

    /// Color output setting
    color_enabled: Arc<RwLock<bool>>,
}

impl SharedState {
    /// Create a new shared state.
    ///
    /// * `tree` - Initial key tree
    pub fn new(tree: KeyTree) -> Self {
        Self::with_config(tree, &Config::default())
    }

    /// Create a new shared state from configuration.
    ///
    /// * `tree` - Initial key tree
    /// * `config` - Effective configuration
    pub fn with_config(tree: KeyTree, config: &Config) -> Self {
        Self {
            enabled: Arc::new(RwLock::new(config.completion.enabled)),
            tree: Arc::new(RwLock::new(Arc::new(tree))),
            namespaces: Arc::new(RwLock::new(config.completion.namespaces.clone())),
            output_format: Arc::new(RwLock::new(config.display.format)),
            color_enabled: Arc::new(RwLock::new(config.display.color_output)),
        }
    }

    /// Check if completion is active.
    pub fn is_enabled(&self) -> bool {
        *self.enabled.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Turn completion on.
    pub fn activate(&self) {
        *self.enabled.write().unwrap_or_else(PoisonError::into_inner) = true;
    }

    /// Turn completion off. Requests are declined until reactivated.
    pub fn deactivate(&self) {
        *self.enabled.write().unwrap_or_else(PoisonError::into_inner) = false;
    }

    /// Current key tree snapshot.
    ///
    /// The returned `Arc` stays valid across a concurrent reload.
    pub fn snapshot(&self) -> Arc<KeyTree> {
        let current = self.tree.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*current)
    }

    /// Replace the key tree, returning the previous snapshot.
    pub fn replace_tree(&self, tree: KeyTree) -> Arc<KeyTree> {
        let mut current = self.tree.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, Arc::new(tree))
    }

    /// Get the namespaces set for the session.
    pub fn get_namespaces(&self) -> Vec<String> {
        self.namespaces
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Set the namespaces for the session.
    pub fn set_namespaces(&self, namespaces: Vec<String>) {
        *self.namespaces.write().unwrap_or_else(PoisonError::into_inner) = namespaces;
    }

    /// Get current output format.
    pub fn get_format(&self) -> OutputFormat {
        *self.output_format.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set output format.
    pub fn set_format(&self, format: OutputFormat) {
        *self.output_format.write().unwrap_or_else(PoisonError::into_inner) = format;
    }

    /// Get current color setting.
    pub fn get_color_enabled(&self) -> bool {
        *self.color_enabled.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set color output.
    pub fn set_color_enabled(&self, enabled: bool) {
        *self.color_enabled.write().unwrap_or_else(PoisonError::into_inner) = enabled;
    }
}

/// Session namespaces act as the static part of the completion scope
impl ScopeProvider for SharedState {
    fn active_namespaces(&self, _text: &str, _offset: usize) -> Vec<String> {
        self.get_namespaces()
    }
}
