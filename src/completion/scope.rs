//! Namespace scope providers
//!
//! A scope provider answers which namespaces are active at a cursor position.
//! Providers can be chained; the chain keeps the first occurrence of every
//! namespace in provider order.

use regex::Regex;
use std::sync::LazyLock;

/// Supplies the namespaces active at a position
pub trait ScopeProvider: Send + Sync {
    /// Ordered, possibly empty list of namespaces in scope at `offset`
    fn active_namespaces(&self, text: &str, offset: usize) -> Vec<String>;
}

/// Fixed list of namespaces, independent of the text
#[derive(Debug, Clone, Default)]
pub struct StaticScope {
    namespaces: Vec<String>,
}

impl StaticScope {
    /// Create a static scope
    pub fn new<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            namespaces: namespaces.into_iter().map(Into::into).collect(),
        }
    }
}

impl ScopeProvider for StaticScope {
    fn active_namespaces(&self, _text: &str, _offset: usize) -> Vec<String> {
        self.namespaces.clone()
    }
}

static USE_TRANSLATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\buseTranslations?\(\s*(\[[^\]]*\]|'[^']*'|"[^"]*"|`[^`]*`)"#)
        .expect("valid useTranslation pattern")
});

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"`]([^'"`]+)['"`]"#).expect("valid quoted pattern"));

/// Namespaces declared through `useTranslation('ns')` style hooks.
///
/// Every declaration before the cursor contributes, including array forms
/// such as `useTranslation(['common', 'error'])`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UseTranslationScope;

impl ScopeProvider for UseTranslationScope {
    fn active_namespaces(&self, text: &str, offset: usize) -> Vec<String> {
        let end = (0..=offset.min(text.len()))
            .rev()
            .find(|&i| text.is_char_boundary(i))
            .unwrap_or(0);

        let mut namespaces = Vec::new();
        for declaration in USE_TRANSLATION.captures_iter(&text[..end]) {
            let Some(argument) = declaration.get(1) else {
                continue;
            };
            for quoted in QUOTED.captures_iter(argument.as_str()) {
                if let Some(ns) = quoted.get(1) {
                    push_unique(&mut namespaces, ns.as_str().trim());
                }
            }
        }
        namespaces
    }
}

/// Concatenation of several providers
#[derive(Default)]
pub struct ChainedScope {
    providers: Vec<Box<dyn ScopeProvider>>,
}

impl ChainedScope {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider
    pub fn with(mut self, provider: impl ScopeProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }
}

impl ScopeProvider for ChainedScope {
    fn active_namespaces(&self, text: &str, offset: usize) -> Vec<String> {
        let mut namespaces = Vec::new();
        for provider in &self.providers {
            for ns in provider.active_namespaces(text, offset) {
                push_unique(&mut namespaces, &ns);
            }
        }
        namespaces
    }
}

fn push_unique(namespaces: &mut Vec<String>, ns: &str) {
    if !ns.is_empty() && !namespaces.iter().any(|existing| existing == ns) {
        namespaces.push(ns.to_string());
    }
}
