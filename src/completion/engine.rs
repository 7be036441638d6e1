//! Completion engine - orchestrates the completion flow
//!
//! Ties together key detection, scope lookup and resolution for a single
//! request against one key tree snapshot.

use std::sync::Arc;

use tracing::debug;

use super::candidate::CompletionCandidate;
use super::detector::{CallKeyDetector, DetectedKey, KeyDetector};
use super::resolver::{CandidateResolver, lookup};
use super::scope::ScopeProvider;
use crate::config::{CompletionConfig, LocalesConfig};
use crate::tree::{KEY_DELIMITERS, KeyTree};

/// Result of a completion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResponse {
    /// Byte offset where the text replaced by a candidate starts
    pub start: usize,
    /// Raw key detected at the cursor
    pub key: String,
    /// Namespaces that were in scope
    pub namespaces: Vec<String>,
    /// Candidates in tree order
    pub candidates: Vec<CompletionCandidate>,
}

/// Main completion engine
pub struct CompletionEngine {
    /// Finds the raw key at the cursor
    detector: Arc<dyn KeyDetector>,
    /// Supplies the active namespaces
    scope: Arc<dyn ScopeProvider>,
    /// Resolves candidates
    resolver: CandidateResolver,
}

impl CompletionEngine {
    /// Create a new completion engine
    ///
    /// # Arguments
    /// * `detector` - Key detector for the host's source syntax
    /// * `scope` - Namespace scope provider
    /// * `resolver` - Candidate resolver
    pub fn new(
        detector: Arc<dyn KeyDetector>,
        scope: Arc<dyn ScopeProvider>,
        resolver: CandidateResolver,
    ) -> Self {
        Self {
            detector,
            scope,
            resolver,
        }
    }

    /// Create an engine from configuration with a call-based key detector.
    ///
    /// Falls back to the `t` function when no key function is configured.
    pub fn from_config(
        completion: &CompletionConfig,
        locales: &LocalesConfig,
        scope: Arc<dyn ScopeProvider>,
    ) -> Self {
        let detector = CallKeyDetector::new(&completion.key_functions)
            .or_else(|| CallKeyDetector::new(&["t"]))
            .map(|d| Arc::new(d) as Arc<dyn KeyDetector>)
            .unwrap_or_else(|| Arc::new(NoKeyDetector));

        Self::new(
            detector,
            scope,
            CandidateResolver::new(locales.namespace_delimiter),
        )
    }

    /// Resolver used by this engine
    pub fn resolver(&self) -> &CandidateResolver {
        &self.resolver
    }

    /// Complete the text at the given cursor position
    ///
    /// # Arguments
    /// * `enabled` - Whether the provider is active; `false` declines every request
    /// * `tree` - Key tree snapshot to resolve against
    /// * `text` - Document text
    /// * `offset` - Cursor position (byte index)
    ///
    /// # Returns
    /// * `Option<CompletionResponse>` - `None` when disabled or outside a key reference
    pub fn complete(
        &self,
        enabled: bool,
        tree: &KeyTree,
        text: &str,
        offset: usize,
    ) -> Option<CompletionResponse> {
        if !enabled {
            return None;
        }

        let detected = self.detector.detect(text, offset)?;
        let namespaces = self.scope.active_namespaces(text, offset);
        let candidates = self
            .resolver
            .resolve(Some(detected.key.as_str()), &namespaces, tree);

        debug!(
            "Key '{}' in {:?}: {} candidate(s)",
            detected.key,
            namespaces,
            candidates.len()
        );

        // Listings replace the whole key, drill-downs only the last segment
        let start = match detected.key.rfind(KEY_DELIMITERS) {
            Some(i) => detected.start + i + 1,
            None => detected.start,
        };

        Some(CompletionResponse {
            start,
            key: detected.key,
            namespaces,
            candidates,
        })
    }

    /// Value of the complete key under the cursor.
    ///
    /// Returns the fully-qualified key and its value when the text typed so
    /// far names a leaf, directly or under one of the active namespaces.
    pub fn value_at(
        &self,
        enabled: bool,
        tree: &KeyTree,
        text: &str,
        offset: usize,
    ) -> Option<(String, String)> {
        if !enabled {
            return None;
        }

        let detected = self.detector.detect(text, offset)?;
        let namespaces = self.scope.active_namespaces(text, offset);
        lookup(&detected.key, &namespaces, tree).map(|(key, value)| (key, value.to_string()))
    }

    /// Namespaces the scope provider reports for a position
    pub fn namespaces_at(&self, text: &str, offset: usize) -> Vec<String> {
        self.scope.active_namespaces(text, offset)
    }

    /// Resolve a raw key directly, skipping detection
    pub fn complete_key<S: AsRef<str>>(
        &self,
        enabled: bool,
        tree: &KeyTree,
        raw_key: Option<&str>,
        namespaces: &[S],
    ) -> Vec<CompletionCandidate> {
        if !enabled {
            return Vec::new();
        }
        self.resolver.resolve(raw_key, namespaces, tree)
    }
}

/// Detector that never finds a key
struct NoKeyDetector;

impl KeyDetector for NoKeyDetector {
    fn detect(&self, _text: &str, _offset: usize) -> Option<DetectedKey> {
        None
    }
}
