//! Classifier trait and common types

use async_trait::async_trait;
use sentimen_core::{ClassifierResult, Result};

/// Trait for all sentiment classifiers
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify the given text. Callers validate that `text` is non-empty
    /// before dispatch; the classifier itself performs no retries.
    async fn classify(&self, text: &str) -> Result<ClassifierResult>;

    /// Get the classifier name
    fn name(&self) -> &str;

    /// Get the provenance of results this classifier produces
    fn kind(&self) -> ClassifierKind;
}

/// Provenance of a classification.
///
/// Downstream consumers must never mistake a heuristic result for a
/// model-backed one, so every classifier declares which it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierKind {
    /// Backed by the trained model service
    Model,
    /// Local keyword-membership heuristic
    Lexicon,
}
