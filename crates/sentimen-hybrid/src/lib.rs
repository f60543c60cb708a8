//! Sentimen Hybrid
//!
//! The hybrid inference pipeline: a deterministic classifier decides the
//! label, a generative explainer justifies it, and the merger composes the
//! final result under strict precedence rules with graceful degradation.
//!
//! Flow: text → classifier (authoritative label) → explainer (reason +
//! keywords, given the fixed label) → merger → [`sentimen_core::Prediction`].

pub mod explainer;
pub mod parse;
pub mod pipeline;
pub mod prompt;

pub use explainer::{ChatCompletionExplainer, Explainer, ExplainerSettings};
pub use parse::{extract_block, parse_explainer_output};
pub use pipeline::{HybridPipeline, EXPLAINER_DOWN_REASON, LEXICON_REASON, MODEL_REASON};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::explainer::{ChatCompletionExplainer, Explainer, ExplainerSettings};
    pub use crate::pipeline::HybridPipeline;
}
