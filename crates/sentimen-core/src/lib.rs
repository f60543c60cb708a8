//! Sentimen Core
//!
//! Core types and utilities shared across Sentimen components.
//!
//! This crate provides:
//! - Sentiment label, classifier/explainer result, and final prediction types
//! - Error types and result handling for the hybrid inference pipeline

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{ClassifierResult, ExplainerResult, Prediction, SentimentLabel};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{ClassifierResult, ExplainerResult, Prediction, SentimentLabel};
}
