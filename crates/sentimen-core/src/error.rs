//! Error types for Sentimen

/// Result type alias using Sentimen's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Sentimen operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Request text was empty or whitespace-only
    #[error("input text is empty")]
    EmptyInput,

    /// The classifier service answered with a non-success status
    #[error("classifier service returned {status}: {body}")]
    ClassifierUnavailable { status: u16, body: String },

    /// Classifier transport or protocol errors
    #[error("classifier error: {0}")]
    Classifier(String),

    /// The explainer service failed or was unreachable
    #[error("explainer error: {0}")]
    ExplainerUnavailable(String),

    /// The explainer answered but its output held no usable structured block
    #[error("explainer parse error: {0}")]
    ExplainerParse(String),

    /// The explainer upstream signalled a rate limit (HTTP 429)
    #[error("upstream rate limited")]
    RateLimited,

    /// The explainer upstream signalled quota exhaustion (HTTP 402)
    #[error("upstream quota exhausted")]
    QuotaExhausted,

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    /// Create a new explainer error
    pub fn explainer(msg: impl Into<String>) -> Self {
        Self::ExplainerUnavailable(msg.into())
    }

    /// Create a new explainer parse error
    pub fn explainer_parse(msg: impl Into<String>) -> Self {
        Self::ExplainerParse(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error is confined to the explainer tier.
    ///
    /// Explainer-tier failures degrade to a fallback response instead of
    /// failing the request. Rate-limit and quota signals are excluded: they
    /// keep their upstream semantics all the way to the caller.
    pub fn is_explainer_tier(&self) -> bool {
        matches!(self, Self::ExplainerUnavailable(_) | Self::ExplainerParse(_))
    }
}
