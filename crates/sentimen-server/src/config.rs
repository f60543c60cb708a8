//! Server configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the Naive Bayes classifier service. When unset, the
    /// local lexicon fallback handles classification.
    #[serde(default)]
    pub classifier_url: Option<String>,

    /// Classifier request timeout
    #[serde(default = "default_classifier_timeout")]
    pub classifier_timeout_secs: u64,

    /// Explainer tier configuration
    #[serde(default)]
    pub explainer: ExplainerConfig,

    /// Precomputed analytics artifact path
    #[serde(default = "default_artifact_path")]
    pub artifact_path: String,

    /// How many terms per category the word-cloud view keeps
    #[serde(default = "default_wordcloud_top_k")]
    pub wordcloud_top_k: usize,
}

impl ServerConfig {
    /// Load configuration from file, then apply environment and CLI
    /// overrides
    pub fn load(config_path: &str, cli: &crate::Cli) -> anyhow::Result<Self> {
        // Try to load from file, or use defaults
        let mut config = if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)?
        } else {
            Self::default()
        };

        // Environment overrides
        if let Ok(url) = std::env::var("MODEL_API_URL") {
            if !url.is_empty() {
                config.classifier_url = Some(url);
            }
        }
        if let Ok(key) = std::env::var("EXPLAINER_API_KEY") {
            if !key.is_empty() {
                config.explainer.api_key = Some(key);
            }
        }

        // CLI overrides
        if let Some(classifier) = &cli.classifier {
            config.classifier_url = Some(classifier.clone());
        }
        if let Some(artifact) = &cli.artifact {
            config.artifact_path = artifact.clone();
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            classifier_url: None,
            classifier_timeout_secs: default_classifier_timeout(),
            explainer: ExplainerConfig::default(),
            artifact_path: default_artifact_path(),
            wordcloud_top_k: default_wordcloud_top_k(),
        }
    }
}

/// Explainer tier configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainerConfig {
    /// Chat-completion endpoint URL
    #[serde(default = "default_explainer_endpoint")]
    pub endpoint: String,

    /// API key. Absence disables the explainer tier entirely; that is a
    /// supported mode, not an error.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier
    #[serde(default = "default_explainer_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Explainer request timeout
    #[serde(default = "default_explainer_timeout")]
    pub timeout_secs: u64,
}

impl Default for ExplainerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_explainer_endpoint(),
            api_key: None,
            model: default_explainer_model(),
            temperature: default_temperature(),
            timeout_secs: default_explainer_timeout(),
        }
    }
}

fn default_classifier_timeout() -> u64 {
    10
}

fn default_explainer_timeout() -> u64 {
    20
}

fn default_explainer_endpoint() -> String {
    "https://ai.gateway.lovable.dev/v1/chat/completions".to_string()
}

fn default_explainer_model() -> String {
    "google/gemini-2.5-flash-lite".to_string()
}

fn default_temperature() -> f32 {
    0.3
}

fn default_artifact_path() -> String {
    "./artifacts/analytics.json".to_string()
}

fn default_wordcloud_top_k() -> usize {
    40
}
