//! Application state construction

use crate::config::ServerConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use sentimen_analytics::AnalyticsArtifact;
use sentimen_classifiers::{Classifier, LexiconClassifier, NaiveBayesClient};
use sentimen_hybrid::{ChatCompletionExplainer, ExplainerSettings, HybridPipeline};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Application state shared across all requests
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,

    /// The hybrid inference pipeline
    pub pipeline: Arc<HybridPipeline>,

    /// Precomputed analytics artifact
    pub artifact: Arc<AnalyticsArtifact>,

    /// Prometheus metrics handle for rendering
    pub metrics_handle: PrometheusHandle,
}

impl AppState {
    /// Initialize application state from configuration
    pub fn new(config: ServerConfig, metrics_handle: PrometheusHandle) -> anyhow::Result<Self> {
        let classifier: Arc<dyn Classifier> = match &config.classifier_url {
            Some(url) => {
                info!(url = %url, "using remote Naive Bayes classifier");
                Arc::new(NaiveBayesClient::new(
                    url.clone(),
                    Duration::from_secs(config.classifier_timeout_secs),
                )?)
            }
            None => {
                warn!("no classifier service configured, using the lexicon fallback");
                Arc::new(LexiconClassifier::new()?)
            }
        };

        let mut pipeline = HybridPipeline::new(classifier);
        match &config.explainer.api_key {
            Some(api_key) => {
                let explainer = ChatCompletionExplainer::new(ExplainerSettings {
                    endpoint: config.explainer.endpoint.clone(),
                    api_key: api_key.clone(),
                    model: config.explainer.model.clone(),
                    temperature: config.explainer.temperature,
                    timeout: Duration::from_secs(config.explainer.timeout_secs),
                })?;
                pipeline = pipeline.with_explainer(Arc::new(explainer));
                info!(model = %config.explainer.model, "explainer tier enabled");
            }
            None => {
                info!("no explainer API key configured, explainer tier disabled");
            }
        }

        let artifact = if Path::new(&config.artifact_path).exists() {
            AnalyticsArtifact::from_file(&config.artifact_path)?
        } else {
            info!(
                path = %config.artifact_path,
                "analytics artifact not found, serving empty analytics"
            );
            AnalyticsArtifact::default()
        };

        Ok(Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
            artifact: Arc::new(artifact),
            metrics_handle,
        })
    }
}
