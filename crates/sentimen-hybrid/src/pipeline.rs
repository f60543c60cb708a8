//! Response merger and fallback chain
//!
//! The core state machine of the hybrid pipeline. The classifier's label is
//! authoritative; the explainer only ever contributes reason and keywords.
//! Explainer failures of any kind degrade the response instead of failing
//! the request, with two exceptions (rate limit, quota) that keep their
//! upstream semantics.

use crate::explainer::Explainer;
use crate::parse;
use sentimen_core::{ClassifierResult, Error, ExplainerResult, Prediction, Result};
use sentimen_classifiers::{Classifier, ClassifierKind};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Reason used when only the model verdict is available
pub const MODEL_REASON: &str =
    "Prediksi berdasarkan model Multinomial Naive Bayes yang dilatih pada ulasan SIREKAP.";

/// Reason used when the explainer failed or produced no usable block
pub const EXPLAINER_DOWN_REASON: &str =
    "Prediksi berdasarkan model Multinomial Naive Bayes. Modul penjelas gagal dipanggil.";

/// Reason used for lexicon-backed verdicts, so heuristic results are never
/// mistaken for model output
pub const LEXICON_REASON: &str =
    "Prediksi berdasarkan kamus kata sederhana karena model utama tidak tersedia.";

/// Request-scoped orchestrator combining the classifier and explainer tiers
pub struct HybridPipeline {
    classifier: Arc<dyn Classifier>,
    explainer: Option<Arc<dyn Explainer>>,
}

impl HybridPipeline {
    /// Create a pipeline with no explainer tier (classifier-only mode)
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self {
            classifier,
            explainer: None,
        }
    }

    /// Attach an explainer tier
    pub fn with_explainer(mut self, explainer: Arc<dyn Explainer>) -> Self {
        self.explainer = Some(explainer);
        self
    }

    /// Whether an explainer tier is configured
    pub fn has_explainer(&self) -> bool {
        self.explainer.is_some()
    }

    /// Run the full chain for one request
    pub async fn predict(&self, text: &str) -> Result<Prediction> {
        if text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let start = Instant::now();
        let verdict = self.classifier.classify(text).await?;
        metrics::histogram!("sentimen_classifier_latency_us")
            .record(start.elapsed().as_micros() as f64);

        let explainer = match &self.explainer {
            Some(explainer) => explainer,
            None => {
                debug!("explainer tier not configured, classifier-only result");
                metrics::counter!("sentimen_decisions_total", "tier" => "classifier_only")
                    .increment(1);
                let reason = self.classifier_only_reason();
                return Ok(compose(verdict, None, reason));
            }
        };

        let (explanation, fallback_reason) = match explainer.explain(text, verdict.label).await {
            Ok(raw) => match parse::parse_explainer_output(&raw) {
                Ok(parsed) => {
                    metrics::counter!("sentimen_decisions_total", "tier" => "hybrid").increment(1);
                    (Some(parsed), self.classifier_only_reason())
                }
                Err(e) => {
                    warn!(error = %e, "explainer output unusable, degrading");
                    metrics::counter!("sentimen_decisions_total", "tier" => "degraded")
                        .increment(1);
                    (None, EXPLAINER_DOWN_REASON)
                }
            },
            Err(e) if e.is_explainer_tier() => {
                warn!(error = %e, "explainer call failed, degrading");
                metrics::counter!("sentimen_decisions_total", "tier" => "degraded").increment(1);
                (None, EXPLAINER_DOWN_REASON)
            }
            // Rate-limit and quota signals keep their upstream semantics
            Err(e) => return Err(e),
        };

        Ok(compose(verdict, explanation, fallback_reason))
    }

    /// Fallback reason when no explanation is available at all: the model
    /// reason for model-backed verdicts, the lexicon reason otherwise.
    fn classifier_only_reason(&self) -> &'static str {
        match self.classifier.kind() {
            ClassifierKind::Model => MODEL_REASON,
            ClassifierKind::Lexicon => LEXICON_REASON,
        }
    }
}

/// Compose the final result.
///
/// Label and confidence come from the classifier unconditionally; whatever
/// the explainer proposed for either is discarded. The raw classifier body
/// rides along as the diagnostic in every branch.
fn compose(
    verdict: ClassifierResult,
    explanation: Option<ExplainerResult>,
    fallback_reason: &str,
) -> Prediction {
    let explanation = explanation.unwrap_or_default();

    if let Some(claimed) = explanation.label {
        if claimed != verdict.label {
            warn!(
                classifier = %verdict.label,
                explainer = %claimed,
                "explainer disagreed with classifier, keeping classifier label"
            );
        }
    }
    if let Some(proposed) = explanation.confidence {
        debug!(confidence = proposed, "explainer proposed a confidence, discarded");
    }

    Prediction {
        sentiment: verdict.label,
        confidence: verdict.confidence,
        reason: explanation
            .reason
            .unwrap_or_else(|| fallback_reason.to_string()),
        keywords: explanation.keywords,
        diagnostic: verdict.raw,
    }
}
