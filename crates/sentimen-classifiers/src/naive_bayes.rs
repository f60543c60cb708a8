//! Remote Naive Bayes classifier client
//!
//! Thin HTTP client for the trained Multinomial Naive Bayes service. The
//! service is a black box: one POST in, a label and a confidence out. The
//! full response body is retained verbatim for diagnostics.

use crate::classifier::{Classifier, ClassifierKind};
use async_trait::async_trait;
use sentimen_core::{ClassifierResult, Error, Result, SentimentLabel};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

/// Confidence assumed when the service omits one
pub const DEFAULT_MODEL_CONFIDENCE: f64 = 70.0;

/// HTTP client for the remote Naive Bayes classifier service
pub struct NaiveBayesClient {
    name: String,
    base_url: String,
    http: reqwest::Client,
}

impl NaiveBayesClient {
    /// Create a client for the service at `base_url` with the given request
    /// timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::classifier(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            name: "naive-bayes".to_string(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Interpret a service response body.
    ///
    /// Labels are taken verbatim; a missing or unknown label maps to
    /// Neutral and a missing confidence to [`DEFAULT_MODEL_CONFIDENCE`].
    fn interpret(body: Value) -> ClassifierResult {
        let label = body
            .get("sentiment")
            .and_then(Value::as_str)
            .and_then(SentimentLabel::from_wire)
            .unwrap_or(SentimentLabel::Neutral);

        let confidence = body
            .get("confidence")
            .and_then(Value::as_f64)
            .unwrap_or(DEFAULT_MODEL_CONFIDENCE);

        ClassifierResult::new(label, confidence).with_raw(body)
    }
}

#[async_trait]
impl Classifier for NaiveBayesClient {
    async fn classify(&self, text: &str) -> Result<ClassifierResult> {
        let url = format!("{}/predict", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await
            .map_err(|e| Error::classifier(format!("classifier request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, body = %body, "classifier service returned an error");
            return Err(Error::ClassifierUnavailable {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::classifier(format!("classifier response was not JSON: {e}")))?;

        let result = Self::interpret(body);
        debug!(label = %result.label, confidence = result.confidence, "classifier verdict");
        Ok(result)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ClassifierKind {
        ClassifierKind::Model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn interprets_full_response() {
        let body = json!({
            "sentiment": "negatif",
            "confidence": 91.2,
            "probs": { "positif": 0.03, "netral": 0.06, "negatif": 0.91 }
        });

        let result = NaiveBayesClient::interpret(body.clone());
        assert_eq!(result.label, SentimentLabel::Negative);
        assert_eq!(result.confidence, 91.2);
        assert_eq!(result.raw, body);
    }

    #[test]
    fn missing_label_defaults_to_neutral() {
        let result = NaiveBayesClient::interpret(json!({ "confidence": 55.0 }));
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.confidence, 55.0);
    }

    #[test]
    fn missing_confidence_defaults_to_seventy() {
        let result = NaiveBayesClient::interpret(json!({ "sentiment": "positif" }));
        assert_eq!(result.label, SentimentLabel::Positive);
        assert_eq!(result.confidence, DEFAULT_MODEL_CONFIDENCE);
    }

    #[test]
    fn unknown_label_defaults_to_neutral() {
        let result = NaiveBayesClient::interpret(json!({ "sentiment": "meh" }));
        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client =
            NaiveBayesClient::new("http://127.0.0.1:8000/", Duration::from_secs(10)).unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:8000");
    }
}
