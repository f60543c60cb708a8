//! Explainer client
//!
//! Calls a chat-completion style generative endpoint to justify an
//! already-decided label. The client returns the model's raw text
//! unmodified; parsing belongs to the merger.

use crate::prompt;
use async_trait::async_trait;
use sentimen_core::{Error, Result, SentimentLabel};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Trait for the explainer tier
#[async_trait]
pub trait Explainer: Send + Sync {
    /// Ask for a justification of `label` for `text`. Returns the raw model
    /// output; never retried.
    async fn explain(&self, text: &str, label: SentimentLabel) -> Result<String>;

    /// Get the explainer name
    fn name(&self) -> &str;
}

/// Settings for [`ChatCompletionExplainer`]
#[derive(Debug, Clone)]
pub struct ExplainerSettings {
    /// Chat-completion endpoint URL
    pub endpoint: String,

    /// Bearer token for the endpoint
    pub api_key: String,

    /// Model identifier sent in the request body
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Request timeout
    pub timeout: Duration,
}

/// HTTP client for a chat-completion style explainer endpoint
pub struct ChatCompletionExplainer {
    name: String,
    settings: ExplainerSettings,
    http: reqwest::Client,
}

impl ChatCompletionExplainer {
    pub fn new(settings: ExplainerSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| Error::explainer(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            name: "chat-completion".to_string(),
            settings,
            http,
        })
    }

    /// Pull the assistant text out of a chat-completion response body.
    /// Anything missing collapses to an empty string; the merger treats
    /// that as unparseable output.
    fn extract_content(body: &Value) -> String {
        body.get("choices")
            .and_then(Value::as_array)
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }
}

#[async_trait]
impl Explainer for ChatCompletionExplainer {
    async fn explain(&self, text: &str, label: SentimentLabel) -> Result<String> {
        let body = serde_json::json!({
            "model": self.settings.model,
            "messages": [
                { "role": "system", "content": prompt::system_directive(label) },
                { "role": "user", "content": prompt::user_message(text) },
            ],
            "temperature": self.settings.temperature,
        });

        let response = self
            .http
            .post(&self.settings.endpoint)
            .bearer_auth(&self.settings.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::explainer(format!("explainer request failed: {e}")))?;

        let status = response.status();
        match status.as_u16() {
            // Rate-limit and quota signals keep their upstream semantics
            429 => return Err(Error::RateLimited),
            402 => return Err(Error::QuotaExhausted),
            _ if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                warn!(%status, body = %body, "explainer service returned an error");
                return Err(Error::explainer(format!(
                    "explainer returned {status}: {body}"
                )));
            }
            _ => {}
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::explainer(format!("explainer response was not JSON: {e}")))?;

        let content = Self::extract_content(&body);
        debug!(chars = content.len(), "explainer answered");
        Ok(content)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_first_choice_content() {
        let body = json!({
            "choices": [
                { "message": { "role": "assistant", "content": "{\"reason\":\"ok\"}" } },
                { "message": { "role": "assistant", "content": "ignored" } }
            ]
        });

        assert_eq!(
            ChatCompletionExplainer::extract_content(&body),
            "{\"reason\":\"ok\"}"
        );
    }

    #[test]
    fn missing_choices_collapse_to_empty() {
        assert_eq!(ChatCompletionExplainer::extract_content(&json!({})), "");
        assert_eq!(
            ChatCompletionExplainer::extract_content(&json!({ "choices": [] })),
            ""
        );
        assert_eq!(
            ChatCompletionExplainer::extract_content(
                &json!({ "choices": [{ "message": { "content": null } }] })
            ),
            ""
        );
    }
}
