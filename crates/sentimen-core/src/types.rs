//! Core types for Sentimen

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Sentiment class for a review.
///
/// The classifier service speaks lowercase labels (`positif`/`netral`/
/// `negatif`); the UI contract uses the capitalized Indonesian forms. This
/// enum serializes to the UI form and parses the wire form. Missing or
/// unknown labels default to [`SentimentLabel::Neutral`] at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    #[serde(rename = "Positif")]
    Positive,
    #[serde(rename = "Netral")]
    Neutral,
    #[serde(rename = "Negatif")]
    Negative,
}

impl SentimentLabel {
    /// Parse a classifier wire label (`positif`/`netral`/`negatif`),
    /// case-insensitively. Returns `None` for anything else.
    pub fn from_wire(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "positif" => Some(Self::Positive),
            "netral" => Some(Self::Neutral),
            "negatif" => Some(Self::Negative),
            _ => None,
        }
    }

    /// The UI form of this label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positif",
            Self::Neutral => "Netral",
            Self::Negative => "Negatif",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the classifier tier for one request.
///
/// Immutable once produced. The label is authoritative for the whole
/// request; no downstream component may replace it.
#[derive(Debug, Clone)]
pub struct ClassifierResult {
    /// Sentiment class, taken verbatim from the classifier
    pub label: SentimentLabel,

    /// Classifier's own certainty, 0-100
    pub confidence: f64,

    /// Verbatim upstream response body, kept for diagnostics only
    pub raw: Value,
}

impl ClassifierResult {
    /// Create a new classifier result without a raw payload
    pub fn new(label: SentimentLabel, confidence: f64) -> Self {
        Self {
            label,
            confidence,
            raw: Value::Null,
        }
    }

    /// Attach the verbatim upstream response body
    pub fn with_raw(mut self, raw: Value) -> Self {
        self.raw = raw;
        self
    }
}

/// Parsed output of the explainer tier.
///
/// Untrusted: the explainer is generative, so every field is optional and
/// none of them is ever used as ground truth. `label` and `confidence` are
/// informational only; the merger discards them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExplainerResult {
    /// Label the explainer claims, never authoritative
    pub label: Option<SentimentLabel>,

    /// Confidence the explainer proposes, never used by the default policy
    pub confidence: Option<f64>,

    /// Short justification for the already-decided label
    pub reason: Option<String>,

    /// Salient keywords extracted from the review
    pub keywords: Vec<String>,
}

/// Final merged result returned to the caller.
///
/// `sentiment` and `confidence` always come from the classifier whenever a
/// classifier result exists; `reason` and `keywords` come from the explainer
/// when it produced a parseable block, and from canned fallbacks otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Final sentiment class (classifier's label)
    pub sentiment: SentimentLabel,

    /// Final confidence, 0-100 (classifier's confidence)
    pub confidence: f64,

    /// Justification text shown to the user
    pub reason: String,

    /// Keywords shown to the user, possibly empty
    pub keywords: Vec<String>,

    /// Raw classifier output, passed through for support/debugging.
    /// Serialized under the historical wire name `nb_debug`.
    #[serde(rename = "nb_debug")]
    pub diagnostic: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_labels_parse_case_insensitively() {
        assert_eq!(
            SentimentLabel::from_wire("positif"),
            Some(SentimentLabel::Positive)
        );
        assert_eq!(
            SentimentLabel::from_wire("NEGATIF"),
            Some(SentimentLabel::Negative)
        );
        assert_eq!(
            SentimentLabel::from_wire(" netral "),
            Some(SentimentLabel::Neutral)
        );
        assert_eq!(SentimentLabel::from_wire("positive"), None);
        assert_eq!(SentimentLabel::from_wire(""), None);
    }

    #[test]
    fn labels_serialize_to_ui_form() {
        let json = serde_json::to_string(&SentimentLabel::Positive).unwrap();
        assert_eq!(json, "\"Positif\"");

        let back: SentimentLabel = serde_json::from_str("\"Negatif\"").unwrap();
        assert_eq!(back, SentimentLabel::Negative);
    }

    #[test]
    fn prediction_uses_nb_debug_wire_name() {
        let prediction = Prediction {
            sentiment: SentimentLabel::Neutral,
            confidence: 70.0,
            reason: "ok".to_string(),
            keywords: vec![],
            diagnostic: serde_json::json!({"raw_label": "netral"}),
        };

        let value = serde_json::to_value(&prediction).unwrap();
        assert_eq!(value["sentiment"], "Netral");
        assert_eq!(value["nb_debug"]["raw_label"], "netral");
        assert!(value.get("diagnostic").is_none());
    }
}
