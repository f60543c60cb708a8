//! Lexicon fallback classifier
//!
//! Keyword-membership heuristic used only when no classifier service is
//! configured. Its fixed confidence keeps heuristic results distinguishable
//! from model-backed ones.

use crate::classifier::{Classifier, ClassifierKind};
use aho_corasick::AhoCorasick;
use async_trait::async_trait;
use sentimen_core::{ClassifierResult, Result, SentimentLabel};

/// Fixed confidence for every lexicon verdict. Kept below the model tier's
/// missing-confidence default of 70 so the two are never confused.
pub const LEXICON_CONFIDENCE: f64 = 60.0;

pub struct LexiconClassifier {
    name: String,
    positive: AhoCorasick,
    negative: AhoCorasick,
}

impl LexiconClassifier {
    pub fn new() -> Result<Self> {
        Self::with_name("lexicon")
    }

    pub fn with_name(name: impl Into<String>) -> Result<Self> {
        // Dominant terms from the review corpus word clouds
        let positive = vec![
            "bagus",
            "mantap",
            "bantu",
            "mudah",
            "praktis",
            "cepat",
            "efisien",
            "memuaskan",
            "responsif",
            "terbaik",
            "lancar",
        ];
        let negative = vec![
            "error",
            "gagal",
            "susah",
            "lambat",
            "crash",
            "bug",
            "lemot",
            "ribet",
            "hang",
            "jelek",
        ];

        let positive = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(positive)
            .map_err(|e| {
                sentimen_core::Error::classifier(format!(
                    "failed to build positive lexicon matcher: {e}"
                ))
            })?;

        let negative = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(negative)
            .map_err(|e| {
                sentimen_core::Error::classifier(format!(
                    "failed to build negative lexicon matcher: {e}"
                ))
            })?;

        Ok(Self {
            name: name.into(),
            positive,
            negative,
        })
    }
}

#[async_trait]
impl Classifier for LexiconClassifier {
    async fn classify(&self, text: &str) -> Result<ClassifierResult> {
        let positive_hits = self.positive.find_iter(text).count();
        let negative_hits = self.negative.find_iter(text).count();

        // Ties, including zero hits on both sides, stay Neutral
        let label = if positive_hits > negative_hits {
            SentimentLabel::Positive
        } else if negative_hits > positive_hits {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };

        let raw = serde_json::json!({
            "source": "lexicon",
            "positive_hits": positive_hits,
            "negative_hits": negative_hits,
        });

        Ok(ClassifierResult::new(label, LEXICON_CONFIDENCE).with_raw(raw))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ClassifierKind {
        ClassifierKind::Lexicon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn positive_vocabulary_wins() {
        let classifier = LexiconClassifier::new().unwrap();
        let result = classifier
            .classify("Aplikasi sangat bagus dan mudah digunakan")
            .await
            .unwrap();

        assert_eq!(result.label, SentimentLabel::Positive);
        assert_eq!(result.confidence, LEXICON_CONFIDENCE);
    }

    #[tokio::test]
    async fn negative_vocabulary_wins() {
        let classifier = LexiconClassifier::new().unwrap();
        let result = classifier
            .classify("selalu error dan gagal login")
            .await
            .unwrap();

        assert_eq!(result.label, SentimentLabel::Negative);
    }

    #[tokio::test]
    async fn no_hits_defaults_to_neutral() {
        let classifier = LexiconClassifier::new().unwrap();
        let result = classifier
            .classify("update versi terbaru sudah tersedia")
            .await
            .unwrap();

        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.confidence, LEXICON_CONFIDENCE);
    }

    #[tokio::test]
    async fn matching_is_case_insensitive() {
        let classifier = LexiconClassifier::new().unwrap();
        let result = classifier.classify("MANTAP sekali").await.unwrap();
        assert_eq!(result.label, SentimentLabel::Positive);
    }

    #[tokio::test]
    async fn diagnostics_carry_hit_counts() {
        let classifier = LexiconClassifier::new().unwrap();
        let result = classifier.classify("bagus tapi lambat").await.unwrap();

        assert_eq!(result.raw["source"], "lexicon");
        assert_eq!(result.raw["positive_hits"], 1);
        assert_eq!(result.raw["negative_hits"], 1);
        assert_eq!(result.label, SentimentLabel::Neutral);
    }
}
