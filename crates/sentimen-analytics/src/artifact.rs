//! Precomputed analytics artifact
//!
//! The dashboard consumes an offline-produced JSON artifact: aggregate
//! totals (opaque, passed through as-is) and per-category term statistics
//! that feed the word-cloud view. Loaded once at startup; never written.

use crate::wordcloud::{normalize, RenderedWord, WordStat};
use sentimen_core::{Result, SentimentLabel};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Offline-produced analytics data
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsArtifact {
    /// Dashboard totals and rankings, consumed as opaque data
    #[serde(default)]
    pub summary: Value,

    /// Per-sentiment-category term statistics
    #[serde(default)]
    pub categories: Vec<CategoryStats>,
}

/// Term statistics for one sentiment category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStats {
    pub label: SentimentLabel,

    /// How many reviews fed this category
    #[serde(default)]
    pub review_count: u64,

    #[serde(default)]
    pub terms: Vec<WordStat>,
}

/// One category of the word-cloud view, ready for rendering
#[derive(Debug, Clone, Serialize)]
pub struct RenderedCategory {
    pub label: SentimentLabel,
    pub review_count: u64,
    pub words: Vec<RenderedWord>,
}

impl AnalyticsArtifact {
    /// Load the artifact from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let artifact: Self = serde_json::from_str(&content)?;
        info!(
            path = %path.as_ref().display(),
            categories = artifact.categories.len(),
            "analytics artifact loaded"
        );
        Ok(artifact)
    }

    /// Run every category's term stats through the word-weight normalizer
    pub fn render_word_clouds(&self, top_k: usize) -> Vec<RenderedCategory> {
        self.categories
            .iter()
            .map(|category| RenderedCategory {
                label: category.label,
                review_count: category.review_count,
                words: normalize(&category.terms, top_k),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordcloud::{MAX_SIZE, MIN_SIZE};

    const SAMPLE: &str = r#"{
        "summary": { "total_reviews": 8480, "top_issue": "login" },
        "categories": [
            {
                "label": "Positif",
                "review_count": 2840,
                "terms": [
                    { "term": "bagus", "raw_score": 412.0 },
                    { "term": "mantap", "raw_score": 230.0 },
                    { "term": "mudah", "raw_score": 198.0 }
                ]
            },
            {
                "label": "Negatif",
                "review_count": 1460,
                "terms": [
                    { "term": "error", "raw_score": 511.0 }
                ]
            }
        ]
    }"#;

    #[test]
    fn artifact_parses_and_summary_stays_opaque() {
        let artifact: AnalyticsArtifact = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(artifact.summary["total_reviews"], 8480);
        assert_eq!(artifact.categories.len(), 2);
        assert_eq!(artifact.categories[0].label, SentimentLabel::Positive);
        assert_eq!(artifact.categories[0].review_count, 2840);
    }

    #[test]
    fn rendering_applies_the_normalizer_per_category() {
        let artifact: AnalyticsArtifact = serde_json::from_str(SAMPLE).unwrap();
        let rendered = artifact.render_word_clouds(2);

        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].words.len(), 2);
        assert_eq!(rendered[0].words[0].term, "bagus");
        assert_eq!(rendered[0].words[0].size, MAX_SIZE);

        // Single-term category degenerates to the shared minimum size
        assert_eq!(rendered[1].words.len(), 1);
        assert_eq!(rendered[1].words[0].size, MIN_SIZE);
    }

    #[test]
    fn missing_fields_default() {
        let artifact: AnalyticsArtifact = serde_json::from_str("{}").unwrap();
        assert!(artifact.summary.is_null());
        assert!(artifact.categories.is_empty());
        assert!(artifact.render_word_clouds(10).is_empty());
    }
}
