//! Word-weight normalization
//!
//! Turns raw frequency/TF-IDF scores into bounded display sizes for the
//! word-cloud view. Pure function: no shared state, deterministic for a
//! fixed input, safe to call concurrently.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Smallest rendered size
pub const MIN_SIZE: f64 = 20.0;

/// Largest rendered size
pub const MAX_SIZE: f64 = 120.0;

// Concave curve keeps low-frequency terms legible instead of collapsing
// them toward the minimum size.
const COMPRESSION_EXPONENT: f64 = 0.4;

/// A term with its unnormalized frequency or weighted-frequency score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordStat {
    pub term: String,
    pub raw_score: f64,
}

impl WordStat {
    pub fn new(term: impl Into<String>, raw_score: f64) -> Self {
        Self {
            term: term.into(),
            raw_score,
        }
    }
}

/// A term mapped into the fixed display range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedWord {
    pub term: String,
    pub size: f64,
}

/// Map raw scores into display sizes.
///
/// Keeps the `top_k` highest-scoring entries (stable sort, ties broken by
/// original order), min-max normalizes over the kept set, compresses the
/// dynamic range with a concave power curve, and maps linearly into
/// [`MIN_SIZE`, `MAX_SIZE`]. The mapping is monotonic non-decreasing in
/// `raw_score`. A kept set with a single shared score maps entirely to
/// [`MIN_SIZE`].
pub fn normalize(stats: &[WordStat], top_k: usize) -> Vec<RenderedWord> {
    if stats.is_empty() || top_k == 0 {
        return Vec::new();
    }

    let mut kept: Vec<&WordStat> = stats.iter().collect();
    kept.sort_by(|a, b| {
        b.raw_score
            .partial_cmp(&a.raw_score)
            .unwrap_or(Ordering::Equal)
    });
    kept.truncate(top_k);

    // Sorted descending, so the bounds sit at the ends
    let max = kept[0].raw_score;
    let min = kept[kept.len() - 1].raw_score;
    let range = if max == min { 1.0 } else { max - min };

    kept.into_iter()
        .map(|stat| {
            let normalized = ((stat.raw_score - min) / range).clamp(0.0, 1.0);
            let compressed = normalized.powf(COMPRESSION_EXPONENT);
            RenderedWord {
                term: stat.term.clone(),
                size: MIN_SIZE + compressed * (MAX_SIZE - MIN_SIZE),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(pairs: &[(&str, f64)]) -> Vec<WordStat> {
        pairs
            .iter()
            .map(|(term, score)| WordStat::new(*term, *score))
            .collect()
    }

    #[test]
    fn sizes_are_monotonic_in_raw_score() {
        let input = stats(&[("a", 3.0), ("b", 10.0), ("c", 1.0), ("d", 7.0)]);
        let rendered = normalize(&input, 10);

        // Output is sorted descending by score, so sizes must be
        // non-increasing down the list
        for pair in rendered.windows(2) {
            assert!(pair[0].size >= pair[1].size);
        }
        assert_eq!(rendered[0].term, "b");
        assert_eq!(rendered[0].size, MAX_SIZE);
        assert_eq!(rendered[3].term, "c");
        assert_eq!(rendered[3].size, MIN_SIZE);
    }

    #[test]
    fn top_k_keeps_the_highest_scoring_entries() {
        let input = stats(&[("low", 1.0), ("high", 9.0), ("mid", 5.0)]);
        let rendered = normalize(&input, 2);

        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].term, "high");
        assert_eq!(rendered[1].term, "mid");
    }

    #[test]
    fn ties_keep_original_order() {
        let input = stats(&[("first", 5.0), ("second", 5.0), ("third", 5.0)]);
        let rendered = normalize(&input, 2);

        assert_eq!(rendered[0].term, "first");
        assert_eq!(rendered[1].term, "second");
    }

    #[test]
    fn equal_scores_share_one_size_without_division_by_zero() {
        let input = stats(&[("a", 4.0), ("b", 4.0), ("c", 4.0)]);
        let rendered = normalize(&input, 10);

        assert_eq!(rendered.len(), 3);
        for word in &rendered {
            assert_eq!(word.size, MIN_SIZE);
        }
    }

    #[test]
    fn compression_lifts_low_scores_above_linear() {
        let input = stats(&[("max", 10.0), ("quarter", 2.5), ("min", 0.0)]);
        let rendered = normalize(&input, 10);

        // Linear mapping would put 2.5/10 at 45.0; the concave curve lifts it
        let quarter = rendered.iter().find(|w| w.term == "quarter").unwrap();
        let linear = MIN_SIZE + 0.25 * (MAX_SIZE - MIN_SIZE);
        assert!(quarter.size > linear);
        assert!(quarter.size < MAX_SIZE);
    }

    #[test]
    fn empty_input_and_zero_top_k_yield_nothing() {
        assert!(normalize(&[], 10).is_empty());
        assert!(normalize(&stats(&[("a", 1.0)]), 0).is_empty());
    }

    #[test]
    fn deterministic_across_calls() {
        let input = stats(&[("a", 2.0), ("b", 8.0), ("c", 5.0)]);
        assert_eq!(normalize(&input, 3), normalize(&input, 3));
    }
}
