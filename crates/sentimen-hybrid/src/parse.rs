//! Best-effort parsing of explainer output
//!
//! The explainer is generative, so its output is free text that usually,
//! but not always, contains one JSON object. Extraction failure is an
//! expected outcome feeding the fallback branch, not an exceptional one.

use sentimen_core::{Error, ExplainerResult, Result, SentimentLabel};
use serde_json::Value;

/// Find the first balanced top-level `{...}` block in `text`.
///
/// Scanning is string- and escape-aware so braces inside JSON string
/// literals do not unbalance the depth count.
pub fn extract_block(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + i + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Parse raw explainer output into an [`ExplainerResult`].
///
/// Strategy: take the first balanced block if one exists, otherwise try the
/// whole trimmed text when it looks like an object. Fields are extracted
/// duck-typed: an absent or mistyped field becomes `None`/empty instead of
/// failing the parse, matching how little this output can be trusted.
pub fn parse_explainer_output(text: &str) -> Result<ExplainerResult> {
    let trimmed = text.trim();
    let candidate = match extract_block(text) {
        Some(block) => block,
        None if trimmed.starts_with('{') => trimmed,
        None => {
            return Err(Error::explainer_parse(
                "no structured block in explainer output",
            ))
        }
    };

    let value: Value = serde_json::from_str(candidate)
        .map_err(|e| Error::explainer_parse(format!("structured block is not valid JSON: {e}")))?;

    let obj = value
        .as_object()
        .ok_or_else(|| Error::explainer_parse("structured block is not an object"))?;

    let label = obj
        .get("sentiment")
        .and_then(|v| serde_json::from_value::<SentimentLabel>(v.clone()).ok());

    let keywords = obj
        .get("keywords")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    Ok(ExplainerResult {
        label,
        confidence: obj.get("confidence").and_then(Value::as_f64),
        reason: obj
            .get("reason")
            .and_then(Value::as_str)
            .map(str::to_string),
        keywords,
    })
}
