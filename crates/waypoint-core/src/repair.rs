//! Best-effort JSON extraction from raw model completions.
//!
//! Generators are asked to respond with only JSON, but real completions
//! regularly arrive wrapped in markdown code fences or surrounded by prose.
//! [`repair`] recovers the JSON object in two tiers: a strict parse of the
//! whole text, then a greedy parse of the first-`{`-to-last-`}` span. It
//! deliberately stops there — trailing commas, single quotes, and
//! unterminated structures fail closed rather than being patched up.

use serde_json::Value;

use crate::error::{Result, RoadmapError};

/// Maximum number of characters of raw completion carried in error context.
const SNIPPET_LEN: usize = 200;

/// Extracts a JSON value from a raw model completion.
///
/// Returns [`RoadmapError::MalformedResponse`] when neither the full text
/// nor any `{...}` span inside it parses as JSON.
///
/// # Examples
///
/// ```rust
/// use waypoint_core::repair::repair;
///
/// let value = repair("```json\n{\"title\":\"A\",\"steps\":[]}\n```").unwrap();
/// assert_eq!(value["title"], "A");
/// ```
pub fn repair(raw: &str) -> Result<Value> {
    // Common case: the model honored the JSON-only instruction.
    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        return Ok(value);
    }

    // Fall back to the widest brace-delimited span. This recovers fenced
    // code blocks and leading/trailing prose in one pass.
    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) {
        if start < end {
            if let Ok(value) = serde_json::from_str::<Value>(&raw[start..=end]) {
                return Ok(value);
            }
        }
    }

    Err(RoadmapError::MalformedResponse {
        snippet: truncate_snippet(raw),
    })
}

/// Truncates raw text to a loggable snippet on a character boundary.
fn truncate_snippet(raw: &str) -> String {
    match raw.char_indices().nth(SNIPPET_LEN) {
        Some((idx, _)) => raw[..idx].to_string(),
        None => raw.to_string(),
    }
}
