//! Recover code blocks and JSON values from free-form model output.

use serde_json::Value;

use crate::error::CompletionError;

/// Content of the first fenced code block tagged exactly `lang`.
///
/// The tag must end at the line break, so requesting "ts" never matches a
/// "```tsx" fence. Returns the trimmed block body, or None when the text
/// carries no such fence.
pub fn fenced_block<'a>(text: &'a str, lang: &str) -> Option<&'a str> {
    let marker = format!("```{lang}");
    let mut search = 0;
    while let Some(pos) = text[search..].find(&marker) {
        let tag_end = search + pos + marker.len();
        let rest = &text[tag_end..];
        match rest.find('\n') {
            Some(newline) if rest[..newline].trim().is_empty() => {
                let body = &text[tag_end + newline + 1..];
                let end = body.find("```").unwrap_or(body.len());
                return Some(body[..end].trim());
            }
            // A longer tag ("tsx" when asked for "ts") or an inline fence;
            // keep scanning.
            _ => search = tag_end,
        }
    }
    None
}

/// Parse a JSON value out of model output that may wrap it in prose or a
/// markdown fence.
///
/// Tries, in order: a fenced "json" block, the whole trimmed text, the
/// outermost `[..]` slice, then each balanced `{..}` span (the first one
/// containing every marker key). The failure carries the raw text.
pub fn extract_json(text: &str, markers: &[&str]) -> Result<Value, CompletionError> {
    if let Some(block) = fenced_block(text, "json") {
        if let Ok(value) = serde_json::from_str(block) {
            return Ok(value);
        }
    }

    if let Ok(value) = serde_json::from_str(text.trim()) {
        return Ok(value);
    }

    if let (Some(start), Some(end)) = (text.find('['), text.rfind(']')) {
        if start < end {
            if let Ok(value) = serde_json::from_str(&text[start..=end]) {
                return Ok(value);
            }
        }
    }

    for span in balanced_objects(text) {
        if !markers.iter().all(|m| span.contains(&format!("\"{m}\""))) {
            continue;
        }
        if let Ok(value) = serde_json::from_str(span) {
            return Ok(value);
        }
    }

    Err(CompletionError::Extraction {
        expected: "a JSON value",
        reason: "no parsable JSON object or array found".to_string(),
        raw: text.to_string(),
    })
}

/// Top-level `{..}` spans in the text. Tracks string literals and escapes
/// so braces inside strings do not unbalance the scan.
fn balanced_objects(text: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut depth = 0usize;
    let mut start = None;
    let mut in_string = false;
    let mut escaped = false;

    for (i, ch) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => {
                if depth == 0 {
                    start = Some(i);
                }
                depth += 1;
            }
            '}' if !in_string => {
                if depth > 0 {
                    depth -= 1;
                    if depth == 0 {
                        if let Some(s) = start.take() {
                            spans.push(&text[s..=i]);
                        }
                    }
                }
            }
            _ => {}
        }
    }
    spans
}
