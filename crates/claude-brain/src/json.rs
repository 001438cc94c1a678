//! JSON extraction from model completions.
//!
//! Analysis completions are requested as bare JSON, but models sometimes wrap
//! the object in markdown fences, lead in with prose, or append trailing
//! braces. These helpers recover the object before parsing.

/// Extract JSON from a completion that may contain markdown or other text.
pub(crate) fn extract_json(response: &str) -> &str {
    let trimmed = response.trim();

    // If it starts with {, extract balanced JSON object
    if trimmed.starts_with('{') {
        return extract_balanced_json(trimmed);
    }

    // Try to find JSON in markdown code block
    if let Some(start) = trimmed.find("```json") {
        let json_start = start + 7;
        if let Some(end) = trimmed[json_start..].find("```") {
            let extracted = trimmed[json_start..json_start + end].trim();
            return extract_balanced_json(extracted);
        }
    }

    // Try to find JSON in generic code block
    if let Some(start) = trimmed.find("```") {
        let after_backticks = &trimmed[start + 3..];
        // Skip optional language identifier
        let json_start = after_backticks.find('\n').map(|i| i + 1).unwrap_or(0);
        if let Some(end) = after_backticks[json_start..].find("```") {
            let extracted = after_backticks[json_start..json_start + end].trim();
            return extract_balanced_json(extracted);
        }
    }

    // Try to find a JSON object in the text
    if let Some(start) = trimmed.find('{') {
        return extract_balanced_json(&trimmed[start..]);
    }

    trimmed
}

/// Extract a balanced JSON object from a string that starts with '{'.
///
/// This handles cases where the model adds trailing characters like extra braces.
/// For example: `{"sentiment": "positive"}}}` -> `{"sentiment": "positive"}`
fn extract_balanced_json(s: &str) -> &str {
    if !s.starts_with('{') {
        return s;
    }

    let mut depth = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in s.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => {
                escape_next = true;
            }
            '"' => {
                in_string = !in_string;
            }
            '{' if !in_string => {
                depth += 1;
            }
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    // Found the matching closing brace
                    return &s[..=i];
                }
            }
            _ => {}
        }
    }

    // If we didn't find balanced braces, return the original
    s
}
