//! Turning the generator's raw text into a JSON document.

use crate::error::{PdeError, Result};
use serde_json::Value;

const FENCE: &str = "```";

/// Removes Markdown code fences around a reply. When the reply starts with a fence the
/// longest chunk between fences is kept and a leading language tag line (`json`) dropped.
pub fn strip_code_fences(content: &str) -> String {
    let content = content.trim();
    if !content.starts_with(FENCE) {
        return content.to_string();
    }
    let longest = content
        .split(FENCE)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .fold("", |best, chunk| if chunk.len() > best.len() { chunk } else { best });
    let body = match longest.split_once('\n') {
        Some((tag, rest)) if !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric()) => {
            rest
        }
        _ => longest,
    };
    body.trim().to_string()
}

/// Parses a reply into a JSON object; anything else is an `UpstreamFormat` error for `name`.
pub fn parse_response(name: &str, content: &str) -> Result<Value> {
    let stripped = strip_code_fences(content);
    match serde_json::from_str::<Value>(&stripped) {
        Ok(value) if value.is_object() => Ok(value),
        _ => Err(PdeError::UpstreamFormat {
            name: name.to_string(),
            raw: stripped,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_reply_is_kept() {
        assert_eq!(strip_code_fences("  {\"a\": 1}\n"), "{\"a\": 1}");
    }

    #[test]
    fn test_fenced_reply() {
        let reply = "```json\n{\"metadata\": {\"name\": \"heat\"}}\n```";
        assert_eq!(strip_code_fences(reply), "{\"metadata\": {\"name\": \"heat\"}}");
        let reply = "```\n{\"pdes\": []}\n```\n";
        assert_eq!(strip_code_fences(reply), "{\"pdes\": []}");
    }

    #[test]
    fn test_longest_chunk_wins() {
        let reply = "```json\n{\"a\": 1}\n```\nsome words\n```json\n{\"a\": 1, \"b\": [1, 2, 3]}\n```";
        assert_eq!(strip_code_fences(reply), "{\"a\": 1, \"b\": [1, 2, 3]}");
    }

    #[test]
    fn test_parse_response() {
        let value = parse_response("heat", "```json\n{\"parameters\": {\"alpha\": null}}\n```").unwrap();
        assert_eq!(value, json!({"parameters": {"alpha": null}}));
    }

    #[test]
    fn test_parse_response_errors() {
        let error = parse_response("wave", "Sure! Here is the JSON you asked for.").unwrap_err();
        match error {
            PdeError::UpstreamFormat { name, raw } => {
                assert_eq!(name, "wave");
                assert_eq!(raw, "Sure! Here is the JSON you asked for.");
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert!(matches!(
            parse_response("list", "[1, 2]"),
            Err(PdeError::UpstreamFormat { .. })
        ));
    }
}
