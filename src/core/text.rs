//! Text payload normalization and stats.
//!
//! The text view is the permissive end of dispatch: it must take whatever
//! payload shape the backend produced (a string, an object with a `content`
//! field, an array, anything else) and turn it into displayable text.
//! Non-string payloads are serialized as pretty-printed JSON so the output
//! is always syntactically valid structured text.

use serde_json::Value;

use crate::api::TextPayload;

/// A payload normalized for the text view.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDocument {
    pub content: String,
    /// Backend-reported timestamp, when the payload carried one.
    pub last_update: Option<String>,
}

/// Character / word / paragraph counts over normalized content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    /// Unicode scalar values, not bytes.
    pub characters: usize,
    /// Maximal runs of non-whitespace.
    pub words: usize,
    /// Non-empty paragraphs (empty ones still *render*, as a NBSP).
    pub paragraphs: usize,
}

/// Normalizes any payload into a `TextDocument` per the dispatch contract.
pub fn normalize(payload: &Value) -> TextDocument {
    // The about endpoint's {content, last_update} shape gets first crack.
    if let Ok(text) = serde_json::from_value::<TextPayload>(payload.clone()) {
        return TextDocument {
            content: text.content,
            last_update: text.last_update,
        };
    }
    let content = match payload {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => pretty(other),
            })
            .collect::<Vec<_>>()
            .join("\n\n"),
        other => pretty(other),
    };
    TextDocument {
        content,
        last_update: None,
    }
}

fn pretty(value: &Value) -> String {
    // Pretty-printing a Value cannot fail; fall back to compact just in case.
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Splits on line breaks. Every line is a paragraph, including empty ones -
/// the renderer substitutes a non-breaking space so they never collapse.
pub fn paragraphs(content: &str) -> Vec<&str> {
    content.split('\n').collect()
}

pub fn stats(content: &str) -> TextStats {
    TextStats {
        characters: content.chars().count(),
        words: content.split_whitespace().count(),
        paragraphs: content
            .split('\n')
            .filter(|p| !p.trim().is_empty())
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_plain_string() {
        let doc = normalize(&json!("hello world"));
        assert_eq!(doc.content, "hello world");
        assert_eq!(doc.last_update, None);
    }

    #[test]
    fn test_normalize_content_object_with_timestamp() {
        let doc = normalize(&json!({"content": "a\nb", "last_update": "2024-01-01"}));
        assert_eq!(doc.content, "a\nb");
        assert_eq!(doc.last_update.as_deref(), Some("2024-01-01"));

        let split = paragraphs(&doc.content);
        assert_eq!(split, vec!["a", "b"]);
        let counted = stats(&doc.content);
        assert_eq!(counted.words, 2);
        assert_eq!(counted.paragraphs, 2);
        assert_eq!(counted.characters, 3);
    }

    #[test]
    fn test_normalize_array_one_paragraph_per_element() {
        let doc = normalize(&json!(["first", {"k": 1}, "last"]));
        let parts: Vec<&str> = doc.content.split("\n\n").collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "first");
        assert_eq!(parts[2], "last");
        // Object elements serialize to valid JSON.
        let reparsed: Value = serde_json::from_str(parts[1]).unwrap();
        assert_eq!(reparsed, json!({"k": 1}));
    }

    #[test]
    fn test_normalize_arbitrary_object_is_valid_json_text() {
        let doc = normalize(&json!({"unexpected": [1, 2], "shape": true}));
        let reparsed: Value = serde_json::from_str(&doc.content).unwrap();
        assert_eq!(reparsed, json!({"unexpected": [1, 2], "shape": true}));
    }

    #[test]
    fn test_paragraphs_keep_empty_lines() {
        assert_eq!(paragraphs("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(paragraphs(""), vec![""]);
    }

    #[test]
    fn test_stats_counting_rules() {
        let counted = stats("one  two\n\n  \nthree");
        assert_eq!(counted.words, 3);
        // Blank and whitespace-only lines are not counted as paragraphs.
        assert_eq!(counted.paragraphs, 2);

        // Characters are Unicode scalars, not bytes.
        assert_eq!(stats("héllo").characters, 5);
        assert_eq!(stats("").characters, 0);
        assert_eq!(stats("").words, 0);
        assert_eq!(stats("").paragraphs, 0);
    }
}
