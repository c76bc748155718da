//! Payloads — the JSON-shaped mapping exchanged with services.
//!
//! A payload is a string-keyed map of arbitrary JSON values. Requests build
//! one either from query pairs (flat, string values only) or from a JSON
//! object body (any value shape).

use serde_json::{Map, Value};

/// Input and output of a service call.
pub type Payload = Map<String, Value>;

/// Build a payload from decoded query pairs.
///
/// Only the **first** value of a repeated key is kept; later values are
/// dropped rather than collected into a list.
pub fn from_query_pairs<I, K, V>(pairs: I) -> Payload
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut payload = Payload::new();
    for (key, value) in pairs {
        payload
            .entry(key.into())
            .or_insert_with(|| Value::String(value.into()));
    }
    payload
}

/// Decode a request body as a single JSON object.
///
/// # Errors
///
/// Returns the underlying [`serde_json::Error`] when the body is not
/// well-formed JSON, is not an object, or has trailing content.
pub fn from_json_body(body: &[u8]) -> Result<Payload, serde_json::Error> {
    serde_json::from_slice(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_keep_first_value_of_repeated_key() {
        let payload = from_query_pairs([("a", "1"), ("a", "2"), ("b", "3")]);
        assert_eq!(Value::Object(payload), json!({"a": "1", "b": "3"}));
    }

    #[test]
    fn should_build_empty_payload_without_pairs() {
        let payload = from_query_pairs(Vec::<(String, String)>::new());
        assert!(payload.is_empty());
    }

    #[test]
    fn should_keep_empty_values() {
        let payload = from_query_pairs([("flag", "")]);
        assert_eq!(payload.get("flag"), Some(&json!("")));
    }

    #[test]
    fn should_decode_object_with_mixed_values() {
        let body = br#"{"a": 1, "b": "x", "c": [true, null], "d": {"e": 2.5}}"#;
        let payload = from_json_body(body).unwrap();
        assert_eq!(payload.len(), 4);
        assert_eq!(payload["c"], json!([true, null]));
    }

    #[test]
    fn should_reject_malformed_json() {
        assert!(from_json_body(b"{invalid json").is_err());
    }

    #[test]
    fn should_reject_non_object_json() {
        assert!(from_json_body(b"[1, 2]").is_err());
        assert!(from_json_body(b"\"text\"").is_err());
        assert!(from_json_body(b"null").is_err());
    }

    #[test]
    fn should_reject_empty_body() {
        assert!(from_json_body(b"").is_err());
    }
}
