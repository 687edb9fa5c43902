//! HTTP response types for the BinWise API client.
//!
//! This module provides the [`HttpResponse`] type and the body decoding
//! rules shared by every endpoint.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::errors::DecodeError;

/// A response from the BinWise API.
///
/// `body` is the decoded data with every key in camelCase (and, for the wine
/// list endpoint, normalized). `raw_body` is the decoded data exactly as the
/// API sent it.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded, camelized body.
    pub body: Value,
    /// The decoded body as received.
    pub raw_body: Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: Value,
        raw_body: Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
            raw_body,
        }
    }

    /// Returns the `Content-Type` header value, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get("content-type")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

/// Returns `true` for media types whose body is JSON text.
///
/// Matches the legacy `text/json` used by the API as well as
/// `application/json` and structured `+json` types. Parameters such as
/// `charset` are ignored.
#[must_use]
pub fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "text/json" || essence == "application/json" || essence.ends_with("+json")
}

/// Decodes a response body.
///
/// JSON content types are parsed strictly. Empty bodies and any other content
/// type decode to `null`.
///
/// # Errors
///
/// Returns [`DecodeError`] with the raw text when a JSON body fails to parse.
pub fn decode_body(content_type: Option<&str>, text: &str) -> Result<Value, DecodeError> {
    if text.trim().is_empty() || !content_type.is_some_and(is_json_content_type) {
        return Ok(Value::Null);
    }

    serde_json::from_str(text).map_err(|e| DecodeError {
        message: e.to_string(),
        body: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_content_type_reads_first_header_value() {
        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            vec!["text/json".to_string(), "text/plain".to_string()],
        );

        let response = HttpResponse::new(200, headers, Value::Null, Value::Null);
        assert_eq!(response.content_type(), Some("text/json"));

        let response = HttpResponse::new(204, HashMap::new(), Value::Null, Value::Null);
        assert_eq!(response.content_type(), None);
    }

    #[test]
    fn test_json_content_types() {
        assert!(is_json_content_type("text/json"));
        assert!(is_json_content_type("application/json; charset=utf-8"));
        assert!(is_json_content_type("Application/JSON"));
        assert!(is_json_content_type("application/problem+json"));
        assert!(!is_json_content_type("text/html"));
        assert!(!is_json_content_type("text/plain"));
    }

    #[test]
    fn test_decode_text_json_body() {
        let body = decode_body(Some("text/json"), r#"{"list_id":"a"}"#).unwrap();
        assert_eq!(body, json!({ "list_id": "a" }));
    }

    #[test]
    fn test_decode_failure_keeps_raw_text() {
        let error = decode_body(Some("text/json"), "{not json").unwrap_err();
        assert_eq!(error.body, "{not json");
        assert!(!error.message.is_empty());
    }

    #[test]
    fn test_decode_empty_or_non_json_is_null() {
        assert_eq!(decode_body(Some("application/json"), "").unwrap(), Value::Null);
        assert_eq!(decode_body(Some("text/html"), "<p>hi</p>").unwrap(), Value::Null);
        assert_eq!(decode_body(None, "{}").unwrap(), Value::Null);
    }
}
