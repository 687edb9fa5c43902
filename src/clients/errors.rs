//! HTTP-specific error types for the BinWise API client.
//!
//! - [`UpstreamError`]: the API answered but flagged an error
//! - [`DecodeError`]: the body claimed to be JSON but did not parse
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: unified error type encompassing all of the above plus
//!   network failures
//!
//! # Example
//!
//! ```rust,ignore
//! use binwise_api::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Upstream(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Decode(e)) => println!("Bad body {}: {}", e.message, e.body),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {}", e),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when the API responds with an error status.
///
/// The message is the `error.message` field of the response body when the
/// API provides one, otherwise `"<status code> <raw body text>"`.
///
/// # Example
///
/// ```rust
/// use binwise_api::clients::UpstreamError;
///
/// let error = UpstreamError::from_response(400, r#"{"error":{"message":"bad id"}}"#);
/// assert_eq!(error.to_string(), "bad id");
///
/// let error = UpstreamError::from_response(502, "Bad Gateway");
/// assert_eq!(error.to_string(), "502 Bad Gateway");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct UpstreamError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Error message derived from the response.
    pub message: String,
}

impl UpstreamError {
    /// Builds the error from a response status and its raw body text.
    #[must_use]
    pub fn from_response(code: u16, body_text: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body_text)
            .ok()
            .and_then(|body| {
                body.get("error")
                    .and_then(|error| error.get("message"))
                    .and_then(serde_json::Value::as_str)
                    .filter(|message| !message.is_empty())
                    .map(String::from)
            })
            .unwrap_or_else(|| format!("{code} {body_text}"));

        Self { code, message }
    }
}

/// Error returned when a JSON response body cannot be parsed.
///
/// Carries the raw body text so callers can still inspect what arrived.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to decode response body: {message}")]
pub struct DecodeError {
    /// The parser's error message.
    pub message: String,
    /// The raw body text that failed to parse.
    pub body: String,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API flagged an application-level error.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// The response body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
