//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated BinWise application id.
///
/// The id is sent with every request as the `app_id` query parameter. It is
/// masked in debug output so it does not leak into logs.
///
/// # Example
///
/// ```rust
/// use binwise_api::AppId;
///
/// let app_id = AppId::new("abc123").unwrap();
/// assert_eq!(app_id.as_ref(), "abc123");
/// assert_eq!(format!("{:?}", app_id), "AppId(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AppId(String);

impl AppId {
    /// Creates a new validated application id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAppId`] if the id is empty or whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ConfigError::EmptyAppId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for AppId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppId(*****)")
    }
}

/// A validated API host URL.
///
/// The URL must carry a scheme and a host name. It may include a base path
/// (the production host does). Trailing slashes are stripped so endpoint
/// paths can be joined with a single separator.
///
/// # Example
///
/// ```rust
/// use binwise_api::HostUrl;
///
/// let url = HostUrl::new("https://api.binwise.com/v1/call/rest/").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), Some("api.binwise.com"));
/// assert_eq!(url.join("user/json/get_restaurants"),
///     "https://api.binwise.com/v1/call/rest/user/json/get_restaurants");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string; an IPv6 literal
        // ends at its closing bracket
        let remainder = &url[host_start..];
        let host_end = if remainder.starts_with('[') {
            let close = remainder
                .find(']')
                .filter(|&close| close > 1)
                .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;
            host_start + close + 1
        } else {
            remainder
                .find([':', '/', '?', '#'])
                .map_or(url.len(), |i| host_start + i)
        };

        if host_end == host_start {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }

    /// Joins an endpoint path onto this host with exactly one `/` between them.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_id_rejects_empty_string() {
        assert!(matches!(AppId::new(""), Err(ConfigError::EmptyAppId)));
        assert!(matches!(AppId::new("   "), Err(ConfigError::EmptyAppId)));
    }

    #[test]
    fn test_app_id_masks_value_in_debug() {
        let app_id = AppId::new("super-secret-id").unwrap();
        let debug_output = format!("{app_id:?}");
        assert_eq!(debug_output, "AppId(*****)");
        assert!(!debug_output.contains("super-secret-id"));
    }

    #[test]
    fn test_host_url_validates_format() {
        let url = HostUrl::new("https://api.binwise.com/v1/call/rest").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), Some("api.binwise.com"));

        let url = HostUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), Some("127.0.0.1"));
    }

    #[test]
    fn test_host_url_rejects_invalid() {
        assert!(HostUrl::new("api.binwise.com").is_err());
        assert!(HostUrl::new("https://").is_err());
        assert!(HostUrl::new("://api.binwise.com").is_err());
        assert!(HostUrl::new("https:///path").is_err());
    }

    #[test]
    fn test_host_url_join_uses_single_separator() {
        let url = HostUrl::new("https://test.com/").unwrap();
        assert_eq!(url.as_ref(), "https://test.com");
        assert_eq!(url.join("a/b"), "https://test.com/a/b");
        assert_eq!(url.join("/a/b"), "https://test.com/a/b");
    }

    #[test]
    fn test_host_url_keeps_ipv6_literal_whole() {
        let url = HostUrl::new("http://[::1]:8080/v1/call/rest").unwrap();
        assert_eq!(url.host_name(), Some("[::1]"));
        assert_eq!(url.join("x"), "http://[::1]:8080/v1/call/rest/x");

        let url = HostUrl::new("http://[2001:db8::7]").unwrap();
        assert_eq!(url.host_name(), Some("[2001:db8::7]"));

        assert!(HostUrl::new("http://[::1").is_err());
        assert!(HostUrl::new("http://[]:80").is_err());
    }
}
