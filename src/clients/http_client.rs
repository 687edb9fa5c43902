//! HTTP client for BinWise API communication.
//!
//! This module provides the [`HttpClient`] type, the transport shared by every
//! endpoint: it attaches credentials, converts key casing in both directions
//! and maps failures onto [`HttpError`].

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::errors::{HttpError, UpstreamError};
use crate::clients::http_request::{query_pairs, HttpMethod, HttpRequest};
use crate::clients::http_response::{decode_body, HttpResponse};
use crate::config::{BinWiseConfig, HostUrl};
use crate::normalize::{camelize, snakify};

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the query parameter carrying the application id.
pub const AUTH_PARAM: &str = "app_id";

/// HTTP client for making requests to the BinWise API.
///
/// The client handles:
/// - URL construction from the configured host
/// - The `app_id` query parameter on every request
/// - Default headers including User-Agent and `Accept: application/json`
/// - snake_case conversion of outgoing data and camelCase conversion of
///   decoded responses
///
/// No retries are attempted: every failure is returned to the caller once.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// API host the endpoint paths are joined onto.
    host: HostUrl,
    /// Credentials sent as query parameters.
    auth: Vec<(String, String)>,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &BinWiseConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}BinWise API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let auth = vec![(AUTH_PARAM.to_string(), config.app_id().as_ref().to_string())];

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            host: config.host().clone(),
            auth,
            default_headers,
        }
    }

    /// Returns the API host for this client.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL for an endpoint path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        self.host.join(path)
    }

    /// Sends an HTTP request to the BinWise API.
    ///
    /// GET requests carry the credentials followed by the snakified query
    /// parameters. POST requests carry the credentials in the query string
    /// and the snakified body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - The API answers with an error status (`Upstream`)
    /// - A JSON body fails to parse (`Decode`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);
        let query = request
            .query
            .as_ref()
            .map(|params| snakify(&Value::Object(params.clone())));
        let body = request.body.as_ref().map(snakify);

        tracing::debug!(
            endpoint = %request.path,
            method = %request.http_method,
            query = ?query,
            body = ?body,
            "Sending BinWise API request"
        );

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body_type) = &request.body_type {
            req_builder = req_builder.header("Content-Type", body_type.as_content_type());
        }

        let mut params = self.auth.clone();
        if let Some(Value::Object(query)) = &query {
            params.extend(query_pairs(query));
        }
        req_builder = req_builder.query(&params);

        if let Some(body) = &body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let text = res.text().await?;

        if !(200..=299).contains(&code) {
            let error = UpstreamError::from_response(code, &text);
            tracing::warn!(
                endpoint = %request.path,
                code,
                message = %error.message,
                "BinWise API returned an error"
            );
            return Err(error.into());
        }

        let content_type = headers
            .get("content-type")
            .and_then(|values| values.first())
            .map(String::as_str);
        let raw_body = decode_body(content_type, &text)?;
        let data = camelize(&raw_body);

        tracing::debug!(
            endpoint = %request.path,
            code,
            data = ?data,
            "Received BinWise API response"
        );

        Ok(HttpResponse::new(code, headers, data, raw_body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppId;

    fn create_test_config(host: Option<&str>) -> BinWiseConfig {
        let mut builder = BinWiseConfig::builder().app_id(AppId::new("abc123").unwrap());
        if let Some(host) = host {
            builder = builder.host(HostUrl::new(host).unwrap());
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_client_uses_default_host() {
        let client = HttpClient::new(&create_test_config(None));
        assert_eq!(client.host().as_ref(), "https://api.binwise.com/v1/call/rest");
        assert_eq!(
            client.url_for("user/json/get_restaurants"),
            "https://api.binwise.com/v1/call/rest/user/json/get_restaurants"
        );
    }

    #[test]
    fn test_client_uses_configured_host() {
        let client = HttpClient::new(&create_test_config(Some("https://test.com/")));
        assert_eq!(client.url_for("/a/b"), "https://test.com/a/b");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config(None));
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("BinWise API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = BinWiseConfig::builder()
            .app_id(AppId::new("abc123").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config(None));
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
