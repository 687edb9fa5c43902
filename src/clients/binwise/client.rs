//! BinWise API client.
//!
//! This module provides the [`BinWiseClient`] type, the public surface for
//! the restaurant and wine list endpoints.

use serde_json::{Map, Value};

use crate::clients::binwise::{BinWiseError, Endpoint, InvalidArgumentError};
use crate::clients::{HttpClient, HttpError, HttpResponse};
use crate::config::{AppId, BinWiseConfig, HostUrl};
use crate::normalize::normalize_wine_list;

/// Client for the BinWise REST API.
///
/// Holds only immutable configuration, so any number of calls may run
/// concurrently on one client.
///
/// # Thread Safety
///
/// `BinWiseClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use binwise_api::BinWiseClient;
///
/// let client = BinWiseClient::new("your-app-id")?;
///
/// let restaurants = client.list_restaurants(None).await?;
/// let lists = client.list_published_lists("restaurant-id").await?;
/// let wine_list = client.list_wine_list("list-id").await?;
///
/// // Normalized pages, camelCase keys
/// println!("{}", wine_list.body);
/// // Exactly what the API returned
/// println!("{}", wine_list.raw_body);
/// ```
#[derive(Debug)]
pub struct BinWiseClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// Configuration the client was built from.
    config: BinWiseConfig,
}

// Verify BinWiseClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BinWiseClient>();
};

impl BinWiseClient {
    /// Creates a client for the production host.
    ///
    /// # Errors
    ///
    /// Returns [`BinWiseError::InvalidArgument`] if `app_id` is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use binwise_api::{BinWiseClient, BinWiseError};
    ///
    /// let client = BinWiseClient::new("abc123").unwrap();
    /// assert_eq!(client.host().as_ref(), "https://api.binwise.com/v1/call/rest");
    ///
    /// assert!(matches!(BinWiseClient::new(""), Err(BinWiseError::InvalidArgument(_))));
    /// ```
    pub fn new(app_id: impl Into<String>) -> Result<Self, BinWiseError> {
        let config = BinWiseConfig::builder().app_id(AppId::new(app_id)?).build()?;
        Ok(Self::with_config(&config))
    }

    /// Creates a client against a custom host.
    ///
    /// # Errors
    ///
    /// Returns [`BinWiseError::InvalidArgument`] if `app_id` is empty or
    /// `host` is not a valid URL.
    pub fn with_host(
        app_id: impl Into<String>,
        host: impl Into<String>,
    ) -> Result<Self, BinWiseError> {
        let config = BinWiseConfig::builder()
            .app_id(AppId::new(app_id)?)
            .host(HostUrl::new(host)?)
            .build()?;
        Ok(Self::with_config(&config))
    }

    /// Creates a client from a prepared configuration.
    #[must_use]
    pub fn with_config(config: &BinWiseConfig) -> Self {
        tracing::debug!(host = %config.host().as_ref(), "Creating BinWise client");

        Self {
            http_client: HttpClient::new(config),
            config: config.clone(),
        }
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &BinWiseConfig {
        &self.config
    }

    /// Returns the API host.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        self.config.host()
    }

    /// Lists the restaurants available to this application.
    ///
    /// `options` is an open bag of filters (e.g. `pageSize`) sent as
    /// snake_case query parameters. `None` sends only the credentials.
    ///
    /// # Errors
    ///
    /// Returns [`BinWiseError::Http`] if the request fails.
    pub async fn list_restaurants(
        &self,
        options: Option<&Map<String, Value>>,
    ) -> Result<HttpResponse, BinWiseError> {
        let options = options.cloned().unwrap_or_default();
        self.request(Endpoint::restaurants(options)).await
    }

    /// Lists the published wine lists of a restaurant.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError::MissingRestaurantId`] without sending
    /// anything if `restaurant_id` is empty, or [`BinWiseError::Http`] if the
    /// request fails.
    pub async fn list_published_lists(
        &self,
        restaurant_id: &str,
    ) -> Result<HttpResponse, BinWiseError> {
        if restaurant_id.trim().is_empty() {
            return Err(InvalidArgumentError::MissingRestaurantId.into());
        }
        self.request(Endpoint::published_lists(restaurant_id)).await
    }

    /// Fetches a wine list and normalizes it into pages.
    ///
    /// On success `body` holds the normalized page sequence (see
    /// [`normalize_wine_list`]) while `raw_body` is left as received. An
    /// absent body is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError::MissingListId`] without sending
    /// anything if `list_id` is empty, or [`BinWiseError::Http`] if the
    /// request fails.
    pub async fn list_wine_list(&self, list_id: &str) -> Result<HttpResponse, BinWiseError> {
        if list_id.trim().is_empty() {
            return Err(InvalidArgumentError::MissingListId.into());
        }

        let mut response = self.request(Endpoint::wine_list(list_id)).await?;
        if !response.body.is_null() {
            response.body = normalize_wine_list(response.body);
        }
        Ok(response)
    }

    /// Sends any endpoint through the transport.
    ///
    /// # Errors
    ///
    /// Returns [`BinWiseError::Http`] if the request is invalid or fails.
    pub async fn request(&self, endpoint: Endpoint) -> Result<HttpResponse, BinWiseError> {
        let request = endpoint.into_request().map_err(HttpError::from)?;
        Ok(self.http_client.request(request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_new_rejects_empty_app_id() {
        let result = BinWiseClient::new("");
        assert!(matches!(
            result,
            Err(BinWiseError::InvalidArgument(InvalidArgumentError::Config(
                ConfigError::EmptyAppId
            )))
        ));
    }

    #[test]
    fn test_with_host_overrides_host() {
        let client = BinWiseClient::with_host("abc", "https://test.com").unwrap();
        assert_eq!(client.host().as_ref(), "https://test.com");
        assert_eq!(client.config().app_id().as_ref(), "abc");
    }

    #[test]
    fn test_with_host_rejects_invalid_host() {
        let result = BinWiseClient::with_host("abc", "test.com");
        assert!(matches!(
            result,
            Err(BinWiseError::InvalidArgument(InvalidArgumentError::Config(
                ConfigError::InvalidHostUrl { .. }
            )))
        ));
    }

    #[tokio::test]
    async fn test_missing_restaurant_id_fails_fast() {
        let client = BinWiseClient::new("abc").unwrap();
        let result = client.list_published_lists("").await;
        assert!(matches!(
            result,
            Err(BinWiseError::InvalidArgument(InvalidArgumentError::MissingRestaurantId))
        ));
    }

    #[tokio::test]
    async fn test_missing_list_id_fails_fast() {
        let client = BinWiseClient::new("abc").unwrap();
        let result = client.list_wine_list("  ").await;
        let error = result.unwrap_err();
        assert!(error.to_string().contains("List ID"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BinWiseClient>();
    }
}
