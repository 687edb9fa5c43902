//! Configuration types for the BinWise API client.
//!
//! # Overview
//!
//! - [`BinWiseConfig`]: immutable client settings
//! - [`BinWiseConfigBuilder`]: a builder for [`BinWiseConfig`]
//! - [`AppId`]: a validated application id
//! - [`HostUrl`]: a validated API host URL
//!
//! # Example
//!
//! ```rust
//! use binwise_api::{AppId, BinWiseConfig, HostUrl};
//!
//! let config = BinWiseConfig::builder()
//!     .app_id(AppId::new("abc123").unwrap())
//!     .host(HostUrl::new("https://test.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.host().as_ref(), "https://test.com");
//! ```

mod newtypes;

pub use newtypes::{AppId, HostUrl};

use crate::error::ConfigError;

/// Production base URL of the BinWise REST API.
pub const DEFAULT_HOST: &str = "https://api.binwise.com/v1/call/rest";

/// Configuration for the BinWise API client.
///
/// The configuration is built once and never mutated; every client created
/// from it shares the same credentials and host.
#[derive(Clone, Debug)]
pub struct BinWiseConfig {
    app_id: AppId,
    host: HostUrl,
    user_agent_prefix: Option<String>,
}

impl BinWiseConfig {
    /// Creates a new builder for constructing a `BinWiseConfig`.
    #[must_use]
    pub fn builder() -> BinWiseConfigBuilder {
        BinWiseConfigBuilder::new()
    }

    /// Returns the application id.
    #[must_use]
    pub const fn app_id(&self) -> &AppId {
        &self.app_id
    }

    /// Returns the API host.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify BinWiseConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BinWiseConfig>();
};

/// Builder for constructing [`BinWiseConfig`] instances.
///
/// # Defaults
///
/// - `host`: [`DEFAULT_HOST`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct BinWiseConfigBuilder {
    app_id: Option<AppId>,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl BinWiseConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the application id (required).
    #[must_use]
    pub fn app_id(mut self, app_id: AppId) -> Self {
        self.app_id = Some(app_id);
        self
    }

    /// Overrides the API host.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`BinWiseConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `app_id` is not set.
    pub fn build(self) -> Result<BinWiseConfig, ConfigError> {
        let app_id = self
            .app_id
            .ok_or(ConfigError::MissingRequiredField { field: "app_id" })?;

        let host = match self.host {
            Some(host) => host,
            None => HostUrl::new(DEFAULT_HOST)?,
        };

        Ok(BinWiseConfig {
            app_id,
            host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_app_id() {
        let result = BinWiseConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "app_id" })
        ));
    }

    #[test]
    fn test_builder_defaults_to_production_host() {
        let config = BinWiseConfig::builder()
            .app_id(AppId::new("abc").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.host().as_ref(), DEFAULT_HOST);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = BinWiseConfig::builder()
            .app_id(AppId::new("abc").unwrap())
            .host(HostUrl::new("https://test.com").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.app_id().as_ref(), "abc");
        assert_eq!(config.host().as_ref(), "https://test.com");
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = BinWiseConfig::builder()
            .app_id(AppId::new("abc").unwrap())
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.app_id(), config.app_id());

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("BinWiseConfig"));
        assert!(!debug_str.contains("abc"));
    }
}
