//! Error types returned by [`BinWiseClient`](super::BinWiseClient).
//!
//! - [`BinWiseError::InvalidArgument`]: a required argument was missing; raised
//!   before any network activity
//! - [`BinWiseError::Http`]: the request was sent and failed (network,
//!   upstream error status, or undecodable body)
//!
//! # Example
//!
//! ```rust,ignore
//! use binwise_api::{BinWiseError, HttpError};
//!
//! match client.list_wine_list(list_id).await {
//!     Ok(response) => println!("Pages: {}", response.body),
//!     Err(BinWiseError::InvalidArgument(e)) => println!("Bad input: {e}"),
//!     Err(BinWiseError::Http(HttpError::Upstream(e))) => println!("API said: {e}"),
//!     Err(BinWiseError::Http(e)) => println!("Request failed: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use crate::error::ConfigError;
use thiserror::Error;

/// A required argument was missing or invalid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidArgumentError {
    /// The client configuration was invalid (e.g. empty application id).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `list_published_lists` was called without a restaurant id.
    #[error("You must pass a Restaurant ID as first parameter.")]
    MissingRestaurantId,

    /// `list_wine_list` was called without a list id.
    #[error("You must pass a List ID as first parameter.")]
    MissingListId,
}

/// Error type for BinWise API operations.
#[derive(Debug, Error)]
pub enum BinWiseError {
    /// A required argument was missing; nothing was sent.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl From<ConfigError> for BinWiseError {
    fn from(error: ConfigError) -> Self {
        Self::InvalidArgument(error.into())
    }
}
