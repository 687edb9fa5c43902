//! # BinWise API Rust client
//!
//! An async client for the BinWise restaurant and wine list REST API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`BinWiseConfig`] and [`BinWiseConfigBuilder`]
//! - Validated newtypes for the application id and API host
//! - [`BinWiseClient`] with `list_restaurants`, `list_published_lists` and
//!   `list_wine_list`
//! - Transparent key casing: snake_case on the wire, camelCase for callers
//! - Wine list normalization into `pages -> categories -> folders`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use binwise_api::BinWiseClient;
//! use serde_json::json;
//!
//! let client = BinWiseClient::new("your-app-id")?;
//!
//! let filters = json!({ "pageSize": 200 });
//! let restaurants = client.list_restaurants(filters.as_object()).await?;
//!
//! let wine_list = client.list_wine_list("list-id").await?;
//! for page in wine_list.body.as_array().into_iter().flatten() {
//!     println!("{page}");
//! }
//! ```
//!
//! ## Custom Host
//!
//! ```rust
//! use binwise_api::{AppId, BinWiseClient, BinWiseConfig, HostUrl};
//!
//! let config = BinWiseConfig::builder()
//!     .app_id(AppId::new("your-app-id").unwrap())
//!     .host(HostUrl::new("https://staging.example.com/v1/call/rest").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build()
//!     .unwrap();
//!
//! let client = BinWiseClient::with_config(&config);
//! assert_eq!(client.host().host_name(), Some("staging.example.com"));
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: missing ids are rejected before any request
//! - **Thread-safe**: all client types are `Send + Sync`
//! - **No retries, no caching**: every failure is returned exactly once

pub mod clients;
pub mod config;
pub mod error;
pub mod normalize;

pub use config::{AppId, BinWiseConfig, BinWiseConfigBuilder, HostUrl, DEFAULT_HOST};
pub use error::ConfigError;

pub use clients::{
    BinWiseClient, BinWiseError, DataType, DecodeError, Endpoint, HttpClient, HttpError,
    HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse, InvalidArgumentError,
    InvalidHttpRequestError, UpstreamError,
};

pub use normalize::{WineCategory, WineList, WinePage};
