//! HTTP client types for BinWise API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async transport shared by every endpoint
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a decoded response (camelized data plus raw body)
//! - [`HttpMethod`]: supported HTTP methods (GET, POST)
//! - [`DataType`]: content types for request bodies
//! - [`BinWiseClient`]: the restaurant and wine list operations
//! - [`Endpoint`]: per-call request descriptor
//!
//! # Example
//!
//! ```rust,ignore
//! use binwise_api::clients::{BinWiseClient, Endpoint};
//!
//! let client = BinWiseClient::new("your-app-id")?;
//! let response = client.request(Endpoint::published_lists("restaurant-id")).await?;
//! ```

pub mod binwise;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use binwise::{BinWiseClient, BinWiseError, Endpoint, InvalidArgumentError};
pub use errors::{DecodeError, HttpError, InvalidHttpRequestError, UpstreamError};
pub use http_client::{HttpClient, AUTH_PARAM, SDK_VERSION};
pub use http_request::{query_pairs, DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{decode_body, is_json_content_type, HttpResponse};
