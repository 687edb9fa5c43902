//! BinWise endpoint client.
//!
//! - [`BinWiseClient`]: the three public operations
//! - [`Endpoint`]: per-call request descriptor
//! - [`BinWiseError`], [`InvalidArgumentError`]: operation errors

mod client;
mod endpoint;
mod errors;

pub use client::BinWiseClient;
pub use endpoint::{Endpoint, GET_PUBLISHED_LISTS, GET_RESTAURANTS, GET_WINE_LIST};
pub use errors::{BinWiseError, InvalidArgumentError};
