//! Endpoint descriptors for the BinWise REST API.
//!
//! An [`Endpoint`] pairs an HTTP method and a path suffix with the payload of
//! one call. It is built per call and turned into an [`HttpRequest`].

use serde_json::{Map, Value};

use crate::clients::{DataType, HttpMethod, HttpRequest, InvalidHttpRequestError};

/// Path of the restaurant collection endpoint.
pub const GET_RESTAURANTS: &str = "user/json/get_restaurants";

/// Path of the published lists endpoint.
pub const GET_PUBLISHED_LISTS: &str = "restaurant/json/get_published_lists";

/// Path of the wine list endpoint.
pub const GET_WINE_LIST: &str = "restaurant/json/get_wine_list";

/// A single call to the BinWise API.
///
/// # Example
///
/// ```rust
/// use binwise_api::clients::Endpoint;
/// use binwise_api::clients::HttpMethod;
///
/// let endpoint = Endpoint::wine_list("abc123");
/// assert_eq!(endpoint.method, HttpMethod::Get);
/// assert_eq!(endpoint.path, "restaurant/json/get_wine_list");
/// assert_eq!(endpoint.data["listId"], "abc123");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Endpoint {
    /// HTTP method of the call.
    pub method: HttpMethod,
    /// Path suffix appended to the host.
    pub path: String,
    /// Call payload: query parameters for GET, JSON body for POST.
    pub data: Map<String, Value>,
}

impl Endpoint {
    /// Creates a GET endpoint.
    #[must_use]
    pub fn get(path: impl Into<String>, data: Map<String, Value>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            data,
        }
    }

    /// Creates a POST endpoint.
    #[must_use]
    pub fn post(path: impl Into<String>, data: Map<String, Value>) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            data,
        }
    }

    /// The restaurant collection, filtered by `options`.
    #[must_use]
    pub fn restaurants(options: Map<String, Value>) -> Self {
        Self::get(GET_RESTAURANTS, options)
    }

    /// The published lists of one restaurant.
    #[must_use]
    pub fn published_lists(restaurant_id: &str) -> Self {
        Self::get(GET_PUBLISHED_LISTS, single("restaurantId", restaurant_id))
    }

    /// One wine list.
    #[must_use]
    pub fn wine_list(list_id: &str) -> Self {
        Self::get(GET_WINE_LIST, single("listId", list_id))
    }

    /// Converts this descriptor into a transport request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn into_request(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let builder = HttpRequest::builder(self.method, self.path);
        let builder = match self.method {
            HttpMethod::Get => builder.query(self.data),
            HttpMethod::Post => builder.body(Value::Object(self.data)).body_type(DataType::Json),
        };
        builder.build()
    }
}

fn single(key: &str, value: &str) -> Map<String, Value> {
    let mut data = Map::new();
    data.insert(key.to_string(), Value::String(value.to_string()));
    data
}
