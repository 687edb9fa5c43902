//! Response and request shaping.
//!
//! - [`case`]: camelCase/snake_case conversion of JSON keys
//! - [`wine_list`]: reshaping of the wine list document into
//!   `pages -> categories -> folders`
//! - [`WineList`]: typed view over the normalized wine list

pub mod case;
mod types;
pub mod wine_list;

pub use case::{camelize, snakify, to_camel_case, to_snake_case};
pub use types::{WineCategory, WineFolder, WineList, WinePage};
pub use wine_list::{is_node_wrapper, normalize_lists, normalize_pages, normalize_wine_list};
