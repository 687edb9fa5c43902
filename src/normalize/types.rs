//! Typed view over a normalized wine list.
//!
//! The normalized document stays a [`serde_json::Value`] so that fields the
//! API adds later reach the caller untouched. These types give structured
//! access to the `pages -> categories -> folders` hierarchy while keeping
//! every other field in a flattened map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A wine list folder. Folders are leaf records and are kept as raw JSON.
pub type WineFolder = Value;

/// A category header together with the folders filed under it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WineCategory {
    /// Folders in the order the API listed them.
    #[serde(default)]
    pub folders: Vec<WineFolder>,
    /// Remaining fields of the header item (label, ids, ...).
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl WineCategory {
    /// Returns a header field by its camelCase name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// A page of the wine list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WinePage {
    /// Categories in page order.
    #[serde(rename = "list", default)]
    pub categories: Vec<WineCategory>,
    /// Remaining fields of the page.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A normalized wine list: the ordered sequence of its pages.
///
/// # Example
///
/// ```rust
/// use binwise_api::normalize::{normalize_wine_list, WineList};
/// use serde_json::json;
///
/// let pages = normalize_wine_list(json!({
///     "content": { "list": [{
///         "type": "page",
///         "list": [{ "type": "text", "label": "Reds" }, { "name": "Barolo" }]
///     }] }
/// }));
///
/// let wine_list = WineList::from_value(pages).unwrap();
/// assert_eq!(wine_list.pages.len(), 1);
/// assert_eq!(wine_list.categories().count(), 1);
/// assert_eq!(wine_list.folders().count(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WineList {
    /// Pages in list order.
    pub pages: Vec<WinePage>,
}

impl WineList {
    /// Builds the typed view from the output of
    /// [`normalize_wine_list`](super::normalize_wine_list).
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the value is not a sequence of
    /// objects, or if a `list` field is not a sequence.
    pub fn from_value(pages: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(pages)
    }

    /// Iterates over every category of every page.
    pub fn categories(&self) -> impl Iterator<Item = &WineCategory> {
        self.pages.iter().flat_map(|page| page.categories.iter())
    }

    /// Iterates over every folder of the list.
    pub fn folders(&self) -> impl Iterator<Item = &WineFolder> {
        self.categories().flat_map(|category| category.folders.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_typed_view_keeps_unknown_fields() {
        let list = WineList::from_value(json!([{
            "title": "Wine",
            "list": [
                {
                    "label": "Reds",
                    "list": [],
                    "folders": [{ "name": "Barolo" }, { "name": "Rioja" }]
                },
                { "label": "Whites" }
            ]
        }]))
        .unwrap();

        let page = &list.pages[0];
        assert_eq!(page.fields.get("title"), Some(&json!("Wine")));
        assert_eq!(page.categories.len(), 2);
        assert_eq!(page.categories[0].field("label"), Some(&json!("Reds")));
        assert_eq!(page.categories[0].folders.len(), 2);
        assert!(page.categories[1].folders.is_empty());
        assert_eq!(list.folders().count(), 2);
    }

    #[test]
    fn test_typed_view_serializes_back_to_normalized_shape() {
        let value = json!([{
            "list": [{ "label": "Reds", "list": [], "folders": [{ "name": "Barolo" }] }]
        }]);
        let list = WineList::from_value(value.clone()).unwrap();
        assert_eq!(serde_json::to_value(&list).unwrap(), value);
    }

    #[test]
    fn test_typed_view_rejects_non_sequence() {
        assert!(WineList::from_value(json!({ "list": [] })).is_err());
    }
}
