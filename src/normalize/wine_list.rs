//! Reshaping of the `get_wine_list` response.
//!
//! The upstream document is XML-derived: child collections arrive either as a
//! plain `list` or wrapped as `nodeList: { node: <item or items> }`, and each
//! page mixes category headers (`type: "text"`) with the folders that follow
//! them. Normalization runs on the already camelized document in three steps:
//!
//! 1. [`normalize_lists`] unwraps every node wrapper into a `list` sequence.
//! 2. [`normalize_pages`] regroups each page's items into categories.
//! 3. [`normalize_wine_list`] returns the resulting page sequence.
//!
//! # Example
//!
//! ```rust
//! use binwise_api::normalize::normalize_wine_list;
//! use serde_json::json;
//!
//! let raw = json!({
//!     "content": {
//!         "nodeList": {
//!             "node": {
//!                 "type": "page",
//!                 "list": [
//!                     { "type": "text", "name": "Reds", "list": [] },
//!                     { "type": "folder", "name": "Barolo" }
//!                 ]
//!             }
//!         }
//!     }
//! });
//!
//! let pages = normalize_wine_list(raw);
//! assert_eq!(
//!     pages,
//!     json!([{
//!         "list": [{ "name": "Reds", "list": [], "folders": [{ "name": "Barolo" }] }]
//!     }])
//! );
//! ```

use serde_json::{Map, Value};

const NODE_LIST: &str = "nodeList";
const NODE: &str = "node";
const LIST: &str = "list";
const FOLDERS: &str = "folders";
const CONTENT: &str = "content";
const TYPE: &str = "type";
const PAGE: &str = "page";
const TEXT: &str = "text";

/// Page fields that only describe the upstream inventory and are dropped.
const PAGE_NOISE: [&str; 2] = ["inventoryDescription", "listDescription"];

/// Returns `true` if `value` is a node wrapper, i.e. an object whose `node`
/// field is truthy.
///
/// `null`, `false`, `0` and `""` do not count as a node. Objects and arrays
/// always do, even when empty.
#[must_use]
pub fn is_node_wrapper(value: &Value) -> bool {
    value.get(NODE).is_some_and(is_truthy)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Takes the items out of a node wrapper, coercing a single node into a
/// one-element sequence.
fn unwrap_nodes(wrapper: Value) -> Vec<Value> {
    let Value::Object(mut map) = wrapper else {
        return Vec::new();
    };
    match map.remove(NODE) {
        Some(Value::Array(items)) => items,
        Some(node) => vec![node],
        None => Vec::new(),
    }
}

/// Replaces every `nodeList` node wrapper in the tree with a `list` sequence.
///
/// Applied depth-first to objects and arrays at any depth, including the
/// freshly created `list`. Running it twice is the same as running it once.
pub fn normalize_lists(value: &mut Value) {
    match value {
        Value::Array(items) => items.iter_mut().for_each(normalize_lists),
        Value::Object(map) => {
            if map.get(NODE_LIST).is_some_and(is_node_wrapper) {
                if let Some(wrapper) = map.remove(NODE_LIST) {
                    map.insert(LIST.to_string(), Value::Array(unwrap_nodes(wrapper)));
                }
            }
            map.values_mut().for_each(normalize_lists);
        }
        _ => {}
    }
}

/// Removes and returns the `type` discriminator of an item.
fn take_type(item: &mut Value) -> Option<String> {
    match item.as_object_mut()?.remove(TYPE)? {
        Value::String(kind) => Some(kind),
        _ => None,
    }
}

/// Groups a page's items into categories.
///
/// A `"text"` item opens a new category: its own `list` is reset to empty and
/// every following item is collected under its `folders`. Folders seen before
/// the first header have nowhere to go and are dropped.
fn group_categories(items: Vec<Value>) -> Vec<Value> {
    let mut categories: Vec<Map<String, Value>> = Vec::new();
    let mut folders: Vec<Vec<Value>> = Vec::new();
    let mut current: Option<usize> = None;

    for mut item in items {
        let kind = take_type(&mut item);

        if kind.as_deref() == Some(TEXT) {
            if let Value::Object(mut header) = item {
                header.insert(LIST.to_string(), Value::Array(Vec::new()));
                categories.push(header);
                folders.push(Vec::new());
                current = Some(categories.len() - 1);
            }
            continue;
        }

        match current {
            Some(index) => {
                strip_child_types(&mut item);
                folders[index].push(item);
            }
            None => {
                tracing::debug!(?kind, "dropping wine list folder with no open category");
            }
        }
    }

    categories
        .into_iter()
        .zip(folders)
        .map(|(mut category, folders)| {
            category.insert(FOLDERS.to_string(), Value::Array(folders));
            Value::Object(category)
        })
        .collect()
}

/// Removes the discriminator from the direct children of a folder.
fn strip_child_types(folder: &mut Value) {
    if let Some(children) = folder.get_mut(LIST).and_then(Value::as_array_mut) {
        for child in children {
            take_type(child);
        }
    }
}

fn normalize_page(page: &mut Value) {
    let Some(map) = page.as_object_mut() else {
        return;
    };
    if map.get(TYPE).and_then(Value::as_str) != Some(PAGE) {
        return;
    }

    map.remove(TYPE);
    for key in PAGE_NOISE {
        map.remove(key);
    }

    let items = match map.remove(LIST) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    };
    map.insert(LIST.to_string(), Value::Array(group_categories(items)));
}

/// Regroups the items of every `"page"` in `content.list` into categories.
///
/// Does nothing when `content.list` is not a sequence. Pages with any other
/// discriminator are left as they are.
pub fn normalize_pages(document: &mut Value) {
    let Some(pages) = document
        .get_mut(CONTENT)
        .and_then(|content| content.get_mut(LIST))
        .and_then(Value::as_array_mut)
    else {
        return;
    };

    pages.iter_mut().for_each(normalize_page);
}

/// Normalizes a camelized wine list document and returns its page sequence.
///
/// The result is the normalized `content.list`, or an empty sequence when the
/// document has no page list.
#[must_use]
pub fn normalize_wine_list(mut document: Value) -> Value {
    normalize_lists(&mut document);
    normalize_pages(&mut document);

    let pages = document
        .get_mut(CONTENT)
        .and_then(|content| content.get_mut(LIST))
        .map(Value::take);

    match pages {
        Some(pages @ Value::Array(_)) => pages,
        _ => Value::Array(Vec::new()),
    }
}
