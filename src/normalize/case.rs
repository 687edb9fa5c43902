//! Key casing conversion between the API's snake_case and camelCase.
//!
//! The API speaks snake_case on the wire; callers see camelCase. Both
//! directions share one word splitter so that converting an already converted
//! string is a no-op.

use serde_json::Value;

/// Splits a string into words.
///
/// Any non-alphanumeric character separates words. Inside a run of
/// alphanumerics a new word starts at a lower-to-upper transition, at the last
/// capital of an acronym that is followed by a lowercase letter (`XMLHttp`
/// splits into `XML` and `Http`), and at every letter/digit transition.
fn words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(prev) = current.chars().last() {
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = (prev.is_lowercase() && c.is_uppercase())
                || (prev.is_uppercase() && c.is_uppercase() && next_is_lower)
                || (prev.is_alphabetic() && c.is_numeric())
                || (prev.is_numeric() && c.is_alphabetic());
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// Converts a string to camelCase.
///
/// ```rust
/// use binwise_api::normalize::to_camel_case;
///
/// assert_eq!(to_camel_case("list_id"), "listId");
/// assert_eq!(to_camel_case("listId"), "listId");
/// assert_eq!(to_camel_case("XMLHttp request"), "xmlHttpRequest");
/// ```
#[must_use]
pub fn to_camel_case(input: &str) -> String {
    words(input)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                word.to_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect()
}

/// Converts a string to snake_case.
///
/// ```rust
/// use binwise_api::normalize::to_snake_case;
///
/// assert_eq!(to_snake_case("restaurantId"), "restaurant_id");
/// assert_eq!(to_snake_case("page_size"), "page_size");
/// ```
#[must_use]
pub fn to_snake_case(input: &str) -> String {
    words(input)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

fn convert(value: &Value, case: fn(&str) -> String) -> Value {
    match value {
        Value::String(s) => Value::String(case(s)),
        Value::Array(items) => Value::Array(items.iter().map(|item| convert(item, case)).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, val)| {
                    let val = match val {
                        Value::Object(_) | Value::Array(_) => convert(val, case),
                        scalar => scalar.clone(),
                    };
                    (case(key), val)
                })
                .collect(),
        ),
        scalar => scalar.clone(),
    }
}

/// Returns a copy of `value` with every object key in camelCase.
///
/// Strings at the top level or directly inside arrays are converted too.
/// String values of object fields are left alone.
#[must_use]
pub fn camelize(value: &Value) -> Value {
    convert(value, to_camel_case)
}

/// Returns a copy of `value` with every object key in snake_case.
///
/// Mirror of [`camelize`].
#[must_use]
pub fn snakify(value: &Value) -> Value {
    convert(value, to_snake_case)
}
