//! Typed projections over untyped response items

use crate::error::{GitHubError, Result};
use crate::paginate::Item;
use serde_json::Value;

/// Collect the value stored under `key` in every item, in order
///
/// # Errors
/// Returns `MissingField` for the first item that lacks `key`
pub fn values_for_key<'a>(key: &str, items: &'a [Item]) -> Result<Vec<&'a Value>> {
    items
        .iter()
        .map(|item| {
            item.get(key)
                .ok_or_else(|| GitHubError::MissingField(key.to_string()))
        })
        .collect()
}

/// Convert JSON string values into owned strings
///
/// # Errors
/// Returns `UnexpectedType` if any value is not a JSON string
pub fn stringify_values(field: &str, values: &[&Value]) -> Result<Vec<String>> {
    values
        .iter()
        .map(|value| {
            value
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| GitHubError::UnexpectedType {
                    field: field.to_string(),
                    expected: "a string",
                })
        })
        .collect()
}

/// Take the first item of an aggregated response
pub fn first_item(query: &str, mut items: Vec<Item>) -> Result<Item> {
    if items.is_empty() {
        return Err(GitHubError::EmptyResponse(query.to_string()));
    }
    Ok(items.swap_remove(0))
}

/// Look up a nested JSON object, eg `rate` in the rate limit response
pub fn nested_object<'a>(item: &'a Item, key: &str) -> Result<&'a Item> {
    item.get(key)
        .ok_or_else(|| GitHubError::MissingField(key.to_string()))?
        .as_object()
        .ok_or_else(|| GitHubError::UnexpectedType {
            field: key.to_string(),
            expected: "an object",
        })
}

/// Read a non-negative integer field
pub fn u64_field(object: &Item, key: &str) -> Result<u64> {
    object
        .get(key)
        .ok_or_else(|| GitHubError::MissingField(key.to_string()))?
        .as_u64()
        .ok_or_else(|| GitHubError::UnexpectedType {
            field: key.to_string(),
            expected: "a non-negative integer",
        })
}
