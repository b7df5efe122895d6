//! Small helpers shared across endpoints.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{Error, Result};

/// Filter `options` down to `recognized` keys and render them as a
/// `&key=value` query suffix.
///
/// Unrecognized keys are dropped silently. Segment order follows map
/// iteration and is not guaranteed. Values are emitted verbatim, so callers
/// pass URL-safe text (the API's option values all are).
pub(crate) fn options_query(
    options: &HashMap<String, String>,
    recognized: &[&str],
) -> String {
    let mut suffix = String::new();
    for (key, value) in options {
        if recognized.contains(&key.as_str()) {
            suffix.push_str(&format!("&{key}={value}"));
        }
    }
    suffix
}

/// Pretty-print any serializable value as indented JSON.
///
/// # Errors
///
/// [`Error::Serialize`] when the value cannot be represented as JSON.
pub fn to_pretty_json<T: Serialize>(payload: &T) -> Result<String> {
    serde_json::to_string_pretty(payload).map_err(Error::Serialize)
}
