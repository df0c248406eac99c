//! Read-only helpers over the request header mapping.

use std::collections::BTreeMap;

use axum::http::{HeaderMap, HeaderValue};

/// Case-insensitive lookup that substitutes `default` when the header is
/// missing or empty.
pub fn header_or(headers: &HeaderMap, name: &str, default: &str) -> String {
    headers
        .get(name)
        .map(value_to_string)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Every header on the request, keyed by its canonical name. Repeated
/// headers keep their first value.
pub fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut collected = BTreeMap::new();
    for (name, value) in headers {
        collected
            .entry(canonical_name(name.as_str()))
            .or_insert_with(|| value_to_string(value));
    }
    collected
}

/// `x-remote-user` becomes `X-Remote-User`: each `-` separated segment is
/// capitalized and the rest lowercased.
pub fn canonical_name(name: &str) -> String {
    name.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

fn value_to_string(value: &HeaderValue) -> String {
    match value.to_str() {
        Ok(text) => text.to_string(),
        Err(_) => String::from_utf8_lossy(value.as_bytes()).into_owned(),
    }
}
