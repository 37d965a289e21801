//! Conversion of captured headers into a `reqwest` header map.

use std::collections::HashMap;

use log::warn;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Converts captured `name -> value` pairs into a [`HeaderMap`].
///
/// `HeaderMap` stores names lowercased. Captured names that differ only in
/// case (`X-A`, `x-a`) are appended under the same entry, so every captured
/// value is sent. Pairs are visited in byte order of their names, which keeps
/// the order of such values stable across runs.
///
/// Pairs `http` refuses (a name with spaces, a value with control bytes) are
/// skipped with a warning; they stay visible through `ParsedRequest::headers`.
pub(crate) fn header_map_from(headers: &HashMap<String, String>) -> HeaderMap {
    let mut pairs: Vec<(&String, &String)> = headers.iter().collect();
    pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut map = HeaderMap::with_capacity(pairs.len());
    for (name, value) in pairs {
        let header_name = match HeaderName::from_bytes(name.as_bytes()) {
            Ok(header_name) => header_name,
            Err(e) => {
                warn!("Skipping header {:?}: {}", name, e);
                continue;
            }
        };
        let header_value = match HeaderValue::from_str(value) {
            Ok(header_value) => header_value,
            Err(e) => {
                warn!("Skipping header {:?} with value {:?}: {}", name, value, e);
                continue;
            }
        };
        map.append(header_name, header_value);
    }
    map
}
