//! Header and cookie normalization
//!
//! Splits raw `-H` lines into ordinary headers and cookies, synthesizes
//! Content-Type, Range and Referer headers, and sorts the result.

use std::collections::BTreeMap;

use tracing::warn;

use super::model::Headers;
use crate::cookies::{is_cookie_header, merge_cookies};

/// Headers and cookies extracted from the raw header lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedHeaders {
    pub headers: Headers,
    pub cookies: BTreeMap<String, String>,
}

/// Split a raw header line into name and value.
///
/// Lines starting with a colon (HTTP/2 pseudo-headers such as
/// `:authority: example.com`) split on the second colon so the leading
/// colon stays part of the name.
pub fn split_header_line(line: &str) -> Option<(&str, &str)> {
    let split_at = if line.starts_with(':') {
        line[1..].find(':').map(|pos| pos + 1)?
    } else {
        line.find(':')?
    };
    Some((&line[..split_at], &line[split_at + 1..]))
}

/// Normalize raw header lines.
///
/// `data_content_type` is only added when no explicit Content-Type header
/// was given. `range` must already be normalized.
pub fn normalize_headers(
    lines: &[String],
    data_content_type: Option<&str>,
    range: Option<&str>,
    referer: Option<&str>,
) -> NormalizedHeaders {
    let mut pairs: Vec<(String, String)> = Vec::with_capacity(lines.len() + 3);
    let mut cookies = BTreeMap::new();
    let mut explicit_content_type = false;

    for line in lines {
        let Some((name, value)) = split_header_line(line) else {
            warn!(header = %line, "Skipping header line without a colon");
            continue;
        };
        let name = name.trim();

        if is_cookie_header(name) {
            merge_cookies(&mut cookies, value);
            continue;
        }

        if name.eq_ignore_ascii_case("content-type") {
            explicit_content_type = true;
        }
        pairs.push((name.to_string(), value.trim().to_string()));
    }

    if let Some(content_type) = data_content_type {
        if !explicit_content_type {
            pairs.push(("Content-Type".to_string(), content_type.to_string()));
        }
    }
    if let Some(range) = range {
        pairs.push(("Range".to_string(), range.to_string()));
    }
    if let Some(referer) = referer {
        pairs.push(("Referer".to_string(), referer.to_string()));
    }

    NormalizedHeaders {
        headers: Headers::from_pairs(pairs),
        cookies,
    }
}
