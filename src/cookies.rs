//! Cookie utilities
//!
//! Decoding of `Cookie:` header values into name/value pairs.

use std::collections::BTreeMap;

use cookie::Cookie;
use tracing::debug;

use crate::strings::unescape;

/// True if a header name designates a cookie header.
///
/// Matching is case-insensitive and ignores surrounding `$` characters,
/// which leak into header names when `$'...'` quoting is split by tools
/// that do not understand it.
pub fn is_cookie_header(name: &str) -> bool {
    name.trim().trim_matches('$').eq_ignore_ascii_case("cookie")
}

/// Parse a `Cookie:` header value into its name/value pairs.
///
/// Backslash and unicode escapes inside the value are decoded first
/// (`\u0021` becomes `!`). Pairs are returned in header order; malformed
/// segments are skipped.
pub fn parse_cookie_string(value: &str) -> Vec<(String, String)> {
    let decoded = unescape(value);

    Cookie::split_parse(decoded)
        .filter_map(|parsed| match parsed {
            Ok(c) => Some((c.name().to_string(), unquote(c.value()).to_string())),
            Err(e) => {
                debug!(error = %e, "Skipping malformed cookie segment");
                None
            }
        })
        .collect()
}

/// Merge a cookie header value into a name-sorted cookie map.
///
/// Later values for an existing name replace earlier ones.
pub fn merge_cookies(into: &mut BTreeMap<String, String>, value: &str) {
    for (name, value) in parse_cookie_string(value) {
        into.insert(name, value);
    }
}

/// Strip one pair of surrounding double quotes from a cookie value
fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
