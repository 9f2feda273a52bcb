//! Request model builder
//!
//! Interprets a [`FlagSet`] into a [`RequestModel`].

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use tracing::{debug, warn};

use super::headers::normalize_headers;
use super::model::{Auth, FormField, Proxy, RequestModel};
use crate::curl::flags::FlagSet;
use crate::errors::{ConvertError, Result};
use crate::http::method;

/// Characters escaped in `-d` fragments.
///
/// Form structure (`=`, `&`, `+`, `%`) and unreserved characters pass
/// through untouched so already-encoded pairs keep their meaning.
const DATA_FRAGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}')
    .add(b'[')
    .add(b']');

pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// Build the normalized request model from scanned flags
pub fn build_request(flags: FlagSet) -> Result<RequestModel> {
    let url = flags
        .url
        .clone()
        .or_else(|| flags.explicit_url.clone())
        .ok_or_else(|| ConvertError::Usage("the following arguments are required: url".to_string()))?;

    check_body_sources(&flags)?;

    let content = build_content(&flags);
    let form_data = parse_form_fields(&flags.form)?;
    let json = parse_json_body(flags.json.as_deref())?;

    let data_content_type = if !form_data.is_empty() {
        Some(MULTIPART_FORM_DATA)
    } else if content.is_some() {
        Some(FORM_URLENCODED)
    } else {
        None
    };

    let has_body = content.is_some() || !form_data.is_empty() || json.is_some();
    let method = match non_empty(&flags.request) {
        Some(explicit) => method::normalize(explicit),
        None => method::infer(has_body).to_string(),
    };
    if !method::is_standard(&method) {
        warn!(method = %method, "Non-standard HTTP method");
    }

    let range = non_empty(&flags.range).map(normalize_range);
    let normalized = normalize_headers(
        &flags.headers,
        data_content_type,
        range.as_deref(),
        non_empty(&flags.referer),
    );

    let auth = non_empty(&flags.user).map(Auth::from_user_string);
    let proxy = build_proxy(non_empty(&flags.proxy), non_empty(&flags.proxy_user));

    debug!(
        method = %method,
        url = %url,
        headers = normalized.headers.len(),
        cookies = normalized.cookies.len(),
        "Built request model"
    );

    Ok(RequestModel {
        method,
        url,
        content,
        form_data,
        json,
        params: Vec::new(),
        headers: normalized.headers,
        cookies: normalized.cookies,
        verify: !flags.insecure,
        auth,
        proxy,
        unix_socket: non_empty(&flags.unix_socket).map(str::to_string),
    })
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Reject commands that supply more than one kind of body
fn check_body_sources(flags: &FlagSet) -> Result<()> {
    let groups: [(&'static str, bool); 4] = [
        ("-d/--data", !flags.data.is_empty() || !flags.data_urlencode.is_empty()),
        ("--data-binary", non_empty(&flags.data_binary).is_some()),
        ("-F/--form", !flags.form.is_empty()),
        ("--json", non_empty(&flags.json).is_some()),
    ];

    let sources: Vec<&'static str> = groups
        .iter()
        .filter(|(_, present)| *present)
        .map(|(name, _)| *name)
        .collect();

    if sources.len() > 1 {
        return Err(ConvertError::ConflictingBody { sources });
    }
    Ok(())
}

/// Raw body from `--data-binary`, or the joined `-d`/`--data-urlencode` fragments
fn build_content(flags: &FlagSet) -> Option<String> {
    if let Some(raw) = non_empty(&flags.data_binary) {
        debug!("Using --data-binary body");
        return Some(raw.to_string());
    }

    let fragments: Vec<String> = flags
        .data
        .iter()
        .map(|fragment| encode_data_fragment(fragment))
        .chain(flags.data_urlencode.iter().cloned())
        .collect();

    let joined = fragments.join("&");
    if joined.is_empty() {
        None
    } else {
        debug!(fragments = fragments.len(), "Using -d/--data body");
        Some(joined)
    }
}

/// Percent-encode one `-d` fragment
pub fn encode_data_fragment(fragment: &str) -> String {
    utf8_percent_encode(fragment, DATA_FRAGMENT).to_string()
}

/// Parse `-F name=value` fields
fn parse_form_fields(specs: &[String]) -> Result<Vec<FormField>> {
    specs
        .iter()
        .map(|spec| {
            let (name, value) = spec.split_once('=').ok_or_else(|| {
                ConvertError::Usage(format!("argument -F/--form: illegal form field '{}', expected name=value", spec))
            })?;
            Ok(FormField {
                name: name.to_string(),
                value: value.to_string(),
            })
        })
        .collect()
}

/// Validate and parse the `--json` body
fn parse_json_body(json: Option<&str>) -> Result<Option<serde_json::Value>> {
    let Some(content) = json.filter(|j| !j.is_empty()) else {
        return Ok(None);
    };

    serde_json::from_str(content)
        .map(Some)
        .map_err(|source| ConvertError::InvalidJson {
            content: content.to_string(),
            source,
        })
}

/// Normalize a `-r` value into a `Range` header value.
///
/// `0-499` becomes `bytes=0-499`, `items=0-5` keeps its unit, and each of
/// several comma-separated ranges is trimmed and rejoined with `", "`.
pub fn normalize_range(range: &str) -> String {
    let (unit, ranges) = range.split_once('=').unwrap_or(("bytes", range));
    let ranges: Vec<&str> = ranges.split(',').map(str::trim).collect();
    format!("{}={}", unit, ranges.join(", "))
}

/// Build the proxy mapping, embedding proxy credentials when given
pub fn build_proxy(proxy: Option<&str>, proxy_user: Option<&str>) -> Option<Proxy> {
    let proxy = proxy?;
    let (scheme, host) = proxy.split_once("://").unwrap_or(("http", proxy));
    let host = host.trim_end_matches('/');

    let url = match proxy_user {
        Some(user) => format!("{}://{}@{}/", scheme, user, host),
        None => format!("{}://{}/", scheme, host),
    };
    Some(Proxy::new(url))
}
