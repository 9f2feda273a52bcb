//! Normalized, renderer-agnostic request description

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::codegen::literal::python_literal;

/// Header collection sorted case-insensitively by name.
///
/// Repeated names (in any letter case) are all kept, in their original
/// relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Headers(Vec<(String, String)>);

impl Headers {
    /// Stable-sort pairs by lower-cased name
    pub fn from_pairs(mut pairs: Vec<(String, String)>) -> Self {
        pairs.sort_by_cached_key(|(name, _)| name.to_lowercase());
        Headers(pairs)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// First value for a name, compared case-insensitively
    pub fn get(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    /// True if no two names are equal ignoring case
    pub fn is_unique(&self) -> bool {
        self.0
            .windows(2)
            .all(|pair| !pair[0].0.eq_ignore_ascii_case(&pair[1].0))
    }

    /// Ordered mapping view, available only when every name is unique
    pub fn as_map(&self) -> Option<IndexMap<&str, &str>> {
        if self.is_unique() {
            Some(self.iter().collect())
        } else {
            None
        }
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

/// `(username, password)` credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Auth {
    pub username: String,
    pub password: String,
}

impl Auth {
    /// Split `user:password` on the first colon; a missing password is empty
    pub fn from_user_string(user: &str) -> Self {
        let (username, password) = user.split_once(':').unwrap_or((user, ""));
        Auth {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

/// Proxy URLs per scheme; both schemes always share one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Proxy {
    pub http: String,
    pub https: String,
}

impl Proxy {
    pub fn new(url: String) -> Self {
        Proxy {
            http: url.clone(),
            https: url,
        }
    }

    /// `(scheme, url)` entries in rendering order
    pub fn entries(&self) -> [(&'static str, &str); 2] {
        [("http", self.http.as_str()), ("https", self.https.as_str())]
    }
}

/// A multipart form field from `-F name=value`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

/// The contract between parsing and rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestModel {
    /// Lower-case HTTP verb
    pub method: String,
    pub url: String,
    /// Raw or form-encoded body
    pub content: Option<String>,
    pub form_data: Vec<FormField>,
    pub json: Option<JsonValue>,
    /// Reserved for query parameters; never populated by any flag
    pub params: Vec<(String, String)>,
    pub headers: Headers,
    pub cookies: BTreeMap<String, String>,
    pub verify: bool,
    pub auth: Option<Auth>,
    pub proxy: Option<Proxy>,
    pub unix_socket: Option<String>,
}

impl RequestModel {
    /// The JSON body as a Python literal, e.g. `{"a": [1, True, None]}`
    pub fn json_literal(&self) -> Option<String> {
        self.json.as_ref().map(python_literal)
    }

    pub fn has_body(&self) -> bool {
        self.content.is_some() || !self.form_data.is_empty() || self.json.is_some()
    }
}
