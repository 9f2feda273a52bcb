//! Argument emission plan
//!
//! Both renderers consume the same ordered plan, so argument presence and
//! ordering are decided once here.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use tracing::debug;

use super::literal::is_identifier;
use super::CallArgs;
use crate::errors::{ConvertError, Result};
use crate::request::model::{FormField, RequestModel};

/// Identifier of the client bound to a unix socket
pub const UDS_CLIENT: &str = "client";

/// Value of one keyword argument
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// Plain string (`content`)
    Str(String),
    /// Arbitrary JSON-shaped value rendered inline (extra args, `json`)
    Inline(JsonValue),
    /// Ordered mapping with string keys
    Mapping(Vec<(String, JsonValue)>),
    /// List of `[name, value]` pairs, for repeated names
    Pairs(Vec<(String, String)>),
    /// Two-element tuple (`auth`)
    Tuple(String, String),
    Bool(bool),
}

/// One keyword argument of the client call
#[derive(Debug, Clone, PartialEq)]
pub struct Keyword {
    pub name: String,
    pub value: ArgValue,
    /// False only for the closing `verify=False` line of the template output
    pub trailing_comma: bool,
}

impl Keyword {
    fn new(name: impl Into<String>, value: ArgValue) -> Self {
        Keyword {
            name: name.into(),
            value,
            trailing_comma: true,
        }
    }
}

/// Statement constructing a client bound to a unix socket
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSetup {
    /// Variable the client is assigned to
    pub target: String,
    /// Module identifier providing `Client` and `HTTPTransport`
    pub module: String,
    pub uds: String,
}

/// Everything a renderer needs, in emission order
#[derive(Debug, Clone, PartialEq)]
pub struct CallPlan {
    pub setup: Option<ClientSetup>,
    /// Call target, `httpx` or the unix-socket client
    pub client: String,
    pub method: String,
    pub url: String,
    pub keywords: Vec<Keyword>,
}

impl CallPlan {
    /// Plan the call for `model`.
    ///
    /// Order: extra arguments by name, the body argument (`content`, `data`,
    /// `json` or `params`), `headers`, `cookies`, then `auth`, `proxy` and
    /// `verify` when present. An extra argument replaces the model-derived
    /// keyword of the same name.
    pub fn build(model: &RequestModel, extra: &CallArgs, module: &str) -> Result<Self> {
        if !is_identifier(module) {
            return Err(ConvertError::Render(format!("`{}` is not a valid client identifier", module)));
        }
        if !is_identifier(&model.method) {
            return Err(ConvertError::Render(format!(
                "method `{}` cannot be rendered as a client attribute",
                model.method
            )));
        }

        let mut keywords = Vec::new();
        let mut derived = Vec::new();

        let mut extra_names: Vec<&String> = extra.keys().collect();
        extra_names.sort();
        for name in extra_names {
            if !is_identifier(name) {
                return Err(ConvertError::Render(format!("`{}` is not a valid keyword argument name", name)));
            }
            keywords.push(Keyword::new(name.as_str(), ArgValue::Inline(extra[name].clone())));
        }

        if let Some(body) = body_keyword(model) {
            derived.push(body);
        }

        let headers = match model.headers.as_map() {
            Some(map) => ArgValue::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k.to_string(), JsonValue::String(v.to_string())))
                    .collect(),
            ),
            None => ArgValue::Pairs(model.headers.pairs().to_vec()),
        };
        derived.push(Keyword::new("headers", headers));

        derived.push(Keyword::new(
            "cookies",
            ArgValue::Mapping(
                model
                    .cookies
                    .iter()
                    .map(|(k, v)| (k.clone(), JsonValue::String(v.clone())))
                    .collect(),
            ),
        ));

        if let Some(auth) = &model.auth {
            derived.push(Keyword::new(
                "auth",
                ArgValue::Tuple(auth.username.clone(), auth.password.clone()),
            ));
        }

        if let Some(proxy) = &model.proxy {
            derived.push(Keyword::new(
                "proxy",
                ArgValue::Mapping(
                    proxy
                        .entries()
                        .iter()
                        .map(|(scheme, url)| (scheme.to_string(), JsonValue::String(url.to_string())))
                        .collect(),
                ),
            ));
        }

        if !model.verify {
            derived.push(Keyword {
                trailing_comma: false,
                ..Keyword::new("verify", ArgValue::Bool(false))
            });
        }

        for keyword in derived {
            if extra.contains_key(&keyword.name) {
                debug!(name = %keyword.name, "Extra argument replaces derived keyword");
                continue;
            }
            keywords.push(keyword);
        }

        let (setup, client) = match &model.unix_socket {
            Some(uds) => (
                Some(ClientSetup {
                    target: UDS_CLIENT.to_string(),
                    module: module.to_string(),
                    uds: uds.clone(),
                }),
                UDS_CLIENT.to_string(),
            ),
            None => (None, module.to_string()),
        };

        Ok(CallPlan {
            setup,
            client,
            method: model.method.clone(),
            url: model.url.clone(),
            keywords,
        })
    }
}

/// The single populated body argument, checked in priority order
fn body_keyword(model: &RequestModel) -> Option<Keyword> {
    if let Some(content) = &model.content {
        return Some(Keyword::new("content", ArgValue::Str(content.clone())));
    }
    if !model.form_data.is_empty() {
        return Some(Keyword::new("data", ArgValue::Mapping(group_form_fields(&model.form_data))));
    }
    if let Some(json) = &model.json {
        return Some(Keyword::new("json", ArgValue::Inline(json.clone())));
    }
    if !model.params.is_empty() {
        return Some(Keyword::new("params", ArgValue::Pairs(model.params.clone())));
    }
    None
}

/// Group form fields by name; repeated names collect a list of values
fn group_form_fields(fields: &[FormField]) -> Vec<(String, JsonValue)> {
    let mut grouped: IndexMap<&str, Vec<&str>> = IndexMap::new();
    for field in fields {
        grouped.entry(field.name.as_str()).or_default().push(field.value.as_str());
    }

    grouped
        .into_iter()
        .map(|(name, values)| {
            let value = match values.as_slice() {
                [single] => JsonValue::String(single.to_string()),
                many => JsonValue::Array(many.iter().map(|v| JsonValue::String(v.to_string())).collect()),
            };
            (name.to_string(), value)
        })
        .collect()
}
