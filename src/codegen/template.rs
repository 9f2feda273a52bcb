//! String-template renderer
//!
//! Emits one keyword argument per line, four-space indented, with
//! dictionaries pretty-printed in JSON mapping notation:
//!
//! ```text
//! httpx.post("https://example.com",
//!     content="a=1",
//!     headers={
//!         "Content-Type": "application/x-www-form-urlencoded"
//!     },
//!     cookies={},
//! )
//! ```

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value as JsonValue};
use tera::{Context, Tera};

use super::literal::{double_quoted, python_literal};
use super::plan::{ArgValue, CallPlan, ClientSetup, Keyword};
use super::{CallArgs, Renderer, DEFAULT_CLIENT};
use crate::errors::{ConvertError, Result};
use crate::request::model::RequestModel;

const BASE_INDENT: &str = "    ";

/// One keyword per line; only `verify` goes without a trailing comma
const CALL_TEMPLATE: &str = "\
{% if setup %}{{ setup }}
{% endif %}{{ client }}.{{ method }}({{ url }},
{% for arg in keywords %}    {{ arg.name }}={{ arg.value }}{% if arg.comma %},{% endif %}
{% endfor %})";

/// A keyword argument with its value already formatted
#[derive(Debug, Serialize)]
struct RenderedArg<'a> {
    name: &'a str,
    value: String,
    comma: bool,
}

/// Renders the call plan with direct string templates
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    pub client: String,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self {
            client: DEFAULT_CLIENT.to_string(),
        }
    }
}

impl TemplateRenderer {
    pub fn new(client: impl Into<String>) -> Self {
        Self { client: client.into() }
    }
}

impl Renderer for TemplateRenderer {
    fn render(&self, model: &RequestModel, extra: &CallArgs) -> Result<String> {
        let plan = CallPlan::build(model, extra, &self.client)?;
        render_plan(&plan)
    }
}

/// Render a prepared plan as source text
pub fn render_plan(plan: &CallPlan) -> Result<String> {
    let keywords = plan
        .keywords
        .iter()
        .map(|keyword| {
            Ok(RenderedArg {
                name: &keyword.name,
                value: format_value(keyword)?,
                comma: keyword.trailing_comma,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut context = Context::new();
    context.insert("setup", &plan.setup.as_ref().map(client_setup));
    context.insert("client", &plan.client);
    context.insert("method", &plan.method);
    context.insert("url", &double_quoted(&plan.url));
    context.insert("keywords", &keywords);

    let rendered = Tera::one_off(CALL_TEMPLATE, &context, false)
        .map_err(|e| ConvertError::Render(format!("template error - {}", e)))?;

    Ok(rendered.trim().to_string())
}

fn client_setup(setup: &ClientSetup) -> String {
    format!(
        "{target} = {module}.Client(transport={module}.HTTPTransport(uds={uds}))",
        target = setup.target,
        module = setup.module,
        uds = double_quoted(&setup.uds),
    )
}

/// Source text of a keyword's value
fn format_value(keyword: &Keyword) -> Result<String> {
    let value = match &keyword.value {
        ArgValue::Str(s) => double_quoted(s),
        ArgValue::Inline(value) => python_literal(value),
        ArgValue::Mapping(entries) => {
            let map: Map<String, JsonValue> = entries.iter().cloned().collect();
            pretty(&JsonValue::Object(map))?
        }
        ArgValue::Pairs(pairs) => {
            let list: Vec<JsonValue> = pairs
                .iter()
                .map(|(k, v)| JsonValue::Array(vec![JsonValue::String(k.clone()), JsonValue::String(v.clone())]))
                .collect();
            pretty(&JsonValue::Array(list))?
        }
        ArgValue::Tuple(a, b) => format!("({}, {})", double_quoted(a), double_quoted(b)),
        ArgValue::Bool(true) => "True".to_string(),
        ArgValue::Bool(false) => "False".to_string(),
    };
    Ok(value)
}

/// Pretty-print with four-space indentation, nested one level under the call
fn pretty(value: &JsonValue) -> Result<String> {
    let is_empty = match value {
        JsonValue::Object(map) => map.is_empty(),
        JsonValue::Array(list) => list.is_empty(),
        _ => false,
    };
    if is_empty {
        return Ok(if value.is_object() { "{}" } else { "[]" }.to_string());
    }

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(BASE_INDENT.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| ConvertError::Render(format!("failed to format mapping: {}", e)))?;
    let text = String::from_utf8(buf).map_err(|e| ConvertError::Render(e.to_string()))?;

    Ok(text.lines().collect::<Vec<_>>().join(&format!("\n{}", BASE_INDENT)))
}
