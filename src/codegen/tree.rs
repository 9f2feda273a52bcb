//! Syntax-tree renderer
//!
//! Builds a minimal Python expression tree for the client call and unparses
//! it canonically: one line per statement, `repr()` string quoting, no
//! trailing commas.

use serde_json::Value as JsonValue;

use super::literal::repr;
use super::plan::{ArgValue, CallPlan, ClientSetup};
use super::{CallArgs, Renderer, DEFAULT_CLIENT};
use crate::errors::Result;
use crate::request::model::RequestModel;

/// Python expression node
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Name(String),
    Attribute {
        value: Box<Expr>,
        attr: String,
    },
    Call {
        func: Box<Expr>,
        args: Vec<Expr>,
        keywords: Vec<(String, Expr)>,
    },
    Str(String),
    /// Numeric literal, kept as its source text
    Number(String),
    Bool(bool),
    None,
    Tuple(Vec<Expr>),
    List(Vec<Expr>),
    Dict(Vec<(Expr, Expr)>),
}

/// Python statement node
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assign { target: String, value: Expr },
    Expr(Expr),
}

/// A sequence of statements
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Module {
    pub body: Vec<Stmt>,
}

impl Expr {
    fn name(id: &str) -> Expr {
        Expr::Name(id.to_string())
    }

    fn attribute(value: Expr, attr: &str) -> Expr {
        Expr::Attribute {
            value: Box::new(value),
            attr: attr.to_string(),
        }
    }

    fn call(func: Expr, args: Vec<Expr>, keywords: Vec<(String, Expr)>) -> Expr {
        Expr::Call {
            func: Box::new(func),
            args,
            keywords,
        }
    }

    fn str(value: &str) -> Expr {
        Expr::Str(value.to_string())
    }

    /// Convert a JSON value into the equivalent literal expression
    pub fn from_json(value: &JsonValue) -> Expr {
        match value {
            JsonValue::Null => Expr::None,
            JsonValue::Bool(b) => Expr::Bool(*b),
            JsonValue::Number(n) => Expr::Number(n.to_string()),
            JsonValue::String(s) => Expr::Str(s.clone()),
            JsonValue::Array(items) => Expr::List(items.iter().map(Expr::from_json).collect()),
            JsonValue::Object(map) => Expr::Dict(
                map.iter()
                    .map(|(k, v)| (Expr::Str(k.clone()), Expr::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Canonical source text for this expression
    pub fn unparse(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) {
        match self {
            Expr::Name(id) => out.push_str(id),
            Expr::Attribute { value, attr } => {
                value.write_to(out);
                out.push('.');
                out.push_str(attr);
            }
            Expr::Call { func, args, keywords } => {
                func.write_to(out);
                out.push('(');
                let mut first = true;
                for arg in args {
                    if !first {
                        out.push_str(", ");
                    }
                    first = false;
                    arg.write_to(out);
                }
                for (name, value) in keywords {
                    if !first {
                        out.push_str(", ");
                    }
                    first = false;
                    out.push_str(name);
                    out.push('=');
                    value.write_to(out);
                }
                out.push(')');
            }
            Expr::Str(s) => out.push_str(&repr(s)),
            Expr::Number(n) => out.push_str(n),
            Expr::Bool(true) => out.push_str("True"),
            Expr::Bool(false) => out.push_str("False"),
            Expr::None => out.push_str("None"),
            Expr::Tuple(items) => {
                out.push('(');
                write_items(items, out);
                if items.len() == 1 {
                    out.push(',');
                }
                out.push(')');
            }
            Expr::List(items) => {
                out.push('[');
                write_items(items, out);
                out.push(']');
            }
            Expr::Dict(entries) => {
                out.push('{');
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    key.write_to(out);
                    out.push_str(": ");
                    value.write_to(out);
                }
                out.push('}');
            }
        }
    }
}

fn write_items(items: &[Expr], out: &mut String) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        item.write_to(out);
    }
}

impl Stmt {
    pub fn unparse(&self) -> String {
        match self {
            Stmt::Assign { target, value } => format!("{} = {}", target, value.unparse()),
            Stmt::Expr(expr) => expr.unparse(),
        }
    }
}

impl Module {
    pub fn unparse(&self) -> String {
        self.body.iter().map(Stmt::unparse).collect::<Vec<_>>().join("\n")
    }
}

/// Renders the call plan by building and unparsing a syntax tree
#[derive(Debug, Clone)]
pub struct TreeRenderer {
    pub client: String,
}

impl Default for TreeRenderer {
    fn default() -> Self {
        Self {
            client: DEFAULT_CLIENT.to_string(),
        }
    }
}

impl TreeRenderer {
    pub fn new(client: impl Into<String>) -> Self {
        Self { client: client.into() }
    }
}

impl Renderer for TreeRenderer {
    fn render(&self, model: &RequestModel, extra: &CallArgs) -> Result<String> {
        let plan = CallPlan::build(model, extra, &self.client)?;
        Ok(build_module(&plan).unparse())
    }
}

/// Build the statement list for a plan
pub fn build_module(plan: &CallPlan) -> Module {
    let mut body = Vec::new();

    if let Some(setup) = &plan.setup {
        body.push(client_setup(setup));
    }

    let keywords = plan
        .keywords
        .iter()
        .map(|keyword| (keyword.name.clone(), arg_expr(&keyword.value)))
        .collect();
    let call = Expr::call(
        Expr::attribute(Expr::name(&plan.client), &plan.method),
        vec![Expr::str(&plan.url)],
        keywords,
    );
    body.push(Stmt::Expr(call));

    Module { body }
}

/// `client = httpx.Client(transport=httpx.HTTPTransport(uds='...'))`
fn client_setup(setup: &ClientSetup) -> Stmt {
    let transport = Expr::call(
        Expr::attribute(Expr::name(&setup.module), "HTTPTransport"),
        Vec::new(),
        vec![("uds".to_string(), Expr::str(&setup.uds))],
    );
    let client = Expr::call(
        Expr::attribute(Expr::name(&setup.module), "Client"),
        Vec::new(),
        vec![("transport".to_string(), transport)],
    );
    Stmt::Assign {
        target: setup.target.clone(),
        value: client,
    }
}

fn arg_expr(value: &ArgValue) -> Expr {
    match value {
        ArgValue::Str(s) => Expr::str(s),
        ArgValue::Inline(value) => Expr::from_json(value),
        ArgValue::Mapping(entries) => Expr::Dict(
            entries
                .iter()
                .map(|(k, v)| (Expr::str(k), Expr::from_json(v)))
                .collect(),
        ),
        ArgValue::Pairs(pairs) => Expr::List(
            pairs
                .iter()
                .map(|(k, v)| Expr::List(vec![Expr::str(k), Expr::str(v)]))
                .collect(),
        ),
        ArgValue::Tuple(a, b) => Expr::Tuple(vec![Expr::str(a), Expr::str(b)]),
        ArgValue::Bool(b) => Expr::Bool(*b),
    }
}
