//! Python httpx code generation
//!
//! Two renderers turn a [`RequestModel`] into httpx source: a string
//! template renderer that produces readable multi-line output, and a
//! syntax-tree renderer that unparses a small Python AST. Both consume the
//! same [`plan::CallPlan`] and yield semantically equivalent code.

pub mod literal;
pub mod plan;
pub mod template;
pub mod tree;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::errors::{ConvertError, Result};
use crate::request::model::RequestModel;

pub use template::TemplateRenderer;
pub use tree::TreeRenderer;

/// Module identifier the generated call is made on
pub const DEFAULT_CLIENT: &str = "httpx";

/// Additional keyword arguments for the generated call, e.g. `timeout=0.1`
pub type CallArgs = IndexMap<String, JsonValue>;

/// Turns a request model into Python source text
pub trait Renderer {
    fn render(&self, model: &RequestModel, extra: &CallArgs) -> Result<String>;
}

/// Available renderer strategies
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum RendererKind {
    /// Multi-line string template (default)
    #[default]
    Template,
    /// Syntax tree unparsed to a single call
    #[value(alias = "ast")]
    Tree,
}

impl RendererKind {
    /// Build the renderer for this strategy
    pub fn renderer(self, client: &str) -> Box<dyn Renderer> {
        match self {
            RendererKind::Template => Box::new(TemplateRenderer::new(client)),
            RendererKind::Tree => Box::new(TreeRenderer::new(client)),
        }
    }

    /// Render `model` with this strategy
    pub fn render(self, model: &RequestModel, extra: &CallArgs, client: &str) -> Result<String> {
        self.renderer(client).render(model, extra)
    }
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RendererKind::Template => write!(f, "template"),
            RendererKind::Tree => write!(f, "tree"),
        }
    }
}

impl FromStr for RendererKind {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "template" => Ok(RendererKind::Template),
            "tree" | "ast" => Ok(RendererKind::Tree),
            other => Err(ConvertError::Config(format!(
                "unknown renderer `{}` (expected `template` or `tree`)",
                other
            ))),
        }
    }
}
