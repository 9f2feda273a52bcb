//! curl2httpx library interface
//!
//! Converts curl command lines into equivalent Python `httpx` calls.
//!
//! # Module Organization
//!
//! - [`curl`] - Tokenizing, flag scanning and curl re-emission
//! - [`request`] - Normalized request model and its builder
//! - [`codegen`] - Template and syntax-tree renderers
//! - [`errors`] - Error types (ConvertError, Result)
//! - [`status`] - Exit status codes (ExitStatus)
//! - [`core`] - Main execution logic for the binary

pub mod cli;
pub mod codegen;
pub mod config;
pub mod cookies;
pub mod core;
pub mod curl;
pub mod errors;
pub mod http;
pub mod logging;
pub mod request;
pub mod status;
pub mod strings;

use tracing::debug;

pub use codegen::{CallArgs, Renderer, RendererKind, DEFAULT_CLIENT};
pub use errors::{ConvertError, Result};
pub use request::RequestModel;

/// Parse a shell-quoted curl command string into a request model
pub fn parse_request(command: &str) -> Result<RequestModel> {
    let tokens = curl::split_command(command)?;
    debug!(tokens = ?tokens, "Split curl command");
    parse_request_args(&tokens)
}

/// Parse a pre-split curl argument list (command name first)
pub fn parse_request_args<S: AsRef<str>>(args: &[S]) -> Result<RequestModel> {
    let flags = curl::parse_flags(args)?;
    request::build_request(flags)
}

/// Convert a curl command string to Python source using the default client
pub fn convert(command: &str, kind: RendererKind, extra: &CallArgs) -> Result<String> {
    let model = parse_request(command)?;
    kind.render(&model, extra, DEFAULT_CLIENT)
}

/// Convert a pre-split curl argument list to Python source
pub fn convert_args<S: AsRef<str>>(args: &[S], kind: RendererKind, extra: &CallArgs) -> Result<String> {
    let model = parse_request_args(args)?;
    kind.render(&model, extra, DEFAULT_CLIENT)
}
