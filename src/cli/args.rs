//! Command-line argument definitions

use clap::{ArgAction, Parser, ValueEnum};
use serde_json::Value as JsonValue;

use crate::codegen::RendererKind;

/// curl2httpx - Convert curl commands into Python httpx calls
#[derive(Parser, Debug, Clone)]
#[command(name = "curl2httpx", version, about, long_about = None)]
pub struct Args {
    /// curl command as a single shell-quoted string
    #[arg(short = 'c', long = "command", value_name = "STRING", conflicts_with = "curl_args")]
    pub command: Option<String>,

    /// Rendering strategy (default from config, else template)
    #[arg(long = "renderer", value_name = "RENDERER", value_enum)]
    pub renderer: Option<RendererKind>,

    /// Extra keyword argument for the call; VALUE is JSON when valid, else a string
    #[arg(short = 'a', long = "arg", value_name = "NAME=VALUE", value_parser = parse_call_arg, action = ArgAction::Append)]
    pub call_args: Vec<(String, JsonValue)>,

    /// Client identifier the call is made on
    #[arg(long = "client", value_name = "IDENT")]
    pub client: Option<String>,

    /// Print the normalized request as a curl command instead of Python
    #[arg(long = "to-curl", action = ArgAction::SetTrue)]
    pub to_curl: bool,

    /// Output format for structured logging: json (JSON Lines) or text (default)
    #[arg(long = "log-format", value_name = "FORMAT", value_enum)]
    pub log_format: Option<LogFormat>,

    /// Show traceback on error
    #[arg(long = "traceback", action = ArgAction::SetTrue)]
    pub traceback: bool,

    /// Debug mode (implies --traceback)
    #[arg(long = "debug", action = ArgAction::SetTrue)]
    pub debug: bool,

    /// Pre-split curl arguments, starting with `curl`
    #[arg(value_name = "CURL_ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub curl_args: Vec<String>,
}

/// Log format for structured output
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON Lines format for parsing
    Json,
}

/// Parse `NAME=VALUE`; VALUE is taken as JSON when it parses, else as a string
pub fn parse_call_arg(s: &str) -> Result<(String, JsonValue), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid call argument '{}': expected NAME=VALUE", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("invalid call argument '{}': empty name", s));
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| JsonValue::String(value.to_string()));
    Ok((name.to_string(), value))
}
