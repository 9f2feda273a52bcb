//! Main execution logic for the binary

use std::io::Read;

use clap::Parser;
use tracing::{debug, warn};

use crate::cli::Args;
use crate::codegen::{CallArgs, DEFAULT_CLIENT};
use crate::config::Config;
use crate::curl::to_curl;
use crate::errors::{ConvertError, Result};
use crate::request::RequestModel;
use crate::status::ExitStatus;
use crate::{logging, parse_request, parse_request_args};

/// Main entry point for the CLI.
///
/// Parses arguments, loads configuration and prints the converted command.
pub fn run(args: Vec<String>) -> ExitStatus {
    let parsed = match Args::try_parse_from(&args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    logging::init(parsed.log_format.unwrap_or_default(), parsed.debug);
    let traceback = parsed.traceback || parsed.debug;

    let config = match Config::load() {
        Ok(config) => {
            debug!(config_dir = %config.config_dir.display(), "Loaded config");
            config
        }
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            eprintln!("Warning: Failed to load config: {}", e);
            Config::default()
        }
    };

    match program(&parsed, &config) {
        Ok(output) => {
            println!("{}", output);
            ExitStatus::Success
        }
        Err(e) => handle_error(e, traceback),
    }
}

/// Convert the requested command, returning the text to print
pub fn program(args: &Args, config: &Config) -> Result<String> {
    let model = read_model(args)?;

    if args.to_curl {
        return Ok(to_curl(&model));
    }

    let kind = args.renderer.or(config.renderer).unwrap_or_default();
    let client = args
        .client
        .as_deref()
        .or(config.client.as_deref())
        .unwrap_or(DEFAULT_CLIENT);
    let extra = merge_call_args(&config.call_args, &args.call_args);

    debug!(renderer = %kind, client = %client, extra = extra.len(), "Rendering request");
    kind.render(&model, &extra, client)
}

fn read_model(args: &Args) -> Result<RequestModel> {
    if let Some(command) = &args.command {
        return parse_request(command);
    }
    if !args.curl_args.is_empty() {
        return parse_request_args(&args.curl_args);
    }
    if atty::is(atty::Stream::Stdin) {
        return Err(ConvertError::Usage(
            "no curl command given: pass it as arguments, with --command, or on stdin".to_string(),
        ));
    }

    let mut command = String::new();
    std::io::stdin().read_to_string(&mut command)?;
    debug!(bytes = command.len(), "Read command from stdin");
    parse_request(command.trim())
}

/// Config call arguments overridden by command-line ones of the same name
fn merge_call_args(config: &CallArgs, cli: &[(String, serde_json::Value)]) -> CallArgs {
    let mut merged = config.clone();
    for (name, value) in cli {
        merged.insert(name.clone(), value.clone());
    }
    merged
}

fn handle_error(error: ConvertError, traceback: bool) -> ExitStatus {
    if traceback {
        eprintln!("Error: {:?}", error);
    } else {
        eprintln!("Error: {}", error);
    }

    ExitStatus::Error
}
