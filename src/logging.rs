//! Tracing subscriber setup for the binary
//!
//! Log level is controlled by `RUST_LOG`; the default is `warn`, or `debug`
//! with `--debug`. Logs go to stderr so generated code on stdout stays clean.

use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogFormat;

fn default_directive(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init(format: LogFormat, debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
