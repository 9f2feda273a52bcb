//! Error types for curl2httpx

use thiserror::Error;

/// Main error type for curl2httpx
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Missing URL, unknown flag, missing flag value, stray positional
    #[error("usage error: {0}")]
    Usage(String),

    #[error("usage error: malformed quoting: {0}")]
    Quoting(String),

    #[error(
        "conflicting body sources ({}): use only one of -d/--data, --data-binary, -F/--form or --json at a time",
        .sources.join(", ")
    )]
    ConflictingBody { sources: Vec<&'static str> },

    #[error("invalid JSON given to --json ({source}): {content}")]
    InvalidJson {
        content: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("render error: {0}")]
    Render(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// True for errors caused by how the command line was written
    pub fn is_usage(&self) -> bool {
        matches!(self, ConvertError::Usage(_) | ConvertError::Quoting(_))
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
