//! CLI argument parsing

pub mod args;

pub use args::{parse_call_arg, Args, LogFormat};
