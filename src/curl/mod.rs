//! curl command-line handling: tokenizing, flag scanning and re-emission

pub mod emit;
pub mod flags;
pub mod tokenize;

pub use emit::to_curl;
pub use flags::{parse_flags, FlagSet};
pub use tokenize::split_command;
