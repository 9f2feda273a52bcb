//! Common test utilities for curl2httpx integration tests
//!
//! - CLI invocation helpers with an isolated config directory
//! - A small Python tokenizer for comparing rendered source
//! - The conversion fixture table shared by several test files

#![allow(dead_code)]

pub mod fixtures;

use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Exit status codes matching the Rust application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    Error = 1,
}

impl From<i32> for ExitStatus {
    fn from(code: i32) -> Self {
        match code {
            0 => ExitStatus::Success,
            _ => ExitStatus::Error,
        }
    }
}

/// Result of running the CLI
#[derive(Debug)]
pub struct CliResponse {
    pub stdout: String,
    pub stderr: String,
    pub exit_status: ExitStatus,
    pub exit_code: i32,
}

impl CliResponse {
    /// Check if stdout contains a substring
    pub fn contains(&self, needle: &str) -> bool {
        self.stdout.contains(needle)
    }
}

/// Isolated environment for one CLI invocation
pub struct TestEnvironment {
    /// Temporary config directory
    pub config_dir: TempDir,
    /// Environment variables to set
    pub env_vars: HashMap<String, String>,
    /// Standard input content
    pub stdin: Option<Vec<u8>>,
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnvironment {
    pub fn new() -> Self {
        let config_dir = TempDir::new().expect("Failed to create temp config dir");
        Self {
            config_dir,
            env_vars: HashMap::new(),
            stdin: None,
        }
    }

    pub fn set_env(&mut self, key: &str, value: &str) -> &mut Self {
        self.env_vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn set_stdin(&mut self, content: &str) -> &mut Self {
        self.stdin = Some(content.as_bytes().to_vec());
        self
    }

    /// Write `config.toml` into the config directory
    pub fn write_config(&mut self, content: &str) -> &mut Self {
        std::fs::write(self.config_path().join("config.toml"), content).expect("Failed to write config");
        self
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.path().to_path_buf()
    }
}

/// Run the CLI with the given arguments (excluding the program name)
pub fn run(args: &[&str]) -> CliResponse {
    run_with_env(args, &TestEnvironment::new())
}

/// Run the CLI with the given arguments and environment
pub fn run_with_env(args: &[&str], env: &TestEnvironment) -> CliResponse {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_curl2httpx"));
    cmd.args(args);

    cmd.env("CURL2HTTPX_CONFIG_DIR", env.config_path());
    cmd.env_remove("RUST_LOG");
    for (key, value) in &env.env_vars {
        cmd.env(key, value);
    }

    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    if let Some(ref stdin_data) = env.stdin {
        cmd.stdin(Stdio::piped());
        let mut child = cmd.spawn().expect("Failed to spawn command");
        {
            let stdin = child.stdin.as_mut().expect("Failed to open stdin");
            stdin.write_all(stdin_data).expect("Failed to write to stdin");
        }
        let output = child.wait_with_output().expect("Failed to wait for command");
        parse_output(output)
    } else {
        cmd.stdin(Stdio::null());
        let output = cmd.output().expect("Failed to execute command");
        parse_output(output)
    }
}

fn parse_output(output: Output) -> CliResponse {
    let exit_code = output.status.code().unwrap_or(-1);
    CliResponse {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_status: ExitStatus::from(exit_code),
        exit_code,
    }
}

/// A Python source token with string literals decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PyToken {
    Name(String),
    Number(String),
    Str(String),
    Punct(char),
}

/// Tokenize Python source, decoding string literals so that quote style and
/// escape spelling do not matter
pub fn python_tokens(source: &str) -> Vec<PyToken> {
    let mut tokens = Vec::new();
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {}
            '\'' | '"' => {
                let mut value = String::new();
                loop {
                    match chars.next().expect("unterminated string literal") {
                        q if q == c => break,
                        '\\' => value.push(decode_escape(&mut chars)),
                        other => value.push(other),
                    }
                }
                tokens.push(PyToken::Str(value));
            }
            c if c.is_ascii_digit() || (c == '-' && chars.peek().is_some_and(|n| n.is_ascii_digit())) => {
                let mut number = c.to_string();
                while let Some(&n) = chars.peek() {
                    if n.is_ascii_alphanumeric() || n == '.' || n == '+' || n == '-' {
                        number.push(n);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(PyToken::Number(number));
            }
            c if c.is_alphabetic() || c == '_' => {
                let mut name = c.to_string();
                while let Some(&n) = chars.peek() {
                    if n.is_alphanumeric() || n == '_' {
                        name.push(n);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(PyToken::Name(name));
            }
            other => tokens.push(PyToken::Punct(other)),
        }
    }

    tokens
}

fn decode_escape(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> char {
    match chars.next().expect("dangling escape") {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        'b' => '\u{8}',
        'f' => '\u{c}',
        'x' => decode_hex(chars, 2),
        'u' => decode_hex(chars, 4),
        'U' => decode_hex(chars, 8),
        other => other,
    }
}

fn decode_hex(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, len: usize) -> char {
    let digits: String = chars.take(len).collect();
    u32::from_str_radix(&digits, 16)
        .ok()
        .and_then(char::from_u32)
        .expect("invalid hex escape")
}

/// Tokens with trailing commas before closing brackets removed
pub fn normalized(source: &str) -> Vec<PyToken> {
    let tokens = python_tokens(source);
    let mut out: Vec<PyToken> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if matches!(token, PyToken::Punct(')' | ']' | '}')) && out.last() == Some(&PyToken::Punct(',')) {
            out.pop();
        }
        out.push(token);
    }
    out
}
