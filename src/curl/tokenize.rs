//! Shell-style word splitting for curl command strings
//!
//! Handles single quotes, double quotes, backslash escapes, ANSI-C `$'...'`
//! quoting and backslash-newline line continuations.

use tracing::trace;

use crate::errors::{ConvertError, Result};
use crate::strings::unescape;

/// Collapse `" \<newline>"` continuation sequences into a single space
pub fn normalize_newlines(command: &str) -> String {
    command
        .replace(" \\\r\n", " ")
        .replace(" \\\n", " ")
}

/// Split a command string into words the way a POSIX shell would
pub fn split_command(command: &str) -> Result<Vec<String>> {
    let normalized = normalize_newlines(command);
    let tokens = split_words(&normalized)?;
    trace!(count = tokens.len(), "Tokenized curl command");
    Ok(tokens)
}

fn split_words(input: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    // Distinguishes an empty quoted word ('') from no word at all
    let mut in_word = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ' ' | '\t' | '\n' | '\r' => {
                if in_word {
                    tokens.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            '\\' => match chars.next() {
                Some('\n') => {}
                Some('\r') if chars.peek() == Some(&'\n') => {
                    chars.next();
                }
                Some(escaped) => {
                    current.push(escaped);
                    in_word = true;
                }
                None => {
                    return Err(ConvertError::Quoting(
                        "no escaped character after trailing backslash".to_string(),
                    ))
                }
            },
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(ch) => current.push(ch),
                        None => {
                            return Err(ConvertError::Quoting(
                                "no closing single quotation".to_string(),
                            ))
                        }
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(ch @ ('"' | '\\' | '$' | '`')) => current.push(ch),
                            Some('\n') => {}
                            Some(ch) => {
                                current.push('\\');
                                current.push(ch);
                            }
                            None => {
                                return Err(ConvertError::Quoting(
                                    "no closing double quotation".to_string(),
                                ))
                            }
                        },
                        Some(ch) => current.push(ch),
                        None => {
                            return Err(ConvertError::Quoting(
                                "no closing double quotation".to_string(),
                            ))
                        }
                    }
                }
            }
            '$' if chars.peek() == Some(&'\'') => {
                chars.next();
                in_word = true;
                let mut raw = String::new();
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some('\\') => {
                            raw.push('\\');
                            match chars.next() {
                                Some(ch) => raw.push(ch),
                                None => {
                                    return Err(ConvertError::Quoting(
                                        "no closing quotation in $'...' string".to_string(),
                                    ))
                                }
                            }
                        }
                        Some(ch) => raw.push(ch),
                        None => {
                            return Err(ConvertError::Quoting(
                                "no closing quotation in $'...' string".to_string(),
                            ))
                        }
                    }
                }
                current.push_str(&unescape(&raw));
            }
            _ => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if in_word {
        tokens.push(current);
    }

    Ok(tokens)
}
