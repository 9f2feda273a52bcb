//! String utilities
//!
//! Backslash escape decoding shared by `$'...'` quoting and cookie values.

use std::iter::Peekable;
use std::str::Chars;

/// Decode backslash escape sequences.
///
/// Supports the C escapes (`\n`, `\t`, `\r`, `\a`, `\b`, `\f`, `\v`, `\e`),
/// quotes and backslash, octal `\ooo`, `\xHH`, `\uHHHH` and `\UHHHHHHHH`.
/// Unknown or malformed sequences are kept verbatim, backslash included.
pub fn unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        let Some(next) = chars.next() else {
            out.push('\\');
            break;
        };

        match next {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'a' => out.push('\x07'),
            'b' => out.push('\x08'),
            'f' => out.push('\x0c'),
            'v' => out.push('\x0b'),
            'e' | 'E' => out.push('\x1b'),
            '\\' | '\'' | '"' | '?' => out.push(next),
            '0'..='7' => {
                let mut value = next.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                push_code_point(&mut out, value, &format!("\\{:o}", value));
            }
            'x' => push_hex(&mut out, &mut chars, 'x', 2),
            'u' => push_hex(&mut out, &mut chars, 'u', 4),
            'U' => push_hex(&mut out, &mut chars, 'U', 8),
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }

    out
}

/// Read up to `max` hex digits and push the resulting character
fn push_hex(out: &mut String, chars: &mut Peekable<Chars<'_>>, marker: char, max: usize) {
    let mut digits = String::new();
    while digits.len() < max {
        match chars.peek() {
            Some(d) if d.is_ascii_hexdigit() => {
                digits.push(*d);
                chars.next();
            }
            _ => break,
        }
    }

    let original = format!("\\{}{}", marker, digits);
    match u32::from_str_radix(&digits, 16) {
        Ok(value) => push_code_point(out, value, &original),
        Err(_) => out.push_str(&original),
    }
}

fn push_code_point(out: &mut String, value: u32, original: &str) {
    match char::from_u32(value) {
        Some(ch) => out.push(ch),
        None => out.push_str(original),
    }
}
