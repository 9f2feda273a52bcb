//! Curl command generation
//!
//! Re-emits a [`RequestModel`] as a curl command line. Parsing the output
//! again yields an equal model.

use crate::http::method;
use crate::request::model::RequestModel;

/// Generate an equivalent curl command from the request model
pub fn to_curl(model: &RequestModel) -> String {
    let mut parts: Vec<String> = vec!["curl".to_string(), shell_escape(&model.url)];

    // Method only when it differs from what the body implies
    if model.method != method::infer(model.has_body()) {
        parts.push("-X".to_string());
        parts.push(shell_escape(&model.method.to_uppercase()));
    }

    for (name, value) in model.headers.iter() {
        parts.push("-H".to_string());
        parts.push(shell_escape(&format!("{}: {}", name, value)));
    }

    if !model.cookies.is_empty() {
        let cookie = model
            .cookies
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("; ");
        parts.push("-H".to_string());
        parts.push(shell_escape(&format!("Cookie: {}", cookie)));
    }

    if let Some(content) = &model.content {
        parts.push("--data-raw".to_string());
        parts.push(shell_escape(content));
    }

    for field in &model.form_data {
        parts.push("-F".to_string());
        parts.push(shell_escape(&format!("{}={}", field.name, field.value)));
    }

    if let Some(json) = &model.json {
        parts.push("--json".to_string());
        parts.push(shell_escape(&json.to_string()));
    }

    if let Some(auth) = &model.auth {
        parts.push("-u".to_string());
        parts.push(shell_escape(&format!("{}:{}", auth.username, auth.password)));
    }

    if let Some(proxy) = &model.proxy {
        parts.push("-x".to_string());
        parts.push(shell_escape(&proxy.http));
    }

    if let Some(uds) = &model.unix_socket {
        parts.push("--unix-socket".to_string());
        parts.push(shell_escape(uds));
    }

    if !model.verify {
        parts.push("-k".to_string());
    }

    parts.join(" ")
}

/// Quote a word for POSIX shells when it contains special characters
pub fn shell_escape(s: &str) -> String {
    let needs_escaping = s.chars().any(|c| {
        matches!(c, ' ' | '\'' | '"' | '\\' | '$' | '`' | '!' | '*' | '?' |
                    '[' | ']' | '{' | '}' | '(' | ')' | '<' | '>' | '|' |
                    '&' | ';' | '#' | '~' | '\n' | '\r' | '\t')
    });

    if !needs_escaping && !s.is_empty() {
        return s.to_string();
    }

    format!("'{}'", s.replace('\'', "'\"'\"'"))
}
