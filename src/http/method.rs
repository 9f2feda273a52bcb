//! HTTP method constants and utilities
//!
//! Methods are kept lower-case, matching the client attribute they map to
//! (`httpx.get`, `httpx.post`, ...).

/// HTTP GET method
pub const GET: &str = "get";

/// HTTP POST method
pub const POST: &str = "post";

/// All standard HTTP methods
pub const STANDARD_METHODS: &[&str] = &[
    "get", "post", "put", "patch", "delete", "head", "options", "trace", "connect",
];

/// Check if a string is a standard HTTP method
pub fn is_standard(method: &str) -> bool {
    STANDARD_METHODS.iter().any(|&m| m.eq_ignore_ascii_case(method))
}

/// Infer HTTP method based on whether the request has a body
pub fn infer(has_body: bool) -> &'static str {
    if has_body {
        POST
    } else {
        GET
    }
}

/// Normalize an explicit `-X` method to its lower-case form
pub fn normalize(method: &str) -> String {
    method.trim().to_lowercase()
}
