//! Request model construction
//!
//! Turns scanned curl flags into the normalized [`RequestModel`] shared by
//! every renderer.

pub mod builder;
pub mod headers;
pub mod model;

pub use builder::build_request;
pub use headers::{normalize_headers, NormalizedHeaders};
pub use model::{Auth, FormField, Headers, Proxy, RequestModel};
