//! HTTP protocol types and constants

pub mod method;
