//! Helpers for turning free-form model replies into typed values.

pub mod parser;
pub mod response;

pub use parser::parse_with_fallback;
pub use response::LlmResponse;
