//! # formfill Provider - Gemini
//!
//! Generates field values with the Google Gemini `generateContent` API.
//! All fields of a page go out in a single request; the reply is expected to
//! hold a JSON array with one `{ "value": ... }` object per field.

mod client;
mod generator;
mod prompt;
mod response;
mod types;

pub use client::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient, GeminiSettings};
pub use generator::GeminiGenerator;
pub use prompt::build_prompt;
pub use response::{extract_array, parse_values};
pub use types::*;
