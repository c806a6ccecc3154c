//! Gemini integration for reply suggestions and bios
//!
//! Calls `models/{model}:generateContent` with a JSON response schema. Chat
//! screenshots travel as inline base64 with any `data:` URL prefix removed.
//! Transport retries are left to [`HttpClient`](crate::http::HttpClient);
//! every failure surfaces as `RizzError::Generation`.

pub mod client;
pub mod types;

pub use client::GeminiClient;
pub use types::GenerationError;
