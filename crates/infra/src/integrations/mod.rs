//! External service integrations

pub mod gemini;
