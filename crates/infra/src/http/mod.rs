//! HTTP client with retry

pub mod client;

pub use client::{ensure_success, error_detail, HttpClient, HttpClientBuilder};
