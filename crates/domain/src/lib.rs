//! # Rizz Master Domain
//!
//! Business domain types and models for Rizz Master.
//!
//! This crate contains:
//! - Domain data types (Profile, SavedItem, ReplySuggestions, etc.)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants (credit quotas, guest sentinels, storage keys)
//!
//! ## Architecture
//! - No dependencies on other Rizz Master crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
