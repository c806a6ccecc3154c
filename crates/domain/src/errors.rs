//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Rizz Master
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum RizzError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Debit attempted without enough credits on a non-premium profile.
    #[error("Insufficient credits: cost {cost}, available {available}")]
    InsufficientCredits { cost: u32, available: u32 },

    #[error("Session blocked: {0}")]
    SessionBlocked(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RizzError {
    /// Short stable label, used as a structured logging field.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Database(_) => "database",
            Self::Config(_) => "config",
            Self::Network(_) => "network",
            Self::Auth(_) => "auth",
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::InsufficientCredits { .. } => "insufficient_credits",
            Self::SessionBlocked(_) => "session_blocked",
            Self::Generation(_) => "generation",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for Rizz Master operations
pub type Result<T> = std::result::Result<T, RizzError>;
