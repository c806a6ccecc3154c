//! # Rizz Master App
//!
//! Application layer - context wiring and commands.
//!
//! This crate contains:
//! - Commands (UI event → controller bridge)
//! - Application context (dependency injection)
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Chooses the storage backend once at startup

pub mod commands;
pub mod context;
pub mod utils;

pub use commands::*;
pub use context::*;
