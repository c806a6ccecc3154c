//! # Rizz Master Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The hosted backend (PostgREST tables, GoTrue auth)
//! - The local SQLite guest store
//! - The Gemini generation client
//! - The in-process session broadcast hub
//! - Simulated ads and purchases, config loading, logging setup
//!
//! ## Architecture
//! - Implements traits defined in `rizzmaster-core`
//! - Contains all "impure" code (I/O, HTTP, SQLite)

pub mod backend;
pub mod billing;
pub mod config;
pub mod database;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod observability;
pub mod remote;
pub mod services;
pub mod session;

pub use backend::{Backend, BackendKind};
pub use billing::{FixedConfirmation, SimulatedAds, SimulatedPurchases};
pub use errors::InfraError;
pub use http::HttpClient;
pub use integrations::gemini::GeminiClient;
pub use observability::init_logging;
pub use services::{SystemClock, TracingReportSink};
pub use session::{BroadcastEndpoint, SessionHub};
