//! Domain types for Rizz Master

pub mod auth;
pub mod entitlement;
pub mod generation;
pub mod profile;
pub mod report;
pub mod saved;
pub mod session;

pub use auth::*;
pub use entitlement::*;
pub use generation::*;
pub use profile::*;
pub use report::*;
pub use saved::*;
pub use session::*;
