//! Utility modules for the app layer

pub mod command_helpers;
pub mod health;
pub mod logging;
