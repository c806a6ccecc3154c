//! Commands - the calls UI events make into the controller

mod account;
mod credits;
mod generation;
mod report;
mod saved;
mod session;

pub use account::*;
pub use credits::*;
pub use generation::*;
pub use report::*;
pub use saved::*;
pub use session::*;
