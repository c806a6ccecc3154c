//! Session exclusivity across contexts sharing one origin

pub mod monitor;
pub mod ports;

pub use monitor::SessionMonitor;
pub use ports::SessionChannel;
