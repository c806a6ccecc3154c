pub mod ports;
pub mod service;

pub use ports::{AuthGateway, AuthUser};
pub use service::{AccountService, SignUpOutcome};
