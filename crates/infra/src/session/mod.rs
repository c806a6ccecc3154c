pub mod broadcast;

pub use broadcast::{BroadcastEndpoint, SessionHub};
