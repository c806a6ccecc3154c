pub mod ports;

pub use ports::{ProfileStore, SavedItemStore};
