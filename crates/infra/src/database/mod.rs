//! Local SQLite store backing guest mode

pub mod guest_store;
pub mod kv_store;
pub mod manager;

pub use guest_store::{GuestProfileStore, GuestSavedItemStore};
pub use kv_store::LocalKvStore;
pub use manager::DbManager;
