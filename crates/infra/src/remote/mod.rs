//! Hosted backend: auth plus the `profiles` and `saved_items` tables

pub mod auth;
pub mod client;
pub mod profile_store;
pub mod saved_store;

pub use auth::RemoteAuth;
pub use client::RemoteClient;
pub use profile_store::RemoteProfileStore;
pub use saved_store::RemoteSavedItemStore;
