pub mod service;

pub use service::{SaveToggle, SavedItemsService};
