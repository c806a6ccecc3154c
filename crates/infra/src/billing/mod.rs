pub mod simulated;

pub use simulated::{FixedConfirmation, SimulatedAds, SimulatedPurchases};
