//! Credit quota: daily refill policy and the ledger that mutates balances

pub mod ledger;
pub mod reset;

pub use ledger::{Charge, CreditLedger};
pub use reset::{apply_reset, should_reset};
