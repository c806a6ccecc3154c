//! Time source port
//!
//! The daily reset compares calendar dates, so "today" has to come from one
//! place that tests can pin.

use chrono::{DateTime, NaiveDate, Utc};

/// Wall clock used by the credit and saved-item services
pub trait Clock: Send + Sync {
    /// Calendar date the daily quota is keyed on.
    fn today(&self) -> NaiveDate;

    /// Current instant, used for saved-item and report timestamps.
    fn now(&self) -> DateTime<Utc>;
}
