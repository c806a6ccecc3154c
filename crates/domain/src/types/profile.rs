//! User profile types
//!
//! One profile per user (remote `profiles` row) or per device (guest record).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{DAILY_CREDITS, GUEST_EMAIL, GUEST_USER_ID};

/// Credit balance and entitlement for one identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Identity key; [`GUEST_USER_ID`] marks the local-only guest.
    pub id: String,
    pub email: String,
    pub credits: u32,
    pub is_premium: bool,
    /// Calendar date of the last quota refill, compared by equality only.
    pub last_daily_reset: NaiveDate,
}

impl Profile {
    /// Fresh profile with a full daily quota.
    pub fn new(id: impl Into<String>, email: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            credits: DAILY_CREDITS,
            is_premium: false,
            last_daily_reset: today,
        }
    }

    /// Default guest profile created on first launch without a backend.
    pub fn guest(today: NaiveDate) -> Self {
        Self::new(GUEST_USER_ID, GUEST_EMAIL, today)
    }

    pub fn is_guest(&self) -> bool {
        self.id == GUEST_USER_ID
    }
}
