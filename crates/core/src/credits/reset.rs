//! Daily quota refill
//!
//! A profile whose `last_daily_reset` differs from today gets a fresh
//! [`DAILY_CREDITS`] balance. Unused credits do not carry over; dates are
//! compared for equality, so a clock moving backwards also triggers a reset.

use chrono::NaiveDate;
use rizzmaster_domain::constants::DAILY_CREDITS;
use rizzmaster_domain::Profile;

pub fn should_reset(profile: &Profile, today: NaiveDate) -> bool {
    profile.last_daily_reset != today
}

/// Returns the profile refilled for `today`, or unchanged if already reset.
///
/// Idempotent within a day: `apply_reset(apply_reset(p, d), d) == apply_reset(p, d)`.
pub fn apply_reset(profile: Profile, today: NaiveDate) -> Profile {
    if should_reset(&profile, today) {
        Profile { credits: DAILY_CREDITS, last_daily_reset: today, ..profile }
    } else {
        profile
    }
}
