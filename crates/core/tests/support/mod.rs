//! Shared test helpers for `rizzmaster-core` integration tests.
//!
//! In-memory stores and scripted collaborators so the credit, session and
//! account tests can focus on behaviour instead of wiring.

#![allow(dead_code)]

pub mod collaborators;
pub mod stores;

use chrono::NaiveDate;
use rizzmaster_domain::Profile;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn profile(id: &str, credits: u32, is_premium: bool, last_reset: NaiveDate) -> Profile {
    Profile { credits, is_premium, ..Profile::new(id, format!("{id}@example.com"), last_reset) }
}
