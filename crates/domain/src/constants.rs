//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Credit quotas
pub const DAILY_CREDITS: u32 = 5;
pub const REWARD_CREDITS: u32 = 3;

// Cost schedule
pub const COST_CHAT_TEXT: u32 = 1;
pub const COST_CHAT_WITH_IMAGE: u32 = 2;
pub const COST_BIO: u32 = 1;

// Guest mode sentinels
pub const GUEST_USER_ID: &str = "guest";
pub const GUEST_EMAIL: &str = "guest@rizzmaster.ai";

// Local key-value storage keys (guest mode has no user partitioning)
pub const GUEST_PROFILE_KEY: &str = "guest_profile";
pub const GUEST_SAVED_ITEMS_KEY: &str = "guest_saved_items";

// Cross-context session exclusivity
pub const SESSION_TOPIC: &str = "rizz_session_sync";
pub const SESSION_CHANNEL_CAPACITY: usize = 16;

// Every Nth successful generation asks the user for a store review
pub const REVIEW_PROMPT_INTERVAL: u32 = 3;

// Free tier waits before generation (premium skips it)
pub const FREE_TIER_DELAY_MS: u64 = 2000;

// Simulated billing round-trip
pub const SIMULATED_PURCHASE_DELAY_MS: u64 = 2000;
pub const PREMIUM_PRICE_LABEL: &str = "$4.99/mo";

// User-facing messages
pub const MSG_CHAT_NEEDS_CONTEXT: &str = "Give me some context!";
pub const MSG_BIO_NEEDS_INPUT: &str = "I can't write a bio for a ghost!";
pub const MSG_GENERATION_FAILED: &str = "Error generating. Try again.";
pub const MSG_ADS_UNAVAILABLE: &str = "Ads not available right now. Try again later.";
