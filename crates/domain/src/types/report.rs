//! User content reports

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportReason {
    Offensive,
    Harmful,
    LowQuality,
    Bug,
    Other,
}

crate::impl_wire_name_conversions!(ReportReason {
    Offensive => "offensive",
    Harmful => "harmful",
    LowQuality => "low_quality",
    Bug => "bug",
    Other => "other",
});

/// A validated report about generated content or the app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentReport {
    pub reason: ReportReason,
    pub details: String,
    pub content: Option<String>,
    pub user_id: String,
    pub reported_at: DateTime<Utc>,
}
